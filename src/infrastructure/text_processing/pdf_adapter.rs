use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use lopdf::Document;

use crate::application::ports::{DocumentParser, DocumentParserError};
use crate::domain::{DocumentMetadata, ParsedDocument};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// PDF text pass: one document per page, blanks included, tagged with a
/// zero-based page index. The image pass relies on that one-document-per-page
/// ordering to associate images.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path) -> Result<Vec<ParsedDocument>, DocumentParserError> {
        let doc = Document::load(path).map_err(|e| {
            DocumentParserError::ExtractionFailed(format!("failed to parse PDF: {e}"))
        })?;

        let mut documents = Vec::new();

        for (index, page_number) in doc.get_pages().keys().enumerate() {
            let text = doc.extract_text(&[*page_number]).unwrap_or_default();

            let mut metadata = DocumentMetadata::for_source(path);
            metadata.page = Some(index);
            documents.push(ParsedDocument::new(text, metadata));
        }

        Ok(documents)
    }
}

#[async_trait]
impl DocumentParser for PdfAdapter {
    async fn parse(&self, path: &Path) -> Result<Vec<ParsedDocument>, DocumentParserError> {
        let owned: PathBuf = path.to_path_buf();

        let documents = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&owned)),
        )
        .await
        .map_err(|_| {
            DocumentParserError::ExtractionFailed("PDF extraction timed out".to_string())
        })?
        .map_err(|e| DocumentParserError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::debug!(page_count = documents.len(), "PDF text extraction complete");
        Ok(documents)
    }
}
