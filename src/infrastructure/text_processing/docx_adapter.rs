use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{DocumentParser, DocumentParserError};
use crate::domain::{DocumentMetadata, ParsedDocument};

use super::ooxml;
use super::text_sanitizer::sanitize_extracted_text;

/// Word-document text extraction: one document per file.
pub struct DocxAdapter;

impl DocxAdapter {
    fn extract(path: &Path) -> Result<Vec<ParsedDocument>, DocumentParserError> {
        let mut archive = ooxml::open_archive(path)?;
        let xml = ooxml::read_entry(&mut archive, "word/document.xml")?;
        let text = sanitize_extracted_text(&ooxml::xml_text(&xml, &["w:p"]));

        Ok(vec![ParsedDocument::new(
            text,
            DocumentMetadata::for_source(path),
        )])
    }
}

#[async_trait]
impl DocumentParser for DocxAdapter {
    async fn parse(&self, path: &Path) -> Result<Vec<ParsedDocument>, DocumentParserError> {
        let owned: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::extract(&owned))
            .await
            .map_err(|e| DocumentParserError::ExtractionFailed(format!("task join error: {e}")))?
    }
}
