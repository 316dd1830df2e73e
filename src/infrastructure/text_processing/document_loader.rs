use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{DocumentParser, DocumentParserError};
use crate::domain::{ExtractedImage, ParsedDocument, SourceFormat};
use crate::error::LoadError;

use super::csv_adapter::CsvAdapter;
use super::docx_adapter::DocxAdapter;
use super::pdf_adapter::PdfAdapter;
use super::pdf_image_extractor::extract_pdf_images;
use super::plain_text_adapter::PlainTextAdapter;
use super::pptx_adapter::PptxAdapter;
use super::spreadsheet_adapter::SpreadsheetAdapter;

/// Where extracted PDF images land unless the caller picks a directory.
pub const DEFAULT_IMAGE_DIR: &str = "./extracted_images";

/// Loads a file into [`ParsedDocument`] records, dispatching to a
/// format-specific parser by extension. PDFs additionally get their embedded
/// images extracted and associated per page.
pub struct DocumentLoader {
    parsers: HashMap<SourceFormat, Arc<dyn DocumentParser>>,
}

impl DocumentLoader {
    /// Loader wired with every bundled format adapter.
    pub fn new() -> Self {
        let mut parsers: HashMap<SourceFormat, Arc<dyn DocumentParser>> = HashMap::new();
        parsers.insert(SourceFormat::Pdf, Arc::new(PdfAdapter::new()));
        parsers.insert(SourceFormat::Docx, Arc::new(DocxAdapter));
        parsers.insert(SourceFormat::PlainText, Arc::new(PlainTextAdapter));
        parsers.insert(SourceFormat::Pptx, Arc::new(PptxAdapter));
        parsers.insert(SourceFormat::Csv, Arc::new(CsvAdapter));
        parsers.insert(SourceFormat::Spreadsheet, Arc::new(SpreadsheetAdapter));
        Self { parsers }
    }

    /// Loader with a custom parser table.
    pub fn with_parsers(parsers: Vec<(SourceFormat, Arc<dyn DocumentParser>)>) -> Self {
        Self {
            parsers: parsers.into_iter().collect(),
        }
    }

    pub async fn load(&self, file_path: &Path) -> Result<Vec<ParsedDocument>, LoadError> {
        self.load_with_image_dir(file_path, Path::new(DEFAULT_IMAGE_DIR))
            .await
    }

    /// Load `file_path`, saving any extracted PDF images under `image_dir`.
    /// All-or-nothing: every failure surfaces as a single wrapped
    /// [`LoadError`]; no partial results.
    pub async fn load_with_image_dir(
        &self,
        file_path: &Path,
        image_dir: &Path,
    ) -> Result<Vec<ParsedDocument>, LoadError> {
        match self.load_inner(file_path, image_dir).await {
            Ok(documents) => Ok(documents),
            Err(e) => {
                tracing::error!(file = %file_path.display(), error = %e, "Error loading document");
                Err(LoadError::new("Error while loading file", e))
            }
        }
    }

    async fn load_inner(
        &self,
        file_path: &Path,
        image_dir: &Path,
    ) -> Result<Vec<ParsedDocument>, DocumentParserError> {
        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        let format = SourceFormat::from_extension(&ext)
            .filter(|format| self.parsers.contains_key(format))
            .ok_or_else(|| DocumentParserError::UnsupportedFormat(format!(".{ext}")))?;
        let parser = &self.parsers[&format];

        if format != SourceFormat::Pdf {
            let documents = parser.parse(file_path).await?;
            tracing::info!(
                document_count = documents.len(),
                extension = %ext,
                "Documents loaded"
            );
            return Ok(documents);
        }

        std::fs::create_dir_all(image_dir)?;

        let mut documents = parser.parse(file_path).await?;

        let owned_path = file_path.to_path_buf();
        let owned_dir = image_dir.to_path_buf();
        let images =
            tokio::task::spawn_blocking(move || extract_pdf_images(&owned_path, &owned_dir))
                .await
                .map_err(|e| {
                    DocumentParserError::ExtractionFailed(format!("task join error: {e}"))
                })??;

        // Association invariant: the text pass emits one document per page in
        // order with zero-based page metadata; images carry 1-indexed page
        // numbers. A parser breaking that ordering would mis-associate.
        for document in &mut documents {
            let page_number = document.metadata.page.unwrap_or(0) as u32 + 1;
            let page_images: Vec<ExtractedImage> = images
                .iter()
                .filter(|image| image.page == page_number)
                .cloned()
                .collect();
            document.metadata.images = Some(page_images);
        }

        tracing::info!(
            document_count = documents.len(),
            image_count = images.len(),
            "PDF text and images extracted"
        );
        Ok(documents)
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}
