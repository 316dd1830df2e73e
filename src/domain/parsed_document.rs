use std::path::PathBuf;

use serde::Serialize;

use super::ExtractedImage;

/// One extracted unit of content: a PDF page, a DOCX file, a PPTX slide,
/// a CSV row, or a spreadsheet sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedDocument {
    pub content: String,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DocumentMetadata {
    pub source: PathBuf,
    /// Zero-based page index (PDF).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    /// Zero-based data-row index (CSV).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    /// One-based slide number (PPTX).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide: Option<usize>,
    /// Sheet name (XLSX/XLS).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,
    /// Images associated with this document. `Some` exactly when the source
    /// was a PDF; an empty list means the page had no embedded images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ExtractedImage>>,
}

impl DocumentMetadata {
    pub fn for_source(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }
}

impl ParsedDocument {
    pub fn new(content: String, metadata: DocumentMetadata) -> Self {
        Self { content, metadata }
    }
}
