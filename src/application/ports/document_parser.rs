use std::path::Path;

use async_trait::async_trait;

use crate::domain::ParsedDocument;

/// Produces a sequence of [`ParsedDocument`] records from a file on disk.
#[async_trait]
pub trait DocumentParser: Send + Sync {
    async fn parse(&self, path: &Path) -> Result<Vec<ParsedDocument>, DocumentParserError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentParserError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
