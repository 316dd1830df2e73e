use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{DocumentParser, DocumentParserError};
use crate::domain::{DocumentMetadata, ParsedDocument};

/// `.txt`/`.md` passthrough: one document per file.
pub struct PlainTextAdapter;

#[async_trait]
impl DocumentParser for PlainTextAdapter {
    async fn parse(&self, path: &Path) -> Result<Vec<ParsedDocument>, DocumentParserError> {
        let bytes = tokio::fs::read(path).await?;
        let content = String::from_utf8(bytes)
            .map_err(|e| DocumentParserError::ExtractionFailed(e.to_string()))?;

        Ok(vec![ParsedDocument::new(
            content,
            DocumentMetadata::for_source(path),
        )])
    }
}
