use std::path::{Path, PathBuf};

use async_trait::async_trait;
use csv::ReaderBuilder;

use crate::application::ports::{DocumentParser, DocumentParserError};
use crate::domain::{DocumentMetadata, ParsedDocument};

/// Row-oriented CSV extraction: one document per data row, rendered as
/// `header: value` lines, tagged with a zero-based row index.
pub struct CsvAdapter;

impl CsvAdapter {
    fn extract(path: &Path) -> Result<Vec<ParsedDocument>, DocumentParserError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|e| {
                DocumentParserError::ExtractionFailed(format!("failed to open csv: {e}"))
            })?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| {
                DocumentParserError::ExtractionFailed(format!("failed to read csv headers: {e}"))
            })?
            .iter()
            .map(str::to_string)
            .collect();

        let mut documents = Vec::new();

        for (row_index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                DocumentParserError::ExtractionFailed(format!("failed to read csv record: {e}"))
            })?;

            let content = headers
                .iter()
                .zip(record.iter())
                .map(|(header, value)| format!("{header}: {value}"))
                .collect::<Vec<_>>()
                .join("\n");

            let mut metadata = DocumentMetadata::for_source(path);
            metadata.row = Some(row_index);
            documents.push(ParsedDocument::new(content, metadata));
        }

        Ok(documents)
    }
}

#[async_trait]
impl DocumentParser for CsvAdapter {
    async fn parse(&self, path: &Path) -> Result<Vec<ParsedDocument>, DocumentParserError> {
        let owned: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::extract(&owned))
            .await
            .map_err(|e| DocumentParserError::ExtractionFailed(format!("task join error: {e}")))?
    }
}
