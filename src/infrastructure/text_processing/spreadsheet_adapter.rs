use std::path::{Path, PathBuf};

use async_trait::async_trait;
use calamine::{Reader, open_workbook_auto};

use crate::application::ports::{DocumentParser, DocumentParserError};
use crate::domain::{DocumentMetadata, ParsedDocument};

/// Spreadsheet extraction (XLSX and legacy XLS): one document per sheet,
/// rows rendered as comma-joined lines.
pub struct SpreadsheetAdapter;

impl SpreadsheetAdapter {
    fn extract(path: &Path) -> Result<Vec<ParsedDocument>, DocumentParserError> {
        let mut workbook = open_workbook_auto(path).map_err(|e| {
            DocumentParserError::ExtractionFailed(format!("failed to open workbook: {e}"))
        })?;

        let mut documents = Vec::new();

        for sheet_name in workbook.sheet_names().to_owned() {
            let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
                DocumentParserError::ExtractionFailed(format!(
                    "failed to read sheet {sheet_name}: {e}"
                ))
            })?;

            let content = range
                .rows()
                .map(|row| {
                    row.iter()
                        .map(|cell| cell.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .collect::<Vec<_>>()
                .join("\n");

            let mut metadata = DocumentMetadata::for_source(path);
            metadata.sheet = Some(sheet_name);
            documents.push(ParsedDocument::new(content, metadata));
        }

        Ok(documents)
    }
}

#[async_trait]
impl DocumentParser for SpreadsheetAdapter {
    async fn parse(&self, path: &Path) -> Result<Vec<ParsedDocument>, DocumentParserError> {
        let owned: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::extract(&owned))
            .await
            .map_err(|e| DocumentParserError::ExtractionFailed(format!("task join error: {e}")))?
    }
}
