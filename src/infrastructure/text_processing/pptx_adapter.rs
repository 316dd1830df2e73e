use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{DocumentParser, DocumentParserError};
use crate::domain::{DocumentMetadata, ParsedDocument};

use super::ooxml;
use super::text_sanitizer::sanitize_extracted_text;

/// Slide-deck text extraction: one document per slide, in deck order.
pub struct PptxAdapter;

impl PptxAdapter {
    fn extract(path: &Path) -> Result<Vec<ParsedDocument>, DocumentParserError> {
        let mut archive = ooxml::open_archive(path)?;

        let mut slide_names: Vec<String> = archive
            .file_names()
            .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
            .map(String::from)
            .collect();
        // slide10.xml sorts after slide9.xml only numerically
        slide_names.sort_by_key(|name| slide_ordinal(name));

        let mut documents = Vec::new();

        for (index, name) in slide_names.iter().enumerate() {
            let xml = ooxml::read_entry(&mut archive, name)?;
            let text = sanitize_extracted_text(&ooxml::xml_text(&xml, &["a:p"]));

            let mut metadata = DocumentMetadata::for_source(path);
            metadata.slide = Some(index + 1);
            documents.push(ParsedDocument::new(text, metadata));
        }

        Ok(documents)
    }
}

fn slide_ordinal(name: &str) -> usize {
    name.chars()
        .filter(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}

#[async_trait]
impl DocumentParser for PptxAdapter {
    async fn parse(&self, path: &Path) -> Result<Vec<ParsedDocument>, DocumentParserError> {
        let owned: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::extract(&owned))
            .await
            .map_err(|e| DocumentParserError::ExtractionFailed(format!("task join error: {e}")))?
    }
}
