use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::ZipArchive;

use crate::application::ports::DocumentParserError;

pub(super) fn open_archive(path: &Path) -> Result<ZipArchive<File>, DocumentParserError> {
    let file = File::open(path)?;
    ZipArchive::new(file)
        .map_err(|e| DocumentParserError::ExtractionFailed(format!("failed to open archive: {e}")))
}

pub(super) fn read_entry(
    archive: &mut ZipArchive<File>,
    name: &str,
) -> Result<String, DocumentParserError> {
    let mut entry = archive.by_name(name).map_err(|e| {
        DocumentParserError::ExtractionFailed(format!("missing archive entry {name}: {e}"))
    })?;
    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Extract readable text from OOXML markup. Tags are dropped, the given
/// paragraph-closing tags become newlines, and the predefined XML entities
/// are unescaped.
pub(super) fn xml_text(xml: &str, paragraph_tags: &[&str]) -> String {
    let mut out = String::with_capacity(xml.len() / 4);
    let mut rest = xml;

    while let Some(open) = rest.find('<') {
        push_unescaped(&mut out, &rest[..open]);
        let Some(close) = rest[open..].find('>') else {
            return out;
        };
        let tag = &rest[open + 1..open + close];
        let name = tag
            .trim_start_matches('/')
            .split([' ', '/', '\t', '\r', '\n'])
            .next()
            .unwrap_or_default();
        if tag.starts_with('/') && paragraph_tags.contains(&name) {
            out.push('\n');
        }
        rest = &rest[open + close + 1..];
    }
    push_unescaped(&mut out, rest);

    out
}

fn push_unescaped(out: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    // &amp; last so produced ampersands are not re-expanded
    let unescaped = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&");
    out.push_str(&unescaped);
}
