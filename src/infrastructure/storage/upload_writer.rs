use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// Extensions accepted for upload; anything else is skipped with a warning.
const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "txt"];

static UNSAFE_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_-]").unwrap());

/// One uploaded file: its client-supplied name and raw contents.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub contents: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, contents: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            contents,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadWriterError {
    #[error("failed to save uploaded files: {0}")]
    Io(#[from] std::io::Error),
}

/// Persists uploaded blobs under sanitized, collision-resistant names.
#[derive(Default)]
pub struct UploadWriter;

impl UploadWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write every allow-listed upload into `target_dir`, returning the paths
    /// actually written. Any I/O failure aborts the whole batch.
    pub async fn save(
        &self,
        uploads: &[UploadedFile],
        target_dir: &Path,
    ) -> Result<Vec<PathBuf>, UploadWriterError> {
        tokio::fs::create_dir_all(target_dir).await?;

        let mut saved = Vec::new();

        for upload in uploads {
            let ext = Path::new(&upload.filename)
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_lowercase)
                .unwrap_or_default();

            if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
                tracing::warn!(filename = %upload.filename, "Unsupported file skipped");
                continue;
            }

            let out_path = target_dir.join(unique_filename(&upload.filename, &ext));
            tokio::fs::write(&out_path, &upload.contents).await?;

            tracing::info!(
                filename = %upload.filename,
                path = %out_path.display(),
                "Saved uploaded file"
            );
            saved.push(out_path);
        }

        Ok(saved)
    }
}

/// Lowercased stem with unsafe characters replaced, plus an 8-hex random
/// suffix so repeated uploads of the same name never collide.
fn unique_filename(filename: &str, ext: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("upload");
    let safe_stem = UNSAFE_CHARS.replace_all(stem, "_").to_lowercase();
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{safe_stem}_{}.{ext}", &suffix[..8])
}
