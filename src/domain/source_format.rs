/// Document format, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Pdf,
    Docx,
    PlainText,
    Pptx,
    Csv,
    Spreadsheet,
}

impl SourceFormat {
    /// Detect the format from a file extension (without the dot),
    /// case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" | "md" => Some(Self::PlainText),
            "pptx" => Some(Self::Pptx),
            "csv" => Some(Self::Csv),
            "xlsx" | "xls" => Some(Self::Spreadsheet),
            _ => None,
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Pdf => &["pdf"],
            Self::Docx => &["docx"],
            Self::PlainText => &["txt", "md"],
            Self::Pptx => &["pptx"],
            Self::Csv => &["csv"],
            Self::Spreadsheet => &["xlsx", "xls"],
        }
    }
}
