mod csv_adapter;
mod document_loader;
mod docx_adapter;
mod ooxml;
mod pdf_adapter;
mod pdf_image_extractor;
mod plain_text_adapter;
mod pptx_adapter;
mod spreadsheet_adapter;
mod text_sanitizer;

pub use csv_adapter::CsvAdapter;
pub use document_loader::{DEFAULT_IMAGE_DIR, DocumentLoader};
pub use docx_adapter::DocxAdapter;
pub use pdf_adapter::PdfAdapter;
pub use pdf_image_extractor::extract_pdf_images;
pub use plain_text_adapter::PlainTextAdapter;
pub use pptx_adapter::PptxAdapter;
pub use spreadsheet_adapter::SpreadsheetAdapter;
pub use text_sanitizer::sanitize_extracted_text;
