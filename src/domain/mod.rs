mod extracted_image;
mod parsed_document;
mod source_format;

pub use extracted_image::{BoundingBox, ExtractedImage};
pub use parsed_document::{DocumentMetadata, ParsedDocument};
pub use source_format::SourceFormat;
