mod upload_writer;

pub use upload_writer::{UploadWriter, UploadWriterError, UploadedFile};
