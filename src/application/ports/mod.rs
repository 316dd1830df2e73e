mod chat_model;
mod document_parser;
mod embedding_model;

pub use chat_model::{ChatModel, ChatModelError};
pub use document_parser::{DocumentParser, DocumentParserError};
pub use embedding_model::{EmbeddingModel, EmbeddingModelError};
