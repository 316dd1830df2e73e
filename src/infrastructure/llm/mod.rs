mod google_chat_client;
mod model_factory;
mod openai_chat_client;
mod openai_embedder;

pub use google_chat_client::GoogleChatClient;
pub use model_factory::{ModelFactory, ModelFactoryError};
pub use openai_chat_client::OpenAiChatClient;
pub use openai_embedder::OpenAiEmbedder;
