mod api_keys;
mod settings;

pub use api_keys::{ApiKeyStore, CredentialError, GOOGLE_API_KEY, OPENAI_API_KEY};
pub use settings::{EmbeddingModelSettings, LlmSettings, ModelSettings, SettingsError};
