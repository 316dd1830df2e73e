use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{ChatModel, EmbeddingModel};
use crate::config::{
    ApiKeyStore, CredentialError, GOOGLE_API_KEY, ModelSettings, OPENAI_API_KEY, SettingsError,
};

use super::{GoogleChatClient, OpenAiChatClient, OpenAiEmbedder};

/// Builds embedding-model and chat-model handles from resolved credentials
/// and the model configuration.
pub struct ModelFactory {
    api_keys: ApiKeyStore,
    settings: ModelSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum ModelFactoryError {
    #[error("unsupported llm provider: {0}")]
    UnsupportedProvider(String),
    #[error("unsupported embedding provider: {0}")]
    UnsupportedEmbeddingProvider(String),
    #[error(transparent)]
    Credential(#[from] CredentialError),
    #[error("failed to load model configuration")]
    Settings(#[from] SettingsError),
}

impl ModelFactory {
    pub fn new(api_keys: ApiKeyStore, settings: ModelSettings) -> Self {
        Self { api_keys, settings }
    }

    /// Resolve credentials first, then read the configuration file. A missing
    /// required key fails before any model construction is attempted.
    pub fn from_env(config_path: &Path) -> Result<Self, ModelFactoryError> {
        let api_keys = ApiKeyStore::from_env()?;
        let settings = ModelSettings::load(config_path)?;
        Ok(Self::new(api_keys, settings))
    }

    pub fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    pub fn load_embeddings(&self) -> Result<Arc<dyn EmbeddingModel>, ModelFactoryError> {
        let model_settings = &self.settings.embedding_model;

        match model_settings.provider.as_str() {
            "openai" => {
                let api_key = self.api_keys.get(OPENAI_API_KEY)?;
                tracing::info!(model = %model_settings.model_name, "Loading embedding model");
                Ok(Arc::new(OpenAiEmbedder::new(
                    api_key.to_string(),
                    model_settings.model_name.clone(),
                )))
            }
            other => {
                tracing::error!(provider = %other, "Unsupported embedding provider");
                Err(ModelFactoryError::UnsupportedEmbeddingProvider(
                    other.to_string(),
                ))
            }
        }
    }

    pub fn load_llm(&self) -> Result<Arc<dyn ChatModel>, ModelFactoryError> {
        let llm = &self.settings.llm;
        tracing::info!(provider = %llm.provider, model = %llm.model_name, "Loading llm");

        match llm.provider.as_str() {
            "google" => {
                let api_key = self.api_keys.get(GOOGLE_API_KEY)?;
                Ok(Arc::new(GoogleChatClient::new(
                    api_key.to_string(),
                    llm.model_name.clone(),
                    llm.temperature,
                    llm.max_output_tokens,
                )))
            }
            "openai" => {
                let api_key = self.api_keys.get(OPENAI_API_KEY)?;
                Ok(Arc::new(OpenAiChatClient::new(
                    api_key.to_string(),
                    llm.model_name.clone(),
                    llm.temperature,
                    llm.max_output_tokens,
                )))
            }
            other => {
                tracing::error!(provider = %other, "Unsupported llm provider");
                Err(ModelFactoryError::UnsupportedProvider(other.to_string()))
            }
        }
    }
}
