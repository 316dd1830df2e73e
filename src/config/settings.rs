use std::path::Path;

use serde::Deserialize;

/// Model configuration, loaded once from a TOML file and read-only after.
///
/// Provider fields are free-form strings on purpose: an unknown provider has
/// to surface from the model factory as a configuration error, not as a
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    pub embedding_model: EmbeddingModelSettings,
    pub llm: LlmSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingModelSettings {
    #[serde(default = "default_embedding_provider")]
    pub provider: String,
    pub model_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: String,
    pub model_name: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ModelSettings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path)?;
        let settings = toml::from_str(&raw)?;
        Ok(settings)
    }
}

fn default_embedding_provider() -> String {
    "openai".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_output_tokens() -> u32 {
    2048
}
