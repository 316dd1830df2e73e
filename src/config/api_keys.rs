use std::collections::HashMap;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";

/// Keys that must be present for the store to construct at all.
const REQUIRED_KEYS: &[&str] = &[OPENAI_API_KEY];
/// Keys picked up when present.
const OPTIONAL_KEYS: &[&str] = &[GOOGLE_API_KEY];

/// API credentials resolved once at startup. Construction fails unless every
/// required key is present.
#[derive(Debug, Clone)]
pub struct ApiKeyStore {
    keys: HashMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("missing required api keys: {}", .0.join(", "))]
    Missing(Vec<String>),
    #[error("api key {0} is not loaded")]
    Unresolved(String),
}

impl ApiKeyStore {
    /// Resolve credentials from the process environment, loading a `.env`
    /// file first when one exists.
    pub fn from_env() -> Result<Self, CredentialError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve credentials through an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CredentialError> {
        let mut keys = HashMap::new();

        for name in REQUIRED_KEYS.iter().chain(OPTIONAL_KEYS) {
            if let Some(value) = lookup(name).filter(|v| !v.is_empty()) {
                keys.insert((*name).to_string(), value);
            }
        }

        let missing: Vec<String> = REQUIRED_KEYS
            .iter()
            .filter(|name| !keys.contains_key(**name))
            .map(|name| (*name).to_string())
            .collect();
        if !missing.is_empty() {
            tracing::error!(missing_keys = ?missing, "Missing required api key");
            return Err(CredentialError::Missing(missing));
        }

        let masked: Vec<String> = keys
            .iter()
            .map(|(name, value)| format!("{name}={}-----", value.chars().take(5).collect::<String>()))
            .collect();
        tracing::info!(keys = ?masked, "Api keys loaded");

        Ok(Self { keys })
    }

    pub fn get(&self, name: &str) -> Result<&str, CredentialError> {
        self.keys
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| CredentialError::Unresolved(name.to_string()))
    }
}
