//! OpenAI client configuration, read from the environment.

use crate::error::LlmError;

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Read configuration from `OPENAI_API_KEY` (required), `CHEFBYTE_MODEL`
    /// and `CHEFBYTE_OPENAI_URL` (optional).
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| LlmError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var("CHEFBYTE_MODEL") {
            config.model = model;
        }
        if let Ok(url) = std::env::var("CHEFBYTE_OPENAI_URL") {
            tracing::warn!(%url, "using non-default OpenAI endpoint");
            config.api_url = url;
        }
        Ok(config)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}
