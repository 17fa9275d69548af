//! Action-source error model.

use thiserror::Error;

/// Failure at the language-model boundary.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// The model replied with something other than the strict JSON action
    /// list we asked for.
    #[error("malformed model response: {0}")]
    MalformedResponse(String),
}
