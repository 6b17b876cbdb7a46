use echogen_core::error::CoreError;
use reqwest::StatusCode;

/// Failure modes of the local Ollama runtime.
#[derive(Debug, thiserror::Error)]
pub enum OllamaError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn't serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Ollama returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Ollama format error: {0}")]
    Format(String),
}

impl From<OllamaError> for CoreError {
    fn from(value: OllamaError) -> Self {
        CoreError::Backend(Box::new(value))
    }
}
