use partscout_core::error::PartscoutError;
use thiserror::Error;

/// Failures of a single completion request.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing credential: environment variable {0} is not set")]
    MissingCredential(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for CompletionError {
    fn from(e: reqwest::Error) -> Self {
        CompletionError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for CompletionError {
    fn from(e: serde_json::Error) -> Self {
        CompletionError::MalformedResponse(e.to_string())
    }
}

impl From<CompletionError> for PartscoutError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::MissingCredential(var) => PartscoutError::MissingCredential(var),
            CompletionError::Config(msg) => PartscoutError::Config(msg),
            other => PartscoutError::Completion(other.to_string()),
        }
    }
}
