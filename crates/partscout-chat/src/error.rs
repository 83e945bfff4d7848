//! Error types for the conversational lookup.

use partscout_llm::CompletionError;

/// Errors returned to the caller of the assistant.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("query cannot be empty")]
    EmptyQuery,
}

/// Keyword extraction failed. Every remote failure collapses into this one
/// type; the message is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("keyword extraction failed: {message}")]
pub struct ExtractionError {
    pub message: String,
}

impl ExtractionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<CompletionError> for ExtractionError {
    fn from(err: CompletionError) -> Self {
        ExtractionError::new(err.to_string())
    }
}
