use thiserror::Error;

/// Top-level error type for Partscout.
///
/// Subsystem crates define their own error types and implement
/// `From<SubsystemError> for PartscoutError` so that `?` works across
/// crate boundaries in the binary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PartscoutError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Missing credential: environment variable {0} is not set")]
    MissingCredential(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for PartscoutError {
    fn from(err: toml::de::Error) -> Self {
        PartscoutError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for PartscoutError {
    fn from(err: toml::ser::Error) -> Self {
        PartscoutError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for PartscoutError {
    fn from(err: serde_json::Error) -> Self {
        PartscoutError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Partscout operations.
pub type Result<T> = std::result::Result<T, PartscoutError>;
