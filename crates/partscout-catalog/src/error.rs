//! Error types for catalog loading.

use std::path::PathBuf;

use partscout_core::error::PartscoutError;

/// Errors raised while reading the catalog source. All of them are fatal at
/// startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),
    #[error("worksheet not found: {0}")]
    SheetNotFound(String),
    #[error("catalog has no header row")]
    MissingHeader,
    #[error("required column missing: {0}")]
    MissingColumn(String),
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<CatalogError> for PartscoutError {
    fn from(err: CatalogError) -> Self {
        PartscoutError::Catalog(err.to_string())
    }
}
