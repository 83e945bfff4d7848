//! In-memory product catalog.

use std::path::Path;

use partscout_core::config::CatalogConfig;
use partscout_core::ProductRow;
use tracing::info;

use crate::error::CatalogError;
use crate::loader::{read_catalog, ColumnMapping};

/// Read-only, ordered product table.
///
/// Built once at startup and never mutated afterwards: the store exposes no
/// `&mut self` methods, so sharing `&CatalogStore` across turns is safe.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    rows: Vec<ProductRow>,
}

impl CatalogStore {
    /// Wrap already-loaded rows, keeping their order.
    pub fn from_rows(rows: Vec<ProductRow>) -> Self {
        Self { rows }
    }

    /// Load the catalog described by `config`.
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Self::load_from(
            Path::new(&config.path),
            config.sheet.as_deref(),
            &ColumnMapping::from(config),
        )
    }

    /// Load a catalog file with an explicit column mapping.
    pub fn load_from(
        path: &Path,
        sheet: Option<&str>,
        mapping: &ColumnMapping,
    ) -> Result<Self, CatalogError> {
        let rows = read_catalog(path, sheet, mapping)?;
        info!(path = %path.display(), products = rows.len(), "Catalog loaded");
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[ProductRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
