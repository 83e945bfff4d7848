//! Product catalog for Partscout.
//!
//! Loads the tabular catalog once at startup into a read-only
//! [`CatalogStore`] and answers keyword lookups against it.

pub mod error;
pub mod loader;
pub mod matcher;
pub mod store;

pub use error::CatalogError;
pub use loader::{Cell, ColumnMapping, Table};
pub use matcher::{match_catalog, row_matches};
pub use store::CatalogStore;
