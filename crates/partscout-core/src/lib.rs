pub mod config;
pub mod error;
pub mod types;

pub use config::PartscoutConfig;
pub use error::{PartscoutError, Result};
pub use types::*;
