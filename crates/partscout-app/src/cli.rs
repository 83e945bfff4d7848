//! CLI argument definitions for the Partscout binary.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use partscout_core::PartscoutConfig;
use std::path::PathBuf;

/// Partscout: ask for a product in plain words, get matching catalog rows.
#[derive(Parser, Debug)]
#[command(name = "partscout", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Catalog file (.xlsx, .xls, .ods or .csv).
    #[arg(long = "catalog")]
    pub catalog: Option<PathBuf>,

    /// Worksheet to read from a workbook catalog.
    #[arg(long = "sheet")]
    pub sheet: Option<String>,

    /// Model identifier for keyword extraction.
    #[arg(short = 'm', long = "model")]
    pub model: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Run a single lookup and exit instead of starting the interactive
    /// session.
    #[arg(trailing_var_arg = true)]
    pub query: Vec<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > PARTSCOUT_CONFIG env var > ~/.partscout/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("PARTSCOUT_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the catalog path.
    ///
    /// Priority: --catalog flag > PARTSCOUT_CATALOG env var.
    /// Returns `None` if neither is set (use the config value).
    pub fn resolve_catalog_path(&self) -> Option<String> {
        if let Some(ref p) = self.catalog {
            return Some(p.to_string_lossy().to_string());
        }
        std::env::var("PARTSCOUT_CATALOG").ok()
    }

    /// The one-shot query, if any words were given.
    pub fn one_shot_query(&self) -> Option<String> {
        let query = self.query.join(" ");
        if query.trim().is_empty() {
            None
        } else {
            Some(query)
        }
    }

    /// Apply flag and environment overrides on top of the file config.
    pub fn apply_overrides(&self, config: &mut PartscoutConfig) {
        if let Some(path) = self.resolve_catalog_path() {
            config.catalog.path = path;
        }
        if let Some(ref sheet) = self.sheet {
            config.catalog.sheet = Some(sheet.clone());
        }
        if let Some(ref model) = self.model {
            config.llm.model = model.clone();
        }
        if let Some(ref level) = self.log_level {
            config.general.log_level = level.clone();
        }
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".partscout").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".partscout").join("config.toml");
    }
    PathBuf::from("config.toml")
}
