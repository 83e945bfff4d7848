use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{PartscoutError, Result};

/// Placeholder replaced by the user's query in [`LlmConfig::prompt_template`].
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Default keyword-extraction prompt. The catalog is written in Spanish, so
/// the instructions are too.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "\
Eres un asistente experto en productos neumáticos industriales.
El usuario escribirá una pregunta, una medida o un nombre parcial de producto.
Devuelve las palabras clave o fragmentos de código más útiles para buscar
ese producto dentro de un catálogo.

Pregunta del usuario: {query}

Responde SOLO con una lista corta de palabras clave o códigos separados por comas.
Ejemplo de respuesta: manguera, 12mm, TU1208
";

/// Top-level configuration for Partscout.
///
/// Loaded from `~/.partscout/config.toml` by default. Every section falls
/// back to its defaults when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartscoutConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl PartscoutConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PartscoutConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| PartscoutError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Product catalog source and column mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the catalog file (.xlsx, .xls, .ods or .csv).
    pub path: String,
    /// Worksheet name for workbook sources. `None` reads the first sheet.
    pub sheet: Option<String>,
    /// Header of the product code column.
    pub code_column: String,
    /// Header of the description column.
    pub description_column: String,
    /// Header of the quantity column.
    pub quantity_column: String,
    /// Header of the delivery lead time column.
    pub lead_time_column: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: "productos.xlsx".to_string(),
            sheet: None,
            code_column: "CODIGO SMC".to_string(),
            description_column: "DESCRIPCION".to_string(),
            quantity_column: "CANTIDAD(und)".to_string(),
            lead_time_column: "T.ENTREGA".to_string(),
        }
    }
}

/// Remote chat-completion endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible API; `/chat/completions` is appended.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Sampling temperature. Kept low for near-deterministic keywords.
    pub temperature: f32,
    /// Transport timeout for a single request, in seconds.
    pub timeout_secs: u64,
    /// Name of the environment variable holding the bearer token.
    pub api_key_env: String,
    /// Instruction prompt; must contain `{query}`.
    pub prompt_template: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "mixtral-8x7b-32768".to_string(),
            temperature: 0.2,
            timeout_secs: 30,
            api_key_env: "GROQ_API_KEY".to_string(),
            prompt_template: DEFAULT_PROMPT_TEMPLATE.to_string(),
        }
    }
}

impl LlmConfig {
    /// Check that the settings can produce a usable request.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(PartscoutError::Config("llm.base_url is empty".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(PartscoutError::Config("llm.model is empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(PartscoutError::Config(
                "llm.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if !self.prompt_template.contains(QUERY_PLACEHOLDER) {
            return Err(PartscoutError::Config(format!(
                "llm.prompt_template must contain {}",
                QUERY_PLACEHOLDER
            )));
        }
        Ok(())
    }
}

/// Transcript wording.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Heading printed when the session starts.
    pub title: String,
    /// Hint printed under the heading.
    pub greeting: String,
    /// Reply shown when no catalog row matches.
    pub no_match_message: String,
    /// Prefix for replies when keyword extraction fails.
    pub extraction_error_message: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            title: "Catálogo inteligente".to_string(),
            greeting: "Pregúntame por cualquier producto: código, medida o descripción parcial."
                .to_string(),
            no_match_message:
                "No encontré coincidencias exactas. Intenta con otra descripción o código."
                    .to_string(),
            extraction_error_message: "Error al conectarse con el servicio de búsqueda"
                .to_string(),
        }
    }
}
