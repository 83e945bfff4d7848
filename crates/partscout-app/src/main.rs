//! Partscout binary - composition root.
//!
//! 1. Load configuration from TOML and apply CLI/env overrides
//! 2. Load the product catalog (fatal on failure)
//! 3. Build the chat-completions client (the key is read per request)
//! 4. Run one lookup, or the interactive session on stdin/stdout

mod cli;
mod repl;

use clap::Parser;
use partscout_catalog::CatalogStore;
use partscout_chat::{CatalogAssistant, KeywordExtractor, ResponseRenderer, TableHeaders};
use partscout_core::config::PartscoutConfig;
use partscout_core::PartscoutError;
use partscout_llm::ChatCompletionsClient;

use cli::CliArgs;

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let args = CliArgs::parse();

    // Config is read before tracing exists; its outcome is logged below.
    let config_file = args.resolve_config_path();
    let loaded = PartscoutConfig::load(&config_file);
    let mut config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => PartscoutConfig::default(),
    };
    args.apply_overrides(&mut config);

    init_tracing(&config.general.log_level);
    tracing::info!("Starting Partscout v{}", env!("CARGO_PKG_VERSION"));
    match loaded {
        Ok(_) => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Err(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Configuration not loaded, using defaults"
        ),
    }

    // Catalog.
    let catalog = match CatalogStore::load(&config.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(path = %config.catalog.path, error = %e, "Failed to load catalog");
            return Err(PartscoutError::from(e).into());
        }
    };
    if catalog.is_empty() {
        tracing::warn!(path = %config.catalog.path, "Catalog has no products");
    }

    // Completion client.
    let client = match ChatCompletionsClient::from_env(&config.llm) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create completion client");
            return Err(PartscoutError::from(e).into());
        }
    };
    tracing::info!(model = %client.model(), base_url = %config.llm.base_url, "Completion client ready");
    if !client.has_credential() {
        tracing::warn!(
            var = %config.llm.api_key_env,
            "API key not set; lookups will fail until it is"
        );
    }

    let extractor = KeywordExtractor::from_config(client, &config.llm);
    let mut assistant = CatalogAssistant::new(extractor, catalog);
    let renderer = ResponseRenderer::new(
        config.chat.clone(),
        TableHeaders::from(&config.catalog),
    );

    let mut stdout = std::io::stdout();
    match args.one_shot_query() {
        Some(query) => repl::run_once(&mut assistant, &renderer, &query, &mut stdout).await?,
        None => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            repl::run(&mut assistant, &renderer, stdin, &mut stdout).await?;
        }
    }

    Ok(())
}
