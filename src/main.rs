use anyhow::{Context, Result};
use tracing::{info, warn};

use portfolio_server::config::Config;
use portfolio_server::i18n::{Dictionary, DictionaryValidator};
use portfolio_server::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_server=info".parse()?),
        )
        .init();

    info!("Starting portfolio server");

    // Load configuration from environment
    let config = Config::from_env();

    // Load translations, falling back to the bundled defaults
    let dictionary = Dictionary::load(&config.languages_file, &config.languages_fallback_file)
        .context("Failed to load translation dictionary")?;

    // Surface dictionary problems at startup rather than as broken pages
    let report = DictionaryValidator::validate(&dictionary);
    for warning in &report.warnings {
        warn!("Translation warning: {}", warning);
    }
    for error in &report.errors {
        warn!("Translation error: {}", error);
    }
    if report.is_clean() {
        info!(
            "Translation dictionary is complete ({} languages)",
            dictionary.language_count()
        );
    }

    server::run(config, dictionary).await
}
