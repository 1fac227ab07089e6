//! Translation check binary - validates the dictionary without starting the server
//!
//! Usage:
//!   cargo run --bin check-translations               # Validate config/languages.json
//!   LANGUAGES_FILE=other.json cargo run --bin check-translations
//!
//! Optional environment variables:
//! - LANGUAGES_FILE (defaults to config/languages.json)
//! - LANGUAGES_FALLBACK_FILE (defaults to config/languages.default.json)
//!
//! Exits non-zero when the dictionary has errors, so it can gate a deploy.

use anyhow::{Context, Result};

use portfolio_server::config::Config;
use portfolio_server::i18n::{Dictionary, DictionaryValidator};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_server=info".parse().unwrap()),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    let dictionary = Dictionary::load(&config.languages_file, &config.languages_fallback_file)
        .context("Failed to load translation dictionary")?;

    let report = DictionaryValidator::validate(&dictionary);

    println!("\n========== TRANSLATION CHECK ==========");
    println!("Languages loaded: {}", dictionary.language_count());
    println!("Errors:           {}", report.errors.len());
    println!("Warnings:         {}", report.warnings.len());
    println!("=======================================\n");

    if !report.errors.is_empty() {
        println!("Errors:");
        for error in &report.errors {
            println!("  - {}", error);
        }
        println!();
    }

    if !report.warnings.is_empty() {
        println!("Warnings:");
        for warning in &report.warnings {
            println!("  - {}", warning);
        }
        println!();
    }

    if report.is_clean() {
        println!("Dictionary is complete.");
    }

    if report.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}
