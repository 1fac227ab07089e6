//! Preview binary - renders a page to stdout without starting the server
//!
//! Usage:
//!   cargo run --bin preview                          # Home page, default language
//!   cargo run --bin preview -- --page projects       # Another page
//!   cargo run --bin preview -- --lang ja             # Another language
//!   cargo run --bin preview -- --page contact --lang ar > page.html
//!
//! Optional environment variables:
//! - LANGUAGES_FILE (defaults to config/languages.json)
//! - PUBLIC_BASE_URL (defaults to http://localhost:<PORT>)
//!
//! The rendered document goes to stdout; diagnostics go to stderr.

use anyhow::{Context, Result};

use portfolio_server::config::Config;
use portfolio_server::i18n::{resolve_language, Dictionary, LanguageSignals};
use portfolio_server::pages::{render_page, Page, PageContext};

/// Read the value following a `--flag` argument.
fn arg_value(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|index| args.get(index + 1))
        .cloned()
}

fn main() -> Result<()> {
    // Initialize logging (stderr, so stdout stays clean HTML)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_server=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let page_arg = arg_value(&args, "--page");
    let lang_arg = arg_value(&args, "--lang");

    let config = Config::from_env();
    let dictionary = Dictionary::load(&config.languages_file, &config.languages_fallback_file)
        .context("Failed to load translation dictionary")?;

    // An unsupported --lang falls back exactly like an unsupported
    // query parameter would
    let signals = LanguageSignals {
        query_lang: lang_arg.as_deref(),
        ..Default::default()
    };
    let resolution = resolve_language(&signals);

    let base_url = config
        .public_base_url
        .clone()
        .unwrap_or_else(|| format!("http://localhost:{}", config.port));

    let ctx = PageContext {
        dictionary: &dictionary,
        language: resolution.language,
        page: Page::from_query(page_arg.as_deref()),
        base_url: base_url.trim_end_matches('/'),
    };

    println!("{}", render_page(&ctx));
    Ok(())
}
