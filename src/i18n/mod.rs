//! Internationalization (i18n) module for multi-language support.
//!
//! This module owns everything language-related: the supported language
//! set, per-request language resolution, the translation dictionary, and
//! dictionary completeness validation.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type that replaces hardcoded strings
//! - `resolver`: Pure precedence chain turning request signals into one language
//! - `dictionary`: JSON-backed translation tree with dot-path lookup
//! - `validator`: Dictionary completeness validation
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio_server::i18n::{resolve_language, LanguageSignals};
//!
//! let signals = LanguageSignals {
//!     accept_language: Some("ja-JP,fr;q=0.8"),
//!     ..Default::default()
//! };
//!
//! // Resolves to Japanese; the caller persists it to the session
//! let resolution = resolve_language(&signals);
//! ```

mod dictionary;
mod language;
mod registry;
mod resolver;
mod validator;

pub use dictionary::{Dictionary, DictionaryError};
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{parse_accept_language, resolve_language, LanguageSignals, Resolution};
pub use validator::{DictionaryValidator, ValidationReport};
