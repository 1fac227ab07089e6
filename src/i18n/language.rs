//! Language type: validated language representation.
//!
//! This module provides the `Language` type, a cheap copyable value that can
//! only be constructed from codes present in the registry. Holding a
//! `Language` is proof the code is in the allow-list.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated language.
///
/// Construction goes through the registry, so every `Language` value carries
/// a supported code. Request signals that fail validation never become a
/// `Language` in the first place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "fr", "ja")
    code: &'static str,
}

impl Language {
    pub const FRENCH: Language = Language { code: "fr" };
    pub const ENGLISH: Language = Language { code: "en" };
    pub const JAPANESE: Language = Language { code: "ja" };
    pub const RUSSIAN: Language = Language { code: "ru" };
    pub const PORTUGUESE: Language = Language { code: "pt" };
    pub const CHINESE: Language = Language { code: "zh" };
    pub const GREEK: Language = Language { code: "el" };
    pub const ARABIC: Language = Language { code: "ar" };

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "fr", "ja")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the allow-list
    /// * `Err` otherwise
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Create a Language from a code, returning `None` for unsupported codes.
    ///
    /// This is the form the resolver uses: candidates outside the allow-list
    /// are skipped silently, never reported.
    pub fn try_from_code(code: &str) -> Option<Language> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| Language { code: config.code })
    }

    /// Get the default language.
    ///
    /// This is the language served when no request signal yields a supported
    /// language.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not found in the registry. This cannot happen
    /// for values constructed through `from_code`/`try_from_code` or the
    /// constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language (e.g., "French", "Japanese").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Check if this is the default language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
