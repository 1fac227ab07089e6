//! Language registry: single source of truth for all supported languages.
//!
//! This module provides a centralized registry of every language the site can
//! be served in. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "fr", "en", "ja")
    pub code: &'static str,

    /// English name of the language (e.g., "French", "Japanese")
    pub name: &'static str,

    /// Whether this is the default language (only one should be true)
    pub is_default: bool,
}

/// Global language registry singleton.
///
/// The registry holds the fixed allow-list of languages and provides methods
/// to query it. It is initialized once on first access and remains immutable
/// thereafter. Every language candidate coming from a request is validated
/// against this registry before use.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: supported_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "fr", "ja")
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language is supported
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all supported languages, in display order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// The default language is the one served when no request signal yields
    /// a supported language. There should be exactly one.
    ///
    /// # Panics
    /// Panics if no default language is found or if multiple defaults are
    /// defined (this indicates a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is in the allow-list.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// The fixed set of languages the site is translated into.
///
/// Order matters: it is the order the language selector lists entries in.
fn supported_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "fr",
            name: "French",
            is_default: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            is_default: false,
        },
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            is_default: false,
        },
        LanguageConfig {
            code: "ru",
            name: "Russian",
            is_default: false,
        },
        LanguageConfig {
            code: "pt",
            name: "Portuguese",
            is_default: false,
        },
        LanguageConfig {
            code: "zh",
            name: "Chinese",
            is_default: false,
        },
        LanguageConfig {
            code: "el",
            name: "Greek",
            is_default: false,
        },
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            is_default: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_french() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("fr");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "fr");
        assert_eq!(config.name, "French");
        assert!(config.is_default);
    }

    #[test]
    fn test_get_by_code_arabic() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("ar");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "ar");
        assert_eq!(config.name, "Arabic");
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("es").is_none());
        assert!(registry.get_by_code("de").is_none());
        assert!(registry.get_by_code("").is_none());
    }

    #[test]
    fn test_list_all_contains_every_language() {
        let registry = LanguageRegistry::get();
        let all = registry.list_all();

        assert_eq!(all.len(), 8);
        for code in ["fr", "en", "ja", "ru", "pt", "zh", "el", "ar"] {
            assert!(all.iter().any(|lang| lang.code == code));
        }
    }

    #[test]
    fn test_list_all_starts_with_default() {
        let registry = LanguageRegistry::get();
        let all = registry.list_all();

        assert_eq!(all[0].code, "fr");
    }

    #[test]
    fn test_default_language_is_french() {
        let registry = LanguageRegistry::get();
        let default = registry.default_language();

        assert_eq!(default.code, "fr");
        assert!(default.is_default);
    }

    #[test]
    fn test_is_supported() {
        let registry = LanguageRegistry::get();

        assert!(registry.is_supported("fr"));
        assert!(registry.is_supported("zh"));
        assert!(!registry.is_supported("es"));
        assert!(!registry.is_supported("FR"));
        assert!(!registry.is_supported("fra"));
    }

    #[test]
    fn test_language_config_clone() {
        let config = LanguageConfig {
            code: "fr",
            name: "French",
            is_default: true,
        };

        let cloned = config.clone();
        assert_eq!(config.code, cloned.code);
        assert_eq!(config.name, cloned.name);
        assert_eq!(config.is_default, cloned.is_default);
    }
}
