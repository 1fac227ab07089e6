//! Translation dictionary: the per-language text tree behind every page.
//!
//! The dictionary is parsed once at startup from a JSON file (with one
//! fallback location) and is read-only afterwards. Lookups walk
//! dot-separated key paths; a missing path degrades to a visible sentinel
//! string instead of an error, so one absent translation costs a single
//! UI slot rather than the page.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::i18n::Language;

/// Errors raised while loading the translation dictionary.
///
/// All of these are fatal: without its dictionary the service cannot
/// render anything, so startup aborts.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Translation file not found at {} or {}", primary.display(), fallback.display())]
    NotFound { primary: PathBuf, fallback: PathBuf },

    #[error("Failed to read translation file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Translation file {} is not valid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Translation data must be a JSON object keyed by language code")]
    InvalidShape,
}

/// Immutable mapping from language code to a nested translation tree.
#[derive(Debug, Clone)]
pub struct Dictionary {
    languages: Map<String, Value>,
}

impl Dictionary {
    /// Load the dictionary from `primary`, or from `fallback` if the
    /// primary file does not exist.
    ///
    /// # Arguments
    /// * `primary` - Preferred location of the translation JSON file
    /// * `fallback` - Location tried when the primary file is absent
    ///
    /// # Returns
    /// The parsed dictionary, or a `DictionaryError` when neither file
    /// exists, the file cannot be read, or its contents are not a JSON
    /// object keyed by language code.
    pub fn load(primary: &Path, fallback: &Path) -> Result<Self, DictionaryError> {
        let path = if primary.exists() {
            primary
        } else if fallback.exists() {
            warn!(
                "Translation file {} not found, using fallback {}",
                primary.display(),
                fallback.display()
            );
            fallback
        } else {
            return Err(DictionaryError::NotFound {
                primary: primary.to_path_buf(),
                fallback: fallback.to_path_buf(),
            });
        };

        let raw = fs::read_to_string(path).map_err(|source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&raw).map_err(|source| DictionaryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_value(value)?;
        info!(
            "Loaded translations for {} languages from {}",
            dictionary.language_count(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Build a dictionary from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, DictionaryError> {
        match value {
            Value::Object(languages) => Ok(Self { languages }),
            _ => Err(DictionaryError::InvalidShape),
        }
    }

    /// Number of languages present in the dictionary.
    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    /// Language codes present in the dictionary, in file order.
    pub fn language_codes(&self) -> Vec<&str> {
        self.languages.keys().map(String::as_str).collect()
    }

    /// The translation tree for exactly the given code, without fallback.
    pub fn get(&self, code: &str) -> Option<&Value> {
        self.languages.get(code)
    }

    /// The full translation tree for a language code, used for structured
    /// sections like experience lists and skills.
    ///
    /// Unknown codes fall back to the default language's tree; if even
    /// the default is absent, an empty tree that resolves nothing.
    pub fn section(&self, code: &str) -> &Value {
        static EMPTY: Value = Value::Null;
        self.languages
            .get(code)
            .or_else(|| self.languages.get(Language::default_language().code()))
            .unwrap_or(&EMPTY)
    }

    /// Walk a dot-separated key path inside one language's tree.
    ///
    /// Every path segment must exist as a child keyed by that segment;
    /// `None` when any segment is missing or the walk reaches a
    /// non-object before the path is exhausted.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&Value> {
        let mut node = self.languages.get(language.code())?;
        for segment in key.split('.') {
            node = node.get(segment)?;
        }
        Some(node)
    }

    /// Resolve a dot-separated key path to display text.
    ///
    /// String leaves are returned verbatim. Lists and sub-trees are
    /// rendered in their JSON form; callers that want the structure
    /// itself should use [`Dictionary::lookup`] or
    /// [`Dictionary::section`]. A path that does not fully resolve
    /// yields the sentinel `Missing translation: <key>` and logs a
    /// warning.
    pub fn text(&self, language: Language, key: &str) -> String {
        match self.lookup(language, key) {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => {
                warn!(
                    "Missing translation for '{}' in language '{}'",
                    key,
                    language.code()
                );
                format!("Missing translation: {}", key)
            }
        }
    }

    /// The display name the dictionary declares for a language, or the
    /// uppercased code when the `name` field is absent.
    pub fn name(&self, language: Language) -> String {
        match self.lookup(language, "name") {
            Some(Value::String(name)) => name.clone(),
            _ => language.code().to_uppercase(),
        }
    }

    /// The text direction for a language, `"ltr"` unless the dictionary
    /// declares otherwise.
    pub fn dir(&self, language: Language) -> String {
        match self.lookup(language, "dir") {
            Some(Value::String(dir)) => dir.clone(),
            _ => "ltr".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn test_dictionary() -> Dictionary {
        Dictionary::from_value(json!({
            "fr": {
                "name": "Français",
                "dir": "ltr",
                "home": {
                    "title": "Bienvenue",
                    "about_title": "À propos"
                },
                "skills": ["PHP", "JavaScript"]
            },
            "en": {
                "name": "English",
                "dir": "ltr",
                "home": {
                    "title": "Welcome"
                }
            },
            "ar": {
                "name": "العربية",
                "dir": "rtl",
                "home": {
                    "title": "مرحبا"
                }
            }
        }))
        .unwrap()
    }

    fn write_file(dir: &TempDir, file_name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(file_name);
        fs::write(&path, contents).unwrap();
        path
    }

    // ==================== Loading Tests ====================

    #[test]
    fn test_load_from_primary() {
        let dir = TempDir::new().unwrap();
        let primary = write_file(&dir, "languages.json", r#"{"fr": {"name": "Français"}}"#);
        let fallback = dir.path().join("does-not-exist.json");

        let dictionary = Dictionary::load(&primary, &fallback).unwrap();
        assert_eq!(dictionary.language_count(), 1);
        assert_eq!(dictionary.language_codes(), vec!["fr"]);
    }

    #[test]
    fn test_load_uses_fallback_when_primary_absent() {
        let dir = TempDir::new().unwrap();
        let primary = dir.path().join("does-not-exist.json");
        let fallback = write_file(&dir, "default.json", r#"{"fr": {}, "en": {}}"#);

        let dictionary = Dictionary::load(&primary, &fallback).unwrap();
        assert_eq!(dictionary.language_count(), 2);
    }

    #[test]
    fn test_load_fails_when_both_absent() {
        let dir = TempDir::new().unwrap();
        let primary = dir.path().join("a.json");
        let fallback = dir.path().join("b.json");

        let error = Dictionary::load(&primary, &fallback).unwrap_err();
        assert!(matches!(error, DictionaryError::NotFound { .. }));
    }

    #[test]
    fn test_load_fails_on_invalid_json() {
        let dir = TempDir::new().unwrap();
        let primary = write_file(&dir, "languages.json", "{not json");
        let fallback = dir.path().join("b.json");

        let error = Dictionary::load(&primary, &fallback).unwrap_err();
        assert!(matches!(error, DictionaryError::Parse { .. }));
    }

    #[test]
    fn test_load_fails_on_non_object_root() {
        let dir = TempDir::new().unwrap();
        let primary = write_file(&dir, "languages.json", r#"["fr", "en"]"#);
        let fallback = dir.path().join("b.json");

        let error = Dictionary::load(&primary, &fallback).unwrap_err();
        assert!(matches!(error, DictionaryError::InvalidShape));
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_resolves_nested_path() {
        let dictionary = test_dictionary();

        let value = dictionary.lookup(Language::FRENCH, "home.title").unwrap();
        assert_eq!(value, &json!("Bienvenue"));
    }

    #[test]
    fn test_lookup_returns_structured_values() {
        let dictionary = test_dictionary();

        let value = dictionary.lookup(Language::FRENCH, "skills").unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_lookup_missing_segment_returns_none() {
        let dictionary = test_dictionary();

        assert!(dictionary.lookup(Language::ENGLISH, "home.missing").is_none());
        assert!(dictionary.lookup(Language::ENGLISH, "missing.title").is_none());
    }

    #[test]
    fn test_lookup_through_non_object_returns_none() {
        let dictionary = test_dictionary();

        // "home.title" is a string leaf, so the path cannot go deeper
        assert!(dictionary
            .lookup(Language::FRENCH, "home.title.deeper")
            .is_none());
    }

    #[test]
    fn test_lookup_absent_language_returns_none() {
        let dictionary = test_dictionary();

        assert!(dictionary.lookup(Language::RUSSIAN, "home.title").is_none());
    }

    // ==================== Text Resolution Tests ====================

    #[test]
    fn test_text_returns_string_verbatim() {
        let dictionary = test_dictionary();

        assert_eq!(dictionary.text(Language::ENGLISH, "home.title"), "Welcome");
    }

    #[test]
    fn test_text_is_idempotent() {
        let dictionary = test_dictionary();

        let first = dictionary.text(Language::FRENCH, "home.about_title");
        let second = dictionary.text(Language::FRENCH, "home.about_title");
        assert_eq!(first, second);
    }

    #[test]
    fn test_text_missing_key_returns_sentinel() {
        let dictionary = test_dictionary();

        assert_eq!(
            dictionary.text(Language::ENGLISH, "does.not.exist"),
            "Missing translation: does.not.exist"
        );
    }

    #[test]
    fn test_text_absent_language_returns_sentinel() {
        let dictionary = test_dictionary();

        assert_eq!(
            dictionary.text(Language::RUSSIAN, "home.title"),
            "Missing translation: home.title"
        );
    }

    #[test]
    fn test_text_serializes_structured_leaf() {
        let dictionary = test_dictionary();

        assert_eq!(
            dictionary.text(Language::FRENCH, "skills"),
            r#"["PHP","JavaScript"]"#
        );
    }

    // ==================== Section Tests ====================

    #[test]
    fn test_section_returns_language_tree() {
        let dictionary = test_dictionary();

        let section = dictionary.section("en");
        assert_eq!(section.get("name"), Some(&json!("English")));
    }

    #[test]
    fn test_section_unknown_code_falls_back_to_default() {
        let dictionary = test_dictionary();

        let section = dictionary.section("xx");
        assert_eq!(section.get("name"), Some(&json!("Français")));
    }

    #[test]
    fn test_section_empty_when_default_absent() {
        let dictionary = Dictionary::from_value(json!({
            "en": {"name": "English"}
        }))
        .unwrap();

        let section = dictionary.section("xx");
        assert!(section.is_null());
        assert!(section.get("name").is_none());
    }

    // ==================== Attribute Helper Tests ====================

    #[test]
    fn test_name_and_dir() {
        let dictionary = test_dictionary();

        assert_eq!(dictionary.name(Language::ARABIC), "العربية");
        assert_eq!(dictionary.dir(Language::ARABIC), "rtl");
        assert_eq!(dictionary.dir(Language::FRENCH), "ltr");
    }

    #[test]
    fn test_name_and_dir_fall_back_when_absent() {
        let dictionary = Dictionary::from_value(json!({
            "ru": {}
        }))
        .unwrap();

        assert_eq!(dictionary.name(Language::RUSSIAN), "RU");
        assert_eq!(dictionary.dir(Language::RUSSIAN), "ltr");
    }
}
