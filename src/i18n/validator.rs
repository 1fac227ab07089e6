//! Dictionary completeness validation.
//!
//! Checks the loaded translation dictionary against the supported
//! language registry: every supported language must carry a JSON object
//! with `name` and `dir` attributes, and should cover the same key paths
//! as the default language. Structural problems are errors; coverage
//! gaps are warnings, since a missing key only degrades one UI string.

use serde_json::Value;

use crate::i18n::{Dictionary, Language, LanguageRegistry};

/// Validation report containing errors and warnings about a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Structural problems that visibly break rendering
    pub errors: Vec<String>,

    /// Coverage gaps that degrade individual strings
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for dictionary completeness.
pub struct DictionaryValidator;

impl DictionaryValidator {
    /// Validate a loaded dictionary against the supported language set.
    ///
    /// This function checks that:
    /// - every supported language has a JSON object tree
    /// - every language declares string `name` and `dir` attributes
    /// - every language covers the default language's key paths
    /// - the file carries no languages outside the supported set
    ///
    /// # Arguments
    /// * `dictionary` - The loaded dictionary to check
    ///
    /// # Returns
    /// A `ValidationReport` with one error per structural problem and one
    /// warning per coverage gap.
    pub fn validate(dictionary: &Dictionary) -> ValidationReport {
        let mut report = ValidationReport::new();
        let registry = LanguageRegistry::get();

        for config in registry.list_all() {
            match dictionary.get(config.code) {
                Some(tree @ Value::Object(_)) => {
                    Self::check_attributes(tree, config.code, &mut report);
                }
                Some(_) => report.errors.push(format!(
                    "Language '{}' must map to a JSON object",
                    config.code
                )),
                None => report.errors.push(format!(
                    "Language '{}' is missing from the dictionary",
                    config.code
                )),
            }
        }

        // Entries outside the supported set can never be served
        for code in dictionary.language_codes() {
            if !registry.is_supported(code) {
                report.warnings.push(format!(
                    "Language '{}' is not in the supported set and will never be served",
                    code
                ));
            }
        }

        Self::check_key_parity(dictionary, &mut report);

        report
    }

    /// Check the `name` and `dir` attributes of one language tree.
    fn check_attributes(tree: &Value, code: &str, report: &mut ValidationReport) {
        for attribute in ["name", "dir"] {
            match tree.get(attribute) {
                Some(Value::String(_)) => {}
                Some(_) => report.errors.push(format!(
                    "Language '{}' has a non-string '{}' attribute",
                    code, attribute
                )),
                None => report.errors.push(format!(
                    "Language '{}' is missing its '{}' attribute",
                    code, attribute
                )),
            }
        }

        if let Some(Value::String(dir)) = tree.get("dir") {
            if dir != "ltr" && dir != "rtl" {
                report.warnings.push(format!(
                    "Language '{}' declares unexpected text direction '{}'",
                    code, dir
                ));
            }
        }
    }

    /// Warn for every default-language key path another language lacks.
    fn check_key_parity(dictionary: &Dictionary, report: &mut ValidationReport) {
        let default_code = Language::default_language().code();
        let default_tree = match dictionary.get(default_code) {
            Some(tree) => tree,
            // Absence of the default is already reported as an error
            None => return,
        };

        let mut reference_paths = Vec::new();
        Self::collect_paths(default_tree, String::new(), &mut reference_paths);

        for config in LanguageRegistry::get().list_all() {
            if config.code == default_code {
                continue;
            }
            let tree = match dictionary.get(config.code) {
                Some(tree) => tree,
                None => continue,
            };
            for path in &reference_paths {
                if Self::walk(tree, path).is_none() {
                    report.warnings.push(format!(
                        "Language '{}' is missing key '{}'",
                        config.code, path
                    ));
                }
            }
        }
    }

    /// Collect the dot path of every leaf in a tree. Arrays count as
    /// leaves; their per-element shape is up to the renderer.
    fn collect_paths(node: &Value, prefix: String, paths: &mut Vec<String>) {
        match node {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    Self::collect_paths(child, path, paths);
                }
            }
            _ => {
                if !prefix.is_empty() {
                    paths.push(prefix);
                }
            }
        }
    }

    /// Walk a dot path inside one language tree.
    fn walk<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
        let mut node = tree;
        for segment in path.split('.') {
            node = node.get(segment)?;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// A dictionary value covering every supported language with matching
    /// key paths.
    fn complete_value() -> Value {
        let mut languages = serde_json::Map::new();
        for config in LanguageRegistry::get().list_all() {
            languages.insert(
                config.code.to_string(),
                json!({
                    "name": config.name,
                    "dir": if config.code == "ar" { "rtl" } else { "ltr" },
                    "home": {
                        "title": "Title",
                        "about_title": "About"
                    },
                    "skills": ["One", "Two"]
                }),
            );
        }
        Value::Object(languages)
    }

    // ==================== Structural Tests ====================

    #[test]
    fn test_complete_dictionary_is_clean() {
        let dictionary = Dictionary::from_value(complete_value()).unwrap();

        let report = DictionaryValidator::validate(&dictionary);
        assert!(report.is_clean(), "unexpected report: {:?}", report);
    }

    #[test]
    fn test_missing_language_is_an_error() {
        let mut value = complete_value();
        value.as_object_mut().unwrap().remove("ja");
        let dictionary = Dictionary::from_value(value).unwrap();

        let report = DictionaryValidator::validate(&dictionary);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("'ja'"));
        assert!(report.errors[0].contains("missing from the dictionary"));
    }

    #[test]
    fn test_non_object_language_is_an_error() {
        let mut value = complete_value();
        value["ru"] = json!("not a tree");
        let dictionary = Dictionary::from_value(value).unwrap();

        let report = DictionaryValidator::validate(&dictionary);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("must map to a JSON object"));
    }

    #[test]
    fn test_missing_name_attribute_is_an_error() {
        let mut value = complete_value();
        value["en"].as_object_mut().unwrap().remove("name");
        let dictionary = Dictionary::from_value(value).unwrap();

        let report = DictionaryValidator::validate(&dictionary);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("'en'"));
        assert!(report.errors[0].contains("'name'"));
    }

    #[test]
    fn test_non_string_dir_attribute_is_an_error() {
        let mut value = complete_value();
        value["pt"]["dir"] = json!(42);
        let dictionary = Dictionary::from_value(value).unwrap();

        let report = DictionaryValidator::validate(&dictionary);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("non-string 'dir'"));
    }

    // ==================== Coverage Tests ====================

    #[test]
    fn test_unexpected_direction_is_a_warning() {
        let mut value = complete_value();
        value["el"]["dir"] = json!("upside-down");
        let dictionary = Dictionary::from_value(value).unwrap();

        let report = DictionaryValidator::validate(&dictionary);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("upside-down"));
    }

    #[test]
    fn test_missing_key_is_a_warning() {
        let mut value = complete_value();
        value["en"]["home"].as_object_mut().unwrap().remove("title");
        let dictionary = Dictionary::from_value(value).unwrap();

        let report = DictionaryValidator::validate(&dictionary);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("'en'") && w.contains("'home.title'")));
    }

    #[test]
    fn test_extra_key_in_other_language_is_not_reported() {
        // Parity is checked against the default language only
        let mut value = complete_value();
        value["en"]["home"]["extra"] = json!("Only in English");
        let dictionary = Dictionary::from_value(value).unwrap();

        let report = DictionaryValidator::validate(&dictionary);
        assert!(report.is_clean());
    }

    #[test]
    fn test_unsupported_language_is_a_warning() {
        let mut value = complete_value();
        value.as_object_mut().unwrap().insert(
            "es".to_string(),
            json!({"name": "Español", "dir": "ltr"}),
        );
        let dictionary = Dictionary::from_value(value).unwrap();

        let report = DictionaryValidator::validate(&dictionary);
        assert!(!report.has_errors());
        assert!(report.warnings.iter().any(|w| w.contains("'es'")));
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());

        assert!(!report.is_clean());
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }
}
