//! Language resolution: produce exactly one language per request.
//!
//! Resolution applies request signals in strict precedence order: query
//! parameter, form parameter, stored session value, `Accept-Language`
//! header, fixed default. It is a pure decision function; the caller is
//! responsible for writing the result back to the session when `persist`
//! is set. Resolution is total: malformed or unsupported signals are
//! skipped, never reported.

use crate::i18n::Language;

/// The per-request signals language resolution draws from.
///
/// All fields are optional; an absent signal simply falls through to the
/// next rule.
#[derive(Debug, Clone, Default)]
pub struct LanguageSignals<'a> {
    /// Explicit `lang` query parameter
    pub query_lang: Option<&'a str>,

    /// Explicit `lang` form-body parameter (non-idempotent submissions)
    pub form_lang: Option<&'a str>,

    /// Language value previously stored in the session
    pub session_lang: Option<&'a str>,

    /// Raw `Accept-Language` header value
    pub accept_language: Option<&'a str>,
}

/// The outcome of language resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// The language to serve the request in
    pub language: Language,

    /// Whether the caller must write `language` back to the session.
    ///
    /// False only when the language came from the session itself.
    pub persist: bool,
}

/// Resolve the active language for a request.
///
/// First match wins: a supported query `lang`, then a supported form
/// `lang`, then a supported session value, then the first supported
/// two-letter subtag of `Accept-Language` in header order, then the
/// default language.
pub fn resolve_language(signals: &LanguageSignals<'_>) -> Resolution {
    // 1. Explicit query parameter
    if let Some(language) = signals.query_lang.and_then(Language::try_from_code) {
        return Resolution {
            language,
            persist: true,
        };
    }

    // 2. Explicit form parameter
    if let Some(language) = signals.form_lang.and_then(Language::try_from_code) {
        return Resolution {
            language,
            persist: true,
        };
    }

    // 3. Stored session value: already persisted, no write-back
    if let Some(language) = signals.session_lang.and_then(Language::try_from_code) {
        return Resolution {
            language,
            persist: false,
        };
    }

    // 4. Accept-Language negotiation, first supported subtag in header order
    if let Some(header) = signals.accept_language {
        for candidate in parse_accept_language(header) {
            if let Some(language) = Language::try_from_code(&candidate) {
                return Resolution {
                    language,
                    persist: true,
                };
            }
        }
    }

    // 5. Fixed default
    Resolution {
        language: Language::default_language(),
        persist: true,
    }
}

/// Parse an `Accept-Language` header into ordered candidate subtags.
///
/// Each comma-separated entry is trimmed, anything from the first `;` on
/// (the quality parameter) is dropped, and the remainder is lowercased and
/// truncated to its first two characters. Regional variants collapse to
/// their primary subtag (`zh-Hant` and `zh-Hans` both become `zh`).
/// Malformed entries produce candidates that match nothing; they never
/// abort parsing of later entries.
pub fn parse_accept_language(header: &str) -> Vec<String> {
    header
        .split(',')
        .map(|part| {
            let subtag = part.trim().split(';').next().unwrap_or("");
            subtag.to_lowercase().chars().take(2).collect()
        })
        .collect()
}
