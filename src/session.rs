//! In-memory visitor sessions.
//!
//! A session carries exactly one value, the visitor's chosen language
//! code, keyed by an opaque cookie id. Entries expire 24 hours after
//! their last write and are swept on every write, so the map cannot grow
//! without bound.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use uuid::Uuid;

const SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug)]
struct SessionEntry {
    language: String,
    touched: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Mint a fresh opaque session id.
    pub fn mint_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Look up the language stored for a session id.
    ///
    /// Expired entries read as absent; they are removed by the next
    /// write.
    pub fn language(&self, session_id: &str) -> Option<String> {
        let sessions = self.sessions.lock().unwrap();
        sessions.get(session_id).and_then(|entry| {
            if entry.touched.elapsed() < SESSION_TTL {
                Some(entry.language.clone())
            } else {
                None
            }
        })
    }

    /// Store a language for a session id, refreshing its expiry.
    pub fn store(&self, session_id: &str, language: &str) {
        let mut sessions = self.sessions.lock().unwrap();

        // Sweep expired entries while holding the write lock
        sessions.retain(|_, entry| entry.touched.elapsed() < SESSION_TTL);

        sessions.insert(
            session_id.to_string(),
            SessionEntry {
                language: language.to_string(),
                touched: Instant::now(),
            },
        );
    }

    /// Number of live entries, expired ones included until the next
    /// sweep.
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    fn backdate(&self, session_id: &str, age: Duration) {
        let mut sessions = self.sessions.lock().unwrap();
        if let Some(entry) = sessions.get_mut(session_id) {
            entry.touched = Instant::now().checked_sub(age).unwrap();
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract a named cookie value from a `Cookie` request header.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key == name {
            Some(value.to_string())
        } else {
            None
        }
    })
}

/// Format the `Set-Cookie` header that pins a session id to a visitor.
pub fn session_cookie(name: &str, session_id: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", name, session_id)
}
