use std::path::PathBuf;

/// Runtime configuration, read once from the environment at startup.
///
/// Every variable is optional; the defaults match the repository layout,
/// so the server runs without any environment set up.
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Translations
    pub languages_file: PathBuf,
    pub languages_fallback_file: PathBuf,

    // Static assets
    pub public_dir: PathBuf,
    pub css_file: PathBuf,
    pub schemas_dir: PathBuf,
    pub og_background: PathBuf,

    // Absolute-link base for meta tags; derived from the Host header
    // when unset
    pub public_base_url: Option<String>,

    // Sessions
    pub session_cookie: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Translations
            languages_file: path_var("LANGUAGES_FILE", "config/languages.json"),
            languages_fallback_file: path_var(
                "LANGUAGES_FALLBACK_FILE",
                "config/languages.default.json",
            ),

            // Static assets
            public_dir: path_var("PUBLIC_DIR", "public"),
            css_file: path_var("CSS_FILE", "public/style.css"),
            schemas_dir: path_var("SCHEMAS_DIR", "schemas"),
            og_background: path_var("OG_BACKGROUND", "public/background.png"),

            public_base_url: std::env::var("PUBLIC_BASE_URL").ok(),

            // Sessions
            session_cookie: std::env::var("SESSION_COOKIE")
                .unwrap_or_else(|_| "portfolio_session".to_string()),
        }
    }

    /// The address string the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    std::env::var(name)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
