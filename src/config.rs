use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone)]
pub struct Config {
    /// Credential gating AI query expansion. `None` when unset or empty.
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub bind_addr: String,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Config {
        dotenv().ok(); // Load .env file if present
        Config {
            google_api_key: get_env_opt("GOOGLE_API_KEY"),
            gemini_model: get_env_or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_api_base: get_env_or_default("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
            bind_addr: get_env_or_default("BIND_ADDR", "0.0.0.0:9002"),
            static_dir: get_env_or_default("STATIC_DIR", "static"),
        }
    }

    pub fn has_google_api_key(&self) -> bool {
        self.google_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            google_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            bind_addr: "0.0.0.0:9002".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

// The key must never show up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field(
                "google_api_key",
                &self.google_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("gemini_api_base", &self.gemini_api_base)
            .field("bind_addr", &self.bind_addr)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

fn get_env_opt(key: &str) -> Option<String> {
    non_empty(env::var(key).ok())
}

/// Blank values count as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn get_env_or_default(key: &str, default: &str) -> String {
    get_env_opt(key).unwrap_or_else(|| default.to_string())
}
