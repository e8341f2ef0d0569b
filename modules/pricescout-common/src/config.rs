use std::env;

use tracing::info;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Search provider
    pub tavily_api_key: String,

    // AI provider
    pub groq_api_key: String,
    pub groq_model: String,

    /// Market the search queries target, e.g. "pakistan".
    pub search_locale: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            tavily_api_key: required_env("TAVILY_API_KEY"),
            groq_api_key: required_env("GROQ_API_KEY"),
            groq_model: env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama3-70b-8192".to_string()),
            search_locale: env::var("SEARCH_LOCALE")
                .unwrap_or_else(|_| "pakistan".to_string()),
        }
    }

    /// Log the active configuration without exposing credentials.
    pub fn log_redacted(&self) {
        info!(
            tavily_api_key_set = !self.tavily_api_key.is_empty(),
            groq_api_key_set = !self.groq_api_key.is_empty(),
            groq_model = self.groq_model.as_str(),
            search_locale = self.search_locale.as_str(),
            "Config loaded"
        );
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
