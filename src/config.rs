use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub search_host: String,
    pub gemini_host: String,
    pub gemini_model: String,
    pub secrets_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            search_host: env::var("SCOUT_SEARCH_HOST")
                .unwrap_or_else(|_| "https://api.tavily.com".to_string()),
            gemini_host: env::var("SCOUT_GEMINI_HOST")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            gemini_model: env::var("SCOUT_GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            secrets_dir: env::var("SCOUT_SECRETS_DIR")
                .unwrap_or_else(|_| "/run/secrets".to_string()),
        }
    }
}
