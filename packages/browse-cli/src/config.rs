use dotenvy::dotenv;
use std::env;

use realestate_client::DEFAULT_BASE_URL;

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        // Load .env file if present (development)
        let _ = dotenv();

        Self {
            base_url: env::var("REALESTATE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}
