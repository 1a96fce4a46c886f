use anyhow::{Context, Result};

/// Default completion model used when AI_COMPLETION_MODEL env var is not set
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-4.1-mini-2025-04-14";

/// Default response language tag
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default chat completions API base
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Application configuration from environment
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub completion_model: String,
    pub language: String,
    pub api_base: String,
}

impl Config {
    /// Load configuration from .env file and environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Not an error if .env is absent

        let openai_api_key = std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;

        let completion_model = std::env::var("AI_COMPLETION_MODEL")
            .unwrap_or_else(|_| DEFAULT_COMPLETION_MODEL.to_string());

        let language = std::env::var("LANGUAGE").unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string());

        let api_base =
            std::env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Ok(Self {
            openai_api_key,
            completion_model,
            language,
            api_base,
        })
    }
}
