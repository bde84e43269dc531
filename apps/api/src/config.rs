use std::time::Duration;

use anyhow::{Context, Result};

use crate::completion::{DEFAULT_API_BASE, DEFAULT_TIMEOUT};

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

/// Application configuration loaded from environment variables.
/// Nothing is strictly required: a missing `OPENAI_API_KEY` only disables `/ai/complete`.
#[derive(Debug, Clone)]
pub struct Config {
    /// CORS allow-list. A `*` entry mirrors any requesting origin.
    pub allowed_origins: Vec<String>,
    pub openai_api_key: Option<String>,
    pub openai_api_base: String,
    pub completion_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let completion_timeout = match optional_env("COMPLETION_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.parse::<u64>()
                    .context("COMPLETION_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Config {
            allowed_origins: parse_origins(
                &optional_env("ALLOWED_ORIGINS")
                    .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_api_base: optional_env("OPENAI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            completion_timeout,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Splits a comma-separated origin list, dropping blank entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_drops_blanks() {
        let origins = parse_origins(" http://localhost:3000 , ,https://niyog.app,");
        assert_eq!(origins, vec!["http://localhost:3000", "https://niyog.app"]);
    }

    #[test]
    fn test_parse_origins_empty() {
        assert!(parse_origins("  ").is_empty());
    }

    #[test]
    fn test_parse_origins_default_value() {
        assert_eq!(
            parse_origins(DEFAULT_ALLOWED_ORIGINS),
            vec!["http://localhost:3000"]
        );
    }
}
