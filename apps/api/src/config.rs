use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::assessment::matcher::DEFAULT_TOP_K;

/// Application configuration loaded from environment variables.
/// Everything has a default; an unset `ANTHROPIC_API_KEY` disables AI features.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    pub feedback_file: PathBuf,
    pub feedback_body_limit_bytes: usize,
    pub career_catalog_path: Option<PathBuf>,
    pub match_top_k: usize,
    pub llm_timeout: Duration,
    pub llm_max_retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            rust_log: "info".to_string(),
            anthropic_api_key: None,
            feedback_file: PathBuf::from("database.json"),
            feedback_body_limit_bytes: 10 * 1024,
            career_catalog_path: None,
            match_top_k: DEFAULT_TOP_K,
            llm_timeout: Duration::from_secs(60),
            llm_max_retries: 3,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            feedback_file: optional_env("FEEDBACK_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.feedback_file),
            feedback_body_limit_bytes: parse_env(
                "FEEDBACK_BODY_LIMIT_BYTES",
                defaults.feedback_body_limit_bytes,
            )?,
            career_catalog_path: optional_env("CAREER_CATALOG_PATH").map(PathBuf::from),
            match_top_k: parse_env("MATCH_TOP_K", defaults.match_top_k)?,
            llm_timeout: Duration::from_secs(parse_env(
                "LLM_TIMEOUT_SECS",
                defaults.llm_timeout.as_secs(),
            )?),
            llm_max_retries: parse_env("LLM_MAX_RETRIES", defaults.llm_max_retries)?,
        })
    }
}

/// Unset and blank values are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        None => Ok(default),
    }
}
