use anyhow::{Context, Result};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1-mini";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub llm_timeout_secs: u64,
    pub max_upload_bytes: usize,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 120)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 8 * 1024 * 1024)?,
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .map(|raw| split_origins(&raw))
                .unwrap_or_default(),
            port: parse_env("PORT", 8000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_origins_skips_blanks() {
        let origins = split_origins(" http://localhost:5173, ,http://127.0.0.1:5173,");
        assert_eq!(
            origins,
            vec!["http://localhost:5173", "http://127.0.0.1:5173"]
        );
    }

    #[test]
    fn test_split_origins_empty() {
        assert!(split_origins("").is_empty());
    }
}
