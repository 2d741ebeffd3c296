use anyhow::{bail, Context, Result};

/// Which completion backend the service talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    Gemini,
    Anthropic,
}

impl LlmProvider {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(LlmProvider::Gemini),
            "anthropic" => Ok(LlmProvider::Anthropic),
            other => bail!("LLM_PROVIDER must be 'gemini' or 'anthropic', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub llm_provider: LlmProvider,
    /// API key for whichever provider `llm_provider` selects.
    pub llm_api_key: String,
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let llm_provider = LlmProvider::parse(
            &std::env::var("LLM_PROVIDER").unwrap_or_else(|_| "gemini".to_string()),
        )?;
        let llm_api_key = match llm_provider {
            LlmProvider::Gemini => require_env("GEMINI_API_KEY")?,
            LlmProvider::Anthropic => require_env("ANTHROPIC_API_KEY")?,
        };

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            llm_provider,
            llm_api_key,
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parse_is_case_insensitive() {
        assert_eq!(LlmProvider::parse("Gemini").unwrap(), LlmProvider::Gemini);
        assert_eq!(LlmProvider::parse(" ANTHROPIC ").unwrap(), LlmProvider::Anthropic);
    }

    #[test]
    fn test_provider_parse_rejects_unknown_backend() {
        let err = LlmProvider::parse("openai").unwrap_err();
        assert!(err.to_string().contains("openai"));
    }
}
