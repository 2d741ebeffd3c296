//! LLM Client: the single point of entry for all completion calls in the service.
//!
//! No other module may call a provider API directly. Features depend on the
//! `CompletionProvider` trait and receive a concrete client through `AppState`,
//! chosen once at startup from `LLM_PROVIDER`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::config::{Config, LlmProvider};

pub mod anthropic;
pub mod gemini;

pub use anthropic::AnthropicClient;
pub use gemini::GeminiClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Text-in, text-out completion capability.
///
/// Implementations make exactly one outbound call per invocation. Timeouts and
/// transport failures come back as `LlmError`; nothing here retries.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

/// Builds the configured provider. The HTTP client carries the request timeout.
pub fn build_provider(config: &Config) -> Result<Arc<dyn CompletionProvider>, LlmError> {
    let http = Client::builder()
        .timeout(Duration::from_secs(config.llm_timeout_secs))
        .build()?;

    let provider: Arc<dyn CompletionProvider> = match config.llm_provider {
        LlmProvider::Gemini => Arc::new(GeminiClient::new(http, config.llm_api_key.clone())),
        LlmProvider::Anthropic => {
            Arc::new(AnthropicClient::new(http, config.llm_api_key.clone()))
        }
    };
    Ok(provider)
}

/// Reads a non-success response body and turns it into `LlmError::Api`,
/// using `extract` to pull a readable message out of the provider's error JSON.
async fn api_error(
    response: reqwest::Response,
    extract: fn(&str) -> Option<String>,
) -> LlmError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = extract(&body).unwrap_or(body);
    LlmError::Api { status, message }
}

#[cfg(test)]
pub mod testing {
    //! Scripted provider double shared by feature tests.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Replays canned completions in order and records every prompt it saw.
    pub struct ScriptedProvider {
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
        pub calls: Mutex<Vec<(String, String)>>,
    }

    impl ScriptedProvider {
        pub fn replying(reply: &str) -> Self {
            Self::new(vec![Ok(reply.to_string())])
        }

        pub fn failing(error: LlmError) -> Self {
            Self::new(vec![Err(error)])
        }

        pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionProvider for ScriptedProvider {
        async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((system.to_string(), user.to_string()));
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(LlmError::EmptyContent))
        }

        fn name(&self) -> &'static str {
            "scripted"
        }
    }
}
