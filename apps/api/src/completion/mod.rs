//! Completion proxy — the single point of entry for calls to the upstream
//! text-completion provider.
//!
//! No other module talks to the provider directly. Handlers go through the
//! `CompletionProvider` held in `AppState`, which tests replace with a stub.
//!
//! Upstream failures are reported, never retried.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header::CONTENT_TYPE, Client};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod handlers;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";
pub const DEFAULT_MAX_TOKENS: u32 = 64;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("OPENAI_API_KEY not configured")]
    MissingApiKey,

    /// Non-2xx from the provider. Carries the raw response so it can be forwarded as-is.
    #[error("Upstream returned status {status}")]
    Upstream {
        status: u16,
        content_type: Option<String>,
        body: Bytes,
    },

    #[error("Upstream request timed out")]
    Timeout,

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for CompletionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CompletionError::Timeout
        } else {
            CompletionError::Http(e)
        }
    }
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub prompt: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_model")]
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub completion: String,
    pub model: String,
}

/// Anything that can turn a prompt into a completion.
/// Carried in `AppState` as `Arc<dyn CompletionProvider>`.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, CompletionError>;
}

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    #[serde(default)]
    text: String,
}

impl OpenAiResponse {
    /// Trimmed text of the first choice, or empty if the provider sent none.
    fn first_text(&self) -> &str {
        self.choices.first().map(|c| c.text.trim()).unwrap_or("")
    }
}

/// Client for the legacy `/completions` endpoint used by instruct models.
#[derive(Clone)]
pub struct OpenAiCompletionClient {
    client: Client,
    api_key: Option<String>,
    api_base: String,
}

impl OpenAiCompletionClient {
    /// A missing `api_key` is accepted here and reported per request as `MissingApiKey`.
    pub fn new(
        api_key: Option<String>,
        api_base: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            api_base: api_base.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/completions", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingApiKey)?;

        let body = OpenAiRequest {
            model: &request.model,
            prompt: &request.prompt,
            max_tokens: request.max_tokens,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            let body = response.bytes().await?;
            warn!(
                "Completion API returned {}: {}",
                status,
                String::from_utf8_lossy(&body)
            );
            return Err(CompletionError::Upstream {
                status: status.as_u16(),
                content_type,
                body,
            });
        }

        let payload = response.bytes().await?;
        let parsed: OpenAiResponse = serde_json::from_slice(&payload)?;

        debug!(
            "Completion call succeeded: model={}, choices={}",
            request.model,
            parsed.choices.len()
        );

        Ok(Completion {
            completion: parsed.first_text().to_string(),
            model: request.model.clone(),
        })
    }
}
