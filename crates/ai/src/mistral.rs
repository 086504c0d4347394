//! Mistral chat-completions client.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::AiError;
use crate::theme_quotes::QuoteGeneratorTrait;

const PROVIDER_ID: &str = "mistral";

pub const DEFAULT_BASE_URL: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mistral-large-latest";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection settings for [`MistralGenerator`].
#[derive(Debug, Clone)]
pub struct MistralConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Upper bound on one generation, including connect time.
    pub timeout: Duration,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl MistralConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_tokens: 300,
            temperature: 0.7,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Generates text with a Mistral model over HTTPS.
pub struct MistralGenerator {
    client: Client,
    config: MistralConfig,
}

impl MistralGenerator {
    pub fn new(config: MistralConfig) -> Result<Self, AiError> {
        if config.api_key.trim().is_empty() {
            return Err(AiError::MissingApiKey(PROVIDER_ID.to_string()));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }
}

/// Maps a non-success status to the matching error.
fn status_error(status: StatusCode) -> AiError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        AiError::QuotaExceeded
    } else {
        AiError::Server(status.as_u16())
    }
}

/// Pulls the first completion out of a response body.
fn extract_content(body: &str) -> Result<String, AiError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| AiError::Parse(e.to_string()))?;
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AiError::Parse("response has no completion".to_string()))?;

    let cleaned = clean_generated_quote(&content);
    if cleaned.is_empty() {
        return Err(AiError::Parse("completion is empty".to_string()));
    }
    Ok(cleaned)
}

/// Strips the wrapping quotes models tend to add despite the prompt.
fn clean_generated_quote(raw: &str) -> String {
    let mut text = raw.trim();
    for (open, close) in [("«", "»"), ("\"", "\""), ("“", "”"), ("*", "*")] {
        if let Some(inner) = text
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
        {
            text = inner.trim();
        }
    }
    text.to_string()
}

#[async_trait]
impl QuoteGeneratorTrait for MistralGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        debug!(
            "Generating quote with provider {} model {}",
            PROVIDER_ID, self.config.model
        );

        let response = self
            .client
            .post(&self.config.base_url)
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            warn!(
                "{} returned {}: {}",
                PROVIDER_ID,
                status,
                body.chars().take(200).collect::<String>()
            );
            return Err(status_error(status));
        }

        extract_content(&body)
    }
}
