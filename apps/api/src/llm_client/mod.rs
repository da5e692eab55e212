//! LLM Client — the single point of entry for all chat-completion calls.
//!
//! ARCHITECTURAL RULE: No other module may call the completion API directly.
//! All LLM interactions MUST go through a `CompletionGateway`.
//!
//! Every call asks for a JSON object response. Calls are never retried:
//! a failed call is terminal for the request that issued it.
use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A prior conversation turn replayed between the system prompt and the
/// final user prompt.
#[derive(Debug, Clone)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// An image sent inline with the user prompt.
#[derive(Debug, Clone)]
pub struct InlineImage {
    pub content_type: String,
    pub data: Bytes,
}

impl InlineImage {
    /// `data:<mime>;base64,<payload>`
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            STANDARD.encode(&self.data)
        )
    }
}

/// Everything one completion call needs.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub history: Vec<Turn>,
    pub image: Option<InlineImage>,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            history: Vec::new(),
            image: None,
        }
    }

    pub fn with_history(mut self, history: Vec<Turn>) -> Self {
        self.history = history;
        self
    }

    pub fn with_image(mut self, image: InlineImage) -> Self {
        self.image = Some(image);
        self
    }
}

/// The seam between request handling and the external model.
///
/// Carried in `AppState` as `Arc<dyn CompletionGateway>`.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Sends the request and returns the model's raw text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire format (OpenAI-compatible chat completions)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: Role,
    content: WireContent<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum WireContent<'a> {
    Text(&'a str),
    Parts(Vec<ContentPart<'a>>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if the model produced any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

fn build_messages(request: &CompletionRequest) -> Vec<WireMessage<'_>> {
    let mut messages = Vec::with_capacity(request.history.len() + 2);
    messages.push(WireMessage {
        role: Role::System,
        content: WireContent::Text(&request.system),
    });
    messages.extend(request.history.iter().map(|turn| WireMessage {
        role: turn.role,
        content: WireContent::Text(&turn.content),
    }));

    let user_content = match &request.image {
        Some(image) => WireContent::Parts(vec![
            ContentPart::Text {
                text: &request.user,
            },
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: image.data_url(),
                },
            },
        ]),
        None => WireContent::Text(&request.user),
    };
    messages.push(WireMessage {
        role: Role::User,
        content: user_content,
    });
    messages
}

/// Chat-completion client for any OpenAI-compatible endpoint.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: String,
        base_url: &str,
        model: String,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            model,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        Self::new(
            config.openai_api_key.clone(),
            &config.openai_base_url,
            config.openai_model.clone(),
            Duration::from_secs(config.llm_timeout_secs),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionGateway for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let body = ChatCompletionBody {
            model: &self.model,
            messages: build_messages(&request),
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        debug!(
            model = %self.model,
            history = request.history.len(),
            has_image = request.image.is_some(),
            "Calling chat completion API"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("Chat completion API returned {}: {}", status, message);

            if status.as_u16() == 429 {
                return Err(LlmError::RateLimited(message));
            }
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Chat completion succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        completion
            .text()
            .map(String::from)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
