//! Client for OpenAI-compatible chat-completion endpoints.

use scrivener_core::{GenerateRequest, GenerateResponse};
use scrivener_error::{ModelsError, ModelsErrorKind, ModelsResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// OpenAI-compatible chat completion request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
}

/// A message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,
    /// Message content
    pub content: String,
}

/// OpenAI-compatible chat completion response.
///
/// Only the fields the bot reads are modelled; providers add more.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionResponse {
    /// Model used for completion
    #[serde(default)]
    pub model: Option<String>,
    /// Generated completions
    pub choices: Vec<Choice>,
}

/// A completion choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Choice {
    /// Index of this choice
    #[serde(default)]
    pub index: u32,
    /// The generated message
    pub message: ChoiceMessage,
}

/// Message in a choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChoiceMessage {
    /// Role of the message (typically "assistant")
    #[serde(default)]
    pub role: Option<String>,
    /// Generated content
    #[serde(default)]
    pub content: Option<String>,
}

/// Generic client for providers exposing `/chat/completions`.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
    provider: &'static str,
}

impl OpenAICompatibleClient {
    /// Create a client posting to `endpoint` (the full completions URL).
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
        provider: &'static str,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            endpoint: endpoint.into(),
            provider,
        }
    }

    /// Replace the underlying HTTP client (timeouts, proxies).
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Provider name used in logs.
    pub fn provider_name(&self) -> &'static str {
        self.provider
    }

    /// Configured model.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Completions endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn to_chat_request(&self, req: &GenerateRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: req.model().clone().unwrap_or_else(|| self.model.clone()),
            messages: req
                .messages()
                .iter()
                .map(|m| ChatMessage {
                    role: m.role.to_string(),
                    content: m.content.clone(),
                })
                .collect(),
        }
    }

    /// Send a chat completion request and return the first choice's text.
    #[instrument(skip(self, req), fields(provider = self.provider, model = %self.model))]
    pub async fn generate(&self, req: &GenerateRequest) -> ModelsResult<GenerateResponse> {
        let chat_request = self.to_chat_request(req);
        debug!(endpoint = %self.endpoint, messages = chat_request.messages.len(), "Sending chat completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| ModelsError::new(ModelsErrorKind::Http(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelsError::new(classify_status(
                status.as_u16(),
                body,
                &chat_request.model,
            )));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ModelsError::new(ModelsErrorKind::ResponseParsing(e.to_string())))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ModelsError::new(ModelsErrorKind::EmptyCompletion))?;

        debug!(chars = text.len(), "Chat completion successful");
        Ok(GenerateResponse::new(
            text,
            parsed.model.unwrap_or(chat_request.model),
        ))
    }
}

fn classify_status(status: u16, body: String, model: &str) -> ModelsErrorKind {
    match status {
        429 => ModelsErrorKind::RateLimit,
        401 | 403 => ModelsErrorKind::Authentication(body),
        404 => ModelsErrorKind::ModelNotFound(model.to_string()),
        _ => ModelsErrorKind::Api {
            status,
            message: body,
        },
    }
}
