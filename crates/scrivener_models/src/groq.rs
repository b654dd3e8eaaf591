//! Groq LPU inference driver using the OpenAI-compatible client.

use crate::{OpenAICompatibleClient, TextGenerator};
use async_trait::async_trait;
use scrivener_core::{GenerateRequest, GenerateResponse};
use scrivener_error::{ModelsError, ModelsErrorKind, ModelsResult};
use std::time::Duration;
use tracing::instrument;

/// Groq's OpenAI-compatible API root.
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Groq inference driver.
#[derive(Debug, Clone)]
pub struct GroqDriver {
    inner: OpenAICompatibleClient,
}

impl GroqDriver {
    /// Creates a driver against the public Groq endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is empty.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> ModelsResult<Self> {
        Self::with_base_url(api_key, model, GROQ_BASE_URL)
    }

    /// Creates a driver against an alternate API root (proxies, tests).
    ///
    /// # Errors
    ///
    /// Returns error if the API key is empty.
    #[instrument(skip(api_key, model), fields(base_url = %base_url.as_ref()))]
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl AsRef<str>,
    ) -> ModelsResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ModelsError::new(ModelsErrorKind::Authentication(
                "GROQ_API_KEY is empty".to_string(),
            )));
        }

        let endpoint = format!(
            "{}/chat/completions",
            base_url.as_ref().trim_end_matches('/')
        );
        let inner = OpenAICompatibleClient::new(api_key, model, endpoint, "groq");
        Ok(Self { inner })
    }

    /// Apply a request timeout to every call.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn with_timeout(self, timeout: Duration) -> ModelsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))?;
        Ok(Self {
            inner: self.inner.with_http_client(client),
        })
    }
}

#[async_trait]
impl TextGenerator for GroqDriver {
    async fn generate(&self, req: &GenerateRequest) -> ModelsResult<GenerateResponse> {
        self.inner.generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
