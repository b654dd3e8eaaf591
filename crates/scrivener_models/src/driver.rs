//! Trait implemented by language-model backends.

use async_trait::async_trait;
use scrivener_core::{GenerateRequest, GenerateResponse};
use scrivener_error::ModelsResult;

/// Minimal interface for chat-completion backends.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for the given request.
    async fn generate(&self, req: &GenerateRequest) -> ModelsResult<GenerateResponse>;

    /// Provider name (e.g., "groq").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "llama-3.3-70b-versatile").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for std::sync::Arc<T> {
    async fn generate(&self, req: &GenerateRequest) -> ModelsResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
