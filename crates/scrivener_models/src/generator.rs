//! Prompt-in, text-out wrapper that never fails loudly.

use crate::TextGenerator;
use scrivener_core::GenerateRequest;
use tracing::{debug, error, instrument, warn};

/// Sends single prompts to a [`TextGenerator`] and absorbs its failures.
///
/// Transport and API errors are logged and reported as `None`; callers treat
/// `None` as "skip this post".
#[derive(Debug, Clone)]
pub struct ContentGenerator<D> {
    driver: D,
}

impl<D: TextGenerator> ContentGenerator<D> {
    /// Wrap a driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// The wrapped driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Generate trimmed text for `prompt`, or `None` on any failure.
    #[instrument(skip_all, fields(provider = self.driver.provider_name(), model = %self.driver.model_name()))]
    pub async fn generate(&self, prompt: &str) -> Option<String> {
        let request = GenerateRequest::from_prompt(prompt);

        match self.driver.generate(&request).await {
            Ok(response) => {
                let text = response.text().trim();
                if text.is_empty() {
                    warn!("Language model returned an empty completion");
                    return None;
                }
                debug!(chars = text.chars().count(), "Generated content");
                Some(text.to_string())
            }
            Err(e) => {
                error!(error = %e, "Error communicating with language model");
                None
            }
        }
    }
}
