//! Request and response types for text generation.

use crate::Message;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Provider-agnostic generation request.
///
/// # Examples
///
/// ```
/// use scrivener_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Hello!")])
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert!(request.model().is_none());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Model override; drivers fall back to their configured model
    #[builder(default)]
    model: Option<String>,
}

impl GenerateRequest {
    /// Create a builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Single-prompt request, the shape every bot job uses.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::user(prompt)],
            ..Self::default()
        }
    }
}

/// Text produced by a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerateResponse {
    /// Generated text, untrimmed
    text: String,
    /// Model that produced the text
    model: String,
}

impl GenerateResponse {
    /// Create a response.
    pub fn new(text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
        }
    }
}
