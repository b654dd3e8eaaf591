//! Language-model provider errors.

/// Provider error conditions for chat-completion calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// Transport failure before a response arrived
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Provider returned a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Provider rejected the request for exceeding its rate limit
    #[display("Rate limit exceeded")]
    RateLimit,

    /// API key missing or rejected
    #[display("Authentication failed: {}", _0)]
    Authentication(String),

    /// Requested model is unknown to the provider
    #[display("Model not found: {}", _0)]
    ModelNotFound(String),

    /// Response body could not be decoded
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),

    /// Response decoded but carried no usable text
    #[display("Empty completion")]
    EmptyCompletion,

    /// Request could not be assembled
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Model provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
