//! Social platform errors.

/// Error conditions reported by a social platform client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SocialErrorKind {
    /// Transport failure before a response arrived
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// OAuth token request failed or credentials were rejected
    #[display("Authentication failed: {}", _0)]
    Authentication(String),

    /// Platform refused the request for exceeding its rate limit
    #[display("Rate limit exceeded: {}", _0)]
    RateLimit(String),

    /// Platform returned a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Request was accepted over HTTP but rejected by the platform
    #[display("Request rejected: {}", _0)]
    Rejected(String),

    /// Response body could not be decoded
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),

    /// Input failed local validation before any request was sent
    #[display("Validation failed: {}", _0)]
    Validation(String),
}

impl SocialErrorKind {
    /// Whether this error signals the platform's rate limit.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimit(_))
    }
}

/// Social platform error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Social Error: {} at {}:{}", kind, file, line)]
pub struct SocialError {
    /// The specific error kind
    pub kind: SocialErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl SocialError {
    /// Create a new social error.
    #[track_caller]
    pub fn new(kind: SocialErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Whether this error signals the platform's rate limit.
    pub fn is_rate_limit(&self) -> bool {
        self.kind.is_rate_limit()
    }
}

/// Result type for social platform operations.
pub type SocialResult<T> = Result<T, SocialError>;
