//! Top-level error wrapper types.

use crate::{ConfigError, ModelsError, SocialError};

/// Every error a Scrivener crate can surface.
///
/// # Examples
///
/// ```
/// use scrivener_error::{ConfigError, ScrivenerError};
///
/// let err: ScrivenerError = ConfigError::new("bad schedule").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScrivenerErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Language-model provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Social platform error
    #[from(SocialError)]
    Social(SocialError),
}

/// Scrivener error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scrivener Error: {}", _0)]
pub struct ScrivenerError(Box<ScrivenerErrorKind>);

impl ScrivenerError {
    /// Create a new error from a kind.
    pub fn new(kind: ScrivenerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScrivenerErrorKind {
        &self.0
    }
}

impl<T> From<T> for ScrivenerError
where
    T: Into<ScrivenerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scrivener operations.
pub type ScrivenerResult<T> = std::result::Result<T, ScrivenerError>;
