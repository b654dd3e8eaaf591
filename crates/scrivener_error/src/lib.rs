//! Error types for the Scrivener bot.
//!
//! This crate provides the error types used throughout the Scrivener workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scrivener_error::{ConfigError, ScrivenerResult};
//!
//! fn load() -> ScrivenerResult<String> {
//!     Err(ConfigError::new("community must not be empty"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod models;
mod social;

pub use config::ConfigError;
pub use error::{ScrivenerError, ScrivenerErrorKind, ScrivenerResult};
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};
pub use social::{SocialError, SocialErrorKind, SocialResult};
