//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Author of a chat message.
///
/// Serializes to the lowercase names used by OpenAI-compatible APIs.
///
/// # Examples
///
/// ```
/// use scrivener_core::Role;
///
/// assert_eq!(format!("{}", Role::User), "user");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System messages provide context and instructions
    #[display("system")]
    System,
    /// User messages carry the prompt
    #[display("user")]
    User,
    /// Assistant messages are from the model
    #[display("assistant")]
    Assistant,
}
