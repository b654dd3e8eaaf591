//! Message types for chat requests.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a chat request.
///
/// # Examples
///
/// ```
/// use scrivener_core::{Message, Role};
///
/// let message = Message::user("Write something about mornings.");
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// Message text
    pub content: String,
}

impl Message {
    /// Create a message with the given role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}
