//! Core data types for the Scrivener bot.
//!
//! These are the transient values that flow between the content generator and
//! the social platform: chat requests and responses, post drafts derived from
//! generated text, and read-only references to trending posts.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod draft;
mod message;
mod request;
mod role;
mod trending;

pub use draft::{PostDraft, TITLE_MAX_CHARS, is_ask_community};
pub use message::Message;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use trending::{TrendingPost, TrendingPostBuilder};
