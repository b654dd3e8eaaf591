//! Social platform clients for Scrivener.
//!
//! The bot only needs three platform operations: submit a self post, list a
//! community's hot posts, and reply to one of them. [`SocialPlatform`] names
//! those operations; [`RedditClient`] implements them against Reddit's OAuth
//! API and [`DryRunPlatform`] wraps any platform to log writes instead of
//! sending them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dry_run;
mod platform;
pub mod reddit;

pub use dry_run::DryRunPlatform;
pub use platform::{CommentId, PostId, SocialPlatform};
pub use reddit::{RedditClient, RedditCredentials};
