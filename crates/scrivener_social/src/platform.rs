//! Social platform trait and identifiers.

use async_trait::async_trait;
use scrivener_core::{PostDraft, TrendingPost};
use scrivener_error::SocialResult;
use serde::{Deserialize, Serialize};

/// Platform-specific post identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", _0)]
pub struct PostId(pub String);

/// Platform-specific comment identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", _0)]
pub struct CommentId(pub String);

/// Operations the bot performs against a discussion platform.
#[async_trait]
pub trait SocialPlatform: Send + Sync {
    /// Submit a new post to `community`.
    ///
    /// A draft without a body is submitted as a title-only self post.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Authentication fails
    /// - Rate limit exceeded (see `SocialError::is_rate_limit`)
    /// - The platform rejects the submission
    async fn submit_post(&self, community: &str, draft: &PostDraft) -> SocialResult<PostId>;

    /// List up to `limit` currently-hot posts in `community`, in platform order.
    ///
    /// # Errors
    ///
    /// Returns error if the community cannot be read.
    async fn hot_posts(&self, community: &str, limit: usize) -> SocialResult<Vec<TrendingPost>>;

    /// Reply to `post` with `text`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Authentication fails
    /// - Rate limit exceeded (see `SocialError::is_rate_limit`)
    /// - The post is locked, archived or deleted
    async fn reply(&self, post: &TrendingPost, text: &str) -> SocialResult<CommentId>;

    /// Account the platform session acts as.
    fn username(&self) -> &str;

    /// Platform name for logs (e.g., "reddit").
    fn platform_name(&self) -> &str;
}
