//! Platform wrapper that reads for real and only pretends to write.

use crate::{CommentId, PostId, SocialPlatform};
use async_trait::async_trait;
use scrivener_core::{PostDraft, TrendingPost};
use scrivener_error::SocialResult;
use tracing::info;

/// Delegates reads to `P` and logs writes without sending them.
///
/// Lets an operator see exactly what the bot would post against live
/// trending data.
#[derive(Debug, Clone)]
pub struct DryRunPlatform<P> {
    inner: P,
}

impl<P> DryRunPlatform<P> {
    /// Wrap a platform.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// The wrapped platform.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: SocialPlatform> SocialPlatform for DryRunPlatform<P> {
    async fn submit_post(&self, community: &str, draft: &PostDraft) -> SocialResult<PostId> {
        info!(
            community,
            title = %draft.title(),
            body_chars = draft.body().as_ref().map_or(0, |b| b.chars().count()),
            "Dry run: post not submitted"
        );
        Ok(PostId("dry-run".to_string()))
    }

    async fn hot_posts(&self, community: &str, limit: usize) -> SocialResult<Vec<TrendingPost>> {
        self.inner.hot_posts(community, limit).await
    }

    async fn reply(&self, post: &TrendingPost, text: &str) -> SocialResult<CommentId> {
        info!(
            post_id = %post.id(),
            post_title = %post.title(),
            reply = text,
            "Dry run: reply not submitted"
        );
        Ok(CommentId("dry-run".to_string()))
    }

    fn username(&self) -> &str {
        self.inner.username()
    }

    fn platform_name(&self) -> &str {
        "dry-run"
    }
}
