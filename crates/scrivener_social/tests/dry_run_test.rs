//! DryRunPlatform delegates reads and swallows writes.

use async_trait::async_trait;
use scrivener_core::{PostDraft, TrendingPost};
use scrivener_error::SocialResult;
use scrivener_social::{CommentId, DryRunPlatform, PostId, SocialPlatform};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct CountingPlatform {
    writes: AtomicUsize,
    reads: AtomicUsize,
}

#[async_trait]
impl SocialPlatform for CountingPlatform {
    async fn submit_post(&self, _community: &str, _draft: &PostDraft) -> SocialResult<PostId> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(PostId("real".into()))
    }

    async fn hot_posts(&self, _community: &str, limit: usize) -> SocialResult<Vec<TrendingPost>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok((0..limit)
            .map(|i| TrendingPost::new(format!("p{i}"), None, "t", "b"))
            .collect())
    }

    async fn reply(&self, _post: &TrendingPost, _text: &str) -> SocialResult<CommentId> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(CommentId("real".into()))
    }

    fn username(&self) -> &str {
        "ScrivenerBot"
    }

    fn platform_name(&self) -> &str {
        "counting"
    }
}

#[tokio::test]
async fn test_writes_are_not_forwarded() {
    let platform = DryRunPlatform::new(CountingPlatform::default());

    let id = platform
        .submit_post("KeepWriting", &PostDraft::new("t", None))
        .await
        .expect("Dry post");
    assert_eq!(id.0, "dry-run");

    let post = TrendingPost::new("p1", None, "t", "b");
    let id = platform.reply(&post, "hi").await.expect("Dry reply");
    assert_eq!(id.0, "dry-run");

    assert_eq!(platform.inner().writes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_reads_are_forwarded() {
    let platform = DryRunPlatform::new(CountingPlatform::default());

    let posts = platform.hot_posts("KeepWriting", 3).await.expect("Listing");
    assert_eq!(posts.len(), 3);
    assert_eq!(platform.inner().reads.load(Ordering::SeqCst), 1);
    assert_eq!(platform.username(), "ScrivenerBot");
    assert_eq!(platform.platform_name(), "dry-run");
}
