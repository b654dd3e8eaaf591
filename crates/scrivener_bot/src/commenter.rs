//! Replies to trending posts.

use crate::prompts::comment_prompt;
use crate::{BotSettings, CommentReport, PostReply, ReplyOutcome};
use derive_getters::Getters;
use scrivener_core::TrendingPost;
use scrivener_models::{ContentGenerator, TextGenerator};
use scrivener_social::SocialPlatform;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Limits and delays for one Commenter.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct CommenterConfig {
    /// Target community
    community: String,
    /// Trending posts processed per run
    hot_limit: usize,
    /// Body characters included in the reply prompt
    excerpt_chars: usize,
    /// Wait after each successful reply
    reply_delay: Duration,
    /// Wait after a rate-limit error
    rate_limit_backoff: Duration,
}

impl CommenterConfig {
    /// Defaults for `community`: 5 posts, 200-char excerpts, 30 s between
    /// replies, 600 s after a rate limit.
    pub fn new(community: impl Into<String>) -> Self {
        Self {
            community: community.into(),
            hot_limit: 5,
            excerpt_chars: 200,
            reply_delay: Duration::from_secs(30),
            rate_limit_backoff: Duration::from_secs(600),
        }
    }

    /// Take every value from loaded settings.
    pub fn from_settings(settings: &BotSettings) -> Self {
        let commenter = settings.commenter();
        Self {
            community: settings.community().clone(),
            hot_limit: *commenter.hot_limit(),
            excerpt_chars: *commenter.excerpt_chars(),
            reply_delay: commenter.reply_delay(),
            rate_limit_backoff: commenter.rate_limit_backoff(),
        }
    }

    /// Set the number of posts processed per run.
    pub fn with_hot_limit(mut self, hot_limit: usize) -> Self {
        self.hot_limit = hot_limit;
        self
    }

    /// Set the wait after each successful reply.
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    /// Set the wait after a rate-limit error.
    pub fn with_rate_limit_backoff(mut self, backoff: Duration) -> Self {
        self.rate_limit_backoff = backoff;
        self
    }
}

/// Replies to the community's hot posts, one at a time.
#[derive(Debug, Clone)]
pub struct Commenter {
    config: CommenterConfig,
}

impl Commenter {
    /// Create a commenter.
    pub fn new(config: CommenterConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &CommenterConfig {
        &self.config
    }

    /// Fetch hot posts and reply to each one that is not the bot's own.
    ///
    /// Failures on one post never stop the run; only a failed fetch does.
    #[instrument(
        skip_all,
        fields(community = %self.config.community, limit = self.config.hot_limit)
    )]
    pub async fn run<D, P>(&self, generator: &ContentGenerator<D>, platform: &P) -> CommentReport
    where
        D: TextGenerator,
        P: SocialPlatform,
    {
        let posts = match platform
            .hot_posts(&self.config.community, self.config.hot_limit)
            .await
        {
            Ok(posts) => posts,
            Err(e) => {
                error!(error = %e, "Error fetching trending posts");
                return CommentReport::FetchFailed(e);
            }
        };

        info!(count = posts.len(), "Fetched trending posts");

        let mut replies = Vec::with_capacity(posts.len().min(self.config.hot_limit));
        for post in posts.iter().take(self.config.hot_limit) {
            let outcome = self.reply_to(post, generator, platform).await;
            replies.push(PostReply::new(post.id().clone(), outcome));
        }

        CommentReport::Completed(replies)
    }

    #[instrument(skip_all, fields(post_id = %post.id()))]
    async fn reply_to<D, P>(
        &self,
        post: &TrendingPost,
        generator: &ContentGenerator<D>,
        platform: &P,
    ) -> ReplyOutcome
    where
        D: TextGenerator,
        P: SocialPlatform,
    {
        if post.is_authored_by(platform.username()) {
            debug!("Skipping own post");
            return ReplyOutcome::SkippedOwnPost;
        }

        let context = post.context(self.config.excerpt_chars);
        let Some(text) = generator.generate(&comment_prompt(&context)).await else {
            error!("Content generation failed, skipping post");
            return ReplyOutcome::GenerationFailed;
        };

        match platform.reply(post, &text).await {
            Ok(id) => {
                info!(
                    comment_id = %id,
                    title = %post.title(),
                    delay_secs = self.config.reply_delay.as_secs(),
                    "Commented on post"
                );
                tokio::time::sleep(self.config.reply_delay).await;
                ReplyOutcome::Replied(id)
            }
            Err(e) if e.is_rate_limit() => {
                warn!(
                    error = %e,
                    delay_secs = self.config.rate_limit_backoff.as_secs(),
                    "Rate limit encountered, waiting before the next post"
                );
                tokio::time::sleep(self.config.rate_limit_backoff).await;
                ReplyOutcome::RateLimited(e)
            }
            Err(e) => {
                error!(error = %e, "Error replying to post");
                ReplyOutcome::Failed(e)
            }
        }
    }
}
