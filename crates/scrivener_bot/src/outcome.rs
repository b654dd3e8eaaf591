//! Job outcomes.

use derive_getters::Getters;
use scrivener_error::SocialError;
use scrivener_social::{CommentId, PostId};

/// Result of one Poster run.
#[derive(Debug, Clone)]
pub enum PostOutcome {
    /// Post created on the platform
    Submitted {
        /// Platform post id
        id: PostId,
        /// Title that was submitted
        title: String,
    },
    /// The language model produced nothing usable; nothing was submitted
    GenerationFailed,
    /// Generated text yielded no title; nothing was submitted
    InvalidDraft,
    /// The platform refused or failed the submission
    SubmissionFailed(SocialError),
}

impl PostOutcome {
    /// Whether a post was created.
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }
}

/// What happened to a single trending post.
#[derive(Debug, Clone)]
pub enum ReplyOutcome {
    /// Reply created
    Replied(CommentId),
    /// Post was written by the bot's own account
    SkippedOwnPost,
    /// The language model produced nothing usable
    GenerationFailed,
    /// Platform rate limit hit; the reply was dropped after backing off
    RateLimited(SocialError),
    /// Any other platform failure
    Failed(SocialError),
}

/// A trending post paired with what the Commenter did with it.
#[derive(Debug, Clone, Getters)]
pub struct PostReply {
    /// Trending post id
    post_id: String,
    /// Outcome for that post
    outcome: ReplyOutcome,
}

impl PostReply {
    /// Pair a post id with its outcome.
    pub fn new(post_id: impl Into<String>, outcome: ReplyOutcome) -> Self {
        Self {
            post_id: post_id.into(),
            outcome,
        }
    }
}

/// Result of one Commenter run.
#[derive(Debug, Clone)]
pub enum CommentReport {
    /// Trending posts were fetched and each was processed
    Completed(Vec<PostReply>),
    /// Trending posts could not be fetched; nothing was attempted
    FetchFailed(SocialError),
}

impl CommentReport {
    /// Per-post outcomes; empty when the fetch failed.
    pub fn replies(&self) -> &[PostReply] {
        match self {
            Self::Completed(replies) => replies,
            Self::FetchFailed(_) => &[],
        }
    }

    /// Number of replies actually created.
    pub fn replied_count(&self) -> usize {
        self.replies()
            .iter()
            .filter(|r| matches!(r.outcome(), ReplyOutcome::Replied(_)))
            .count()
    }
}
