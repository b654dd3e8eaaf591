//! One-shot post creation.

use crate::PostOutcome;
use crate::prompts::post_prompt;
use scrivener_core::PostDraft;
use scrivener_models::{ContentGenerator, TextGenerator};
use scrivener_social::SocialPlatform;
use tracing::{error, info, instrument, warn};

/// Generates one post and submits it to the target community.
#[derive(Debug, Clone)]
pub struct Poster {
    community: String,
}

impl Poster {
    /// Create a poster for `community`.
    pub fn new(community: impl Into<String>) -> Self {
        Self {
            community: community.into(),
        }
    }

    /// Target community.
    pub fn community(&self) -> &str {
        &self.community
    }

    /// Generate, derive a draft, and submit it.
    ///
    /// Never fails: every problem is logged and reported as a [`PostOutcome`].
    #[instrument(skip_all, fields(community = %self.community, platform = platform.platform_name()))]
    pub async fn run<D, P>(&self, generator: &ContentGenerator<D>, platform: &P) -> PostOutcome
    where
        D: TextGenerator,
        P: SocialPlatform,
    {
        let Some(content) = generator.generate(&post_prompt(&self.community)).await else {
            error!("Content generation failed, skipping post");
            return PostOutcome::GenerationFailed;
        };

        let Some(draft) = PostDraft::from_generated(&content, &self.community) else {
            warn!("Generated content has no usable title, skipping post");
            return PostOutcome::InvalidDraft;
        };

        match platform.submit_post(&self.community, &draft).await {
            Ok(id) => {
                info!(
                    post_id = %id,
                    title = %draft.title(),
                    has_body = draft.body().is_some(),
                    "Post submitted"
                );
                PostOutcome::Submitted {
                    id,
                    title: draft.title().clone(),
                }
            }
            Err(e) if e.is_rate_limit() => {
                warn!(error = %e, "Rate limited while submitting post");
                PostOutcome::SubmissionFailed(e)
            }
            Err(e) => {
                error!(error = %e, "Error posting to community");
                PostOutcome::SubmissionFailed(e)
            }
        }
    }
}
