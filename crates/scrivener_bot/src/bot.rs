//! The bot: one generator, one platform, both jobs.

use crate::{
    BotSettings, CommentReport, Commenter, CommenterConfig, JobKind, JobRunner, PostOutcome,
    Poster,
};
use async_trait::async_trait;
use scrivener_models::{ContentGenerator, TextGenerator};
use scrivener_social::SocialPlatform;
use tracing::{info, instrument};

/// Bundles the injected clients with the Poster and Commenter.
pub struct Bot<D, P> {
    generator: ContentGenerator<D>,
    platform: P,
    poster: Poster,
    commenter: Commenter,
}

impl<D, P> Bot<D, P>
where
    D: TextGenerator,
    P: SocialPlatform,
{
    /// Build both jobs from `settings`.
    pub fn new(generator: ContentGenerator<D>, platform: P, settings: &BotSettings) -> Self {
        Self::with_jobs(
            generator,
            platform,
            Poster::new(settings.community().clone()),
            Commenter::new(CommenterConfig::from_settings(settings)),
        )
    }

    /// Use explicitly constructed jobs.
    pub fn with_jobs(
        generator: ContentGenerator<D>,
        platform: P,
        poster: Poster,
        commenter: Commenter,
    ) -> Self {
        Self {
            generator,
            platform,
            poster,
            commenter,
        }
    }

    /// The platform the bot acts on.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Run the Poster once.
    pub async fn post(&self) -> PostOutcome {
        self.poster.run(&self.generator, &self.platform).await
    }

    /// Run the Commenter once.
    pub async fn comment(&self) -> CommentReport {
        self.commenter.run(&self.generator, &self.platform).await
    }

    /// Run the Poster, then the Commenter, once each.
    #[instrument(skip_all, fields(platform = self.platform.platform_name()))]
    pub async fn run_once(&self) -> (PostOutcome, CommentReport) {
        info!("Running post job");
        let post = self.post().await;

        info!("Running comment job");
        let comments = self.comment().await;

        info!(
            posted = post.is_submitted(),
            replies = comments.replied_count(),
            "Run complete"
        );
        (post, comments)
    }
}

#[async_trait]
impl<D, P> JobRunner for Bot<D, P>
where
    D: TextGenerator,
    P: SocialPlatform,
{
    async fn run_job(&self, job: JobKind) {
        match job {
            JobKind::Post => {
                let outcome = self.post().await;
                info!(submitted = outcome.is_submitted(), "Post job done");
            }
            JobKind::Comment => {
                let report = self.comment().await;
                info!(replies = report.replied_count(), "Comment job done");
            }
        }
    }
}
