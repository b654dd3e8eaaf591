//! Wiring settings and clients into the bot.

use super::{Cli, Commands};
use scrivener_bot::{Bot, BotSettings, Credentials, TimerLoop};
use scrivener_error::ScrivenerResult;
use scrivener_models::{ContentGenerator, GroqDriver, TextGenerator};
use scrivener_social::reddit::{REDDIT_API_URL, REDDIT_AUTH_URL};
use scrivener_social::{DryRunPlatform, RedditClient, SocialPlatform};
use tracing::{info, warn};

/// Load settings and credentials, build the clients, and run the command.
///
/// # Errors
///
/// Returns error only for startup failures: invalid settings, missing
/// credentials, or clients that cannot be constructed. Job failures are
/// logged and never returned.
pub async fn run(cli: Cli) -> ScrivenerResult<()> {
    let settings = BotSettings::load(cli.config.as_deref())?;
    let credentials = Credentials::from_env()?;

    info!(
        community = %settings.community(),
        model = %settings.model(),
        username = %credentials.reddit.username,
        dry_run = cli.dry_run,
        "Starting Scrivener"
    );

    let driver = GroqDriver::with_base_url(
        credentials.groq_api_key.clone(),
        settings.model().clone(),
        settings.groq_base_url(),
    )?
    .with_timeout(settings.http_timeout())?;
    let generator = ContentGenerator::new(driver);

    let reddit = RedditClient::with_options(
        credentials.reddit.clone(),
        settings.user_agent(),
        REDDIT_AUTH_URL,
        REDDIT_API_URL,
        Some(settings.http_timeout()),
    )?;

    if cli.dry_run {
        warn!("Dry run: posts and replies will be logged, not submitted");
        let platform = DryRunPlatform::new(reddit);
        execute(cli.selected_command(), &settings, generator, platform).await
    } else {
        execute(cli.selected_command(), &settings, generator, reddit).await
    }
}

async fn execute<D, P>(
    command: Commands,
    settings: &BotSettings,
    generator: ContentGenerator<D>,
    platform: P,
) -> ScrivenerResult<()>
where
    D: TextGenerator,
    P: SocialPlatform,
{
    let bot = Bot::new(generator, platform, settings);

    match command {
        Commands::Once => {
            bot.run_once().await;
        }
        Commands::Schedule => {
            let mut timer = TimerLoop::from_settings(settings)?;
            timer.run_until(&bot, shutdown_signal()).await;
        }
    }

    info!("Scrivener finished");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            warn!(error = %e, "Could not listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
