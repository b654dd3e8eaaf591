//! Bot settings.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `SCRIVENER_*` environment variables. Nested keys use a double underscore,
//! e.g. `SCRIVENER_COMMENTER__HOT_LIMIT=3`.
//!
//! # Example file
//!
//! ```toml
//! community = "KeepWriting"
//! user_agent = "scrivener/0.1 by u/ScrivenerBot"
//!
//! [schedule]
//! post_at = "09:00"
//! comment_at = "12:00"
//!
//! [commenter]
//! hot_limit = 5
//! reply_delay_secs = 30
//! ```

use crate::ScheduleType;
use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use scrivener_error::{ConfigError, ScrivenerResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Settings file read from the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "scrivener.toml";

/// Prefix of environment variables that override settings.
pub const ENV_PREFIX: &str = "SCRIVENER";

/// Largest number of hot posts one listing request may return.
pub const MAX_HOT_LIMIT: usize = 100;

/// Top-level bot settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BotSettings {
    /// Target community name, without the `r/` prefix
    #[serde(default = "default_community")]
    community: String,

    /// User-agent sent to the platform
    #[serde(default = "default_user_agent")]
    user_agent: String,

    /// Language model identifier
    #[serde(default = "default_model")]
    model: String,

    /// Base URL of the OpenAI-compatible completion API
    #[serde(default = "default_groq_base_url")]
    groq_base_url: String,

    /// Timeout applied to every outbound HTTP request
    #[serde(default = "default_http_timeout_secs")]
    http_timeout_secs: u64,

    /// Daily run times
    #[serde(default)]
    schedule: ScheduleSettings,

    /// Commenter limits and delays
    #[serde(default)]
    commenter: CommenterSettings,
}

/// When the two jobs run.
///
/// Each value is `"HH:MM"` local time or a 7-field cron expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ScheduleSettings {
    /// Poster schedule
    #[serde(default = "default_post_at")]
    post_at: String,

    /// Commenter schedule
    #[serde(default = "default_comment_at")]
    comment_at: String,
}

/// Commenter behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CommenterSettings {
    /// Trending posts processed per run
    #[serde(default = "default_hot_limit")]
    hot_limit: usize,

    /// Body characters included in the reply prompt
    #[serde(default = "default_excerpt_chars")]
    excerpt_chars: usize,

    /// Wait after each successful reply
    #[serde(default = "default_reply_delay_secs")]
    reply_delay_secs: u64,

    /// Wait after a rate-limit error
    #[serde(default = "default_rate_limit_backoff_secs")]
    rate_limit_backoff_secs: u64,
}

fn default_community() -> String {
    "KeepWriting".to_string()
}

fn default_user_agent() -> String {
    "testBot".to_string()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_groq_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_http_timeout_secs() -> u64 {
    60
}

fn default_post_at() -> String {
    "09:00".to_string()
}

fn default_comment_at() -> String {
    "12:00".to_string()
}

fn default_hot_limit() -> usize {
    5
}

fn default_excerpt_chars() -> usize {
    200
}

fn default_reply_delay_secs() -> u64 {
    30
}

fn default_rate_limit_backoff_secs() -> u64 {
    600
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            community: default_community(),
            user_agent: default_user_agent(),
            model: default_model(),
            groq_base_url: default_groq_base_url(),
            http_timeout_secs: default_http_timeout_secs(),
            schedule: ScheduleSettings::default(),
            commenter: CommenterSettings::default(),
        }
    }
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            post_at: default_post_at(),
            comment_at: default_comment_at(),
        }
    }
}

impl Default for CommenterSettings {
    fn default() -> Self {
        Self {
            hot_limit: default_hot_limit(),
            excerpt_chars: default_excerpt_chars(),
            reply_delay_secs: default_reply_delay_secs(),
            rate_limit_backoff_secs: default_rate_limit_backoff_secs(),
        }
    }
}

impl BotSettings {
    /// Load settings from `path` (or `scrivener.toml` if present) and the
    /// process environment, then validate them.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - An explicit `path` does not exist or is not valid TOML
    /// - A value has the wrong type
    /// - Validation fails (see [`BotSettings::validate`])
    pub fn load(path: Option<&Path>) -> ScrivenerResult<Self> {
        Self::load_from_sources(path, None)
    }

    /// Like [`BotSettings::load`], but reads overrides from `env` instead of
    /// the process environment when given.
    ///
    /// # Errors
    ///
    /// Same as [`BotSettings::load`].
    pub fn load_from_sources(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> ScrivenerResult<Self> {
        let file = match path {
            Some(path) => {
                info!(path = %path.display(), "Loading settings file");
                File::from(path).format(FileFormat::Toml).required(true)
            }
            None => {
                debug!(path = DEFAULT_SETTINGS_FILE, "Looking for default settings file");
                File::new(DEFAULT_SETTINGS_FILE, FileFormat::Toml).required(false)
            }
        };

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env.map(|vars| vars.into_iter().collect()));

        let settings: Self = Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to read settings: {e}")))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {e}")))?;

        settings.validate()?;
        debug!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The community or user agent is empty
    /// - A schedule does not parse, or both jobs share one schedule
    /// - The hot limit is outside `1..=100`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.community.trim().is_empty() {
            return Err(ConfigError::new("community must not be empty"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::new("user_agent must not be empty"));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::new("model must not be empty"));
        }

        let post = self.schedule.post_schedule()?;
        let comment = self.schedule.comment_schedule()?;
        if post == comment {
            return Err(ConfigError::new(format!(
                "post and comment jobs must not share a schedule ({post})"
            )));
        }

        let limit = self.commenter.hot_limit;
        if !(1..=MAX_HOT_LIMIT).contains(&limit) {
            return Err(ConfigError::new(format!(
                "commenter.hot_limit must be between 1 and {MAX_HOT_LIMIT}, got {limit}"
            )));
        }

        Ok(())
    }

    /// HTTP timeout as a duration.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Replace the target community.
    pub fn with_community(mut self, community: impl Into<String>) -> Self {
        self.community = community.into();
        self
    }
}

impl ScheduleSettings {
    /// Poster schedule.
    ///
    /// # Errors
    ///
    /// Returns error if `post_at` is neither `HH:MM` nor a cron expression.
    pub fn post_schedule(&self) -> Result<ScheduleType, ConfigError> {
        self.post_at.parse()
    }

    /// Commenter schedule.
    ///
    /// # Errors
    ///
    /// Returns error if `comment_at` is neither `HH:MM` nor a cron expression.
    pub fn comment_schedule(&self) -> Result<ScheduleType, ConfigError> {
        self.comment_at.parse()
    }
}

impl CommenterSettings {
    /// Wait after each successful reply.
    pub fn reply_delay(&self) -> Duration {
        Duration::from_secs(self.reply_delay_secs)
    }

    /// Wait after a rate-limit error.
    pub fn rate_limit_backoff(&self) -> Duration {
        Duration::from_secs(self.rate_limit_backoff_secs)
    }
}
