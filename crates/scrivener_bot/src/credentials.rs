//! Secrets read from the environment.

use scrivener_error::{ConfigError, ScrivenerResult};
use scrivener_social::RedditCredentials;

/// Reddit OAuth client id.
pub const REDDIT_CLIENT_ID: &str = "REDDIT_CLIENT_ID";
/// Reddit OAuth client secret.
pub const REDDIT_CLIENT_SECRET: &str = "REDDIT_CLIENT_SECRET";
/// Reddit account username.
pub const REDDIT_USERNAME: &str = "REDDIT_USERNAME";
/// Reddit account password.
pub const REDDIT_PASSWORD: &str = "REDDIT_PASSWORD";
/// Groq API key.
pub const GROQ_API_KEY: &str = "GROQ_API_KEY";

/// Every secret the bot needs to start.
#[derive(Clone)]
pub struct Credentials {
    /// Reddit script-app credentials
    pub reddit: RedditCredentials,
    /// Groq API key
    pub groq_api_key: String,
}

impl Credentials {
    /// Read all secrets from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming every missing or empty variable.
    pub fn from_env() -> ScrivenerResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read all secrets through `lookup`.
    ///
    /// Empty values count as missing.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming every missing or empty variable.
    pub fn from_lookup<F>(lookup: F) -> ScrivenerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| match lookup(name) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let client_id = read(REDDIT_CLIENT_ID);
        let client_secret = read(REDDIT_CLIENT_SECRET);
        let username = read(REDDIT_USERNAME);
        let password = read(REDDIT_PASSWORD);
        let groq_api_key = read(GROQ_API_KEY);

        if !missing.is_empty() {
            return Err(ConfigError::new(format!(
                "Missing environment variables: {}",
                missing.join(", ")
            ))
            .into());
        }

        Ok(Self {
            reddit: RedditCredentials::new(client_id, client_secret, username, password),
            groq_api_key,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("reddit", &self.reddit)
            .field("groq_api_key", &"<redacted>")
            .finish()
    }
}
