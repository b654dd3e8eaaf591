//! Reddit client implementing [`SocialPlatform`].

use super::json_models::{
    ApiErrorEntry, CommentData, JsonEnvelope, Listing, SubmitData, TokenResponse,
};
use super::RedditCredentials;
use crate::{CommentId, PostId, SocialPlatform};
use async_trait::async_trait;
use scrivener_core::{PostDraft, TrendingPost};
use scrivener_error::{SocialError, SocialErrorKind, SocialResult};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, instrument};

/// Token endpoint for the password grant.
pub const REDDIT_AUTH_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Root for authenticated API calls.
pub const REDDIT_API_URL: &str = "https://oauth.reddit.com";

/// Refresh tokens this long before Reddit says they expire.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Upper bound on how long a token is cached, whatever Reddit reports.
const MAX_TOKEN_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: Instant,
}

impl AccessToken {
    fn is_fresh(&self) -> bool {
        Instant::now() + TOKEN_EXPIRY_MARGIN < self.expires_at
    }
}

/// Authenticated session for one Reddit account.
///
/// The bearer token is fetched lazily on first use and refreshed when it
/// nears expiry.
#[derive(Debug)]
pub struct RedditClient {
    http: reqwest::Client,
    credentials: RedditCredentials,
    auth_url: String,
    api_url: String,
    token: RwLock<Option<AccessToken>>,
}

impl RedditClient {
    /// Create a client against the public Reddit endpoints.
    ///
    /// # Errors
    ///
    /// Returns error if the user agent is empty or the HTTP client cannot be
    /// built.
    pub fn new(credentials: RedditCredentials, user_agent: &str) -> SocialResult<Self> {
        Self::with_options(
            credentials,
            user_agent,
            REDDIT_AUTH_URL,
            REDDIT_API_URL,
            None,
        )
    }

    /// Create a client with explicit endpoints and request timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the user agent is empty or the HTTP client cannot be
    /// built.
    #[instrument(skip(credentials), fields(username = %credentials.username))]
    pub fn with_options(
        credentials: RedditCredentials,
        user_agent: &str,
        auth_url: &str,
        api_url: &str,
        timeout: Option<Duration>,
    ) -> SocialResult<Self> {
        if user_agent.trim().is_empty() {
            return Err(SocialError::new(SocialErrorKind::Validation(
                "user agent must not be empty".to_string(),
            )));
        }

        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| SocialError::new(SocialErrorKind::Http(e.to_string())))?;

        debug!("Created Reddit client");
        Ok(Self {
            http,
            credentials,
            auth_url: auth_url.to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    /// Current bearer token, requesting a new one if needed.
    async fn access_token(&self) -> SocialResult<String> {
        {
            let guard = self.token.read().await;
            if let Some(token) = guard.as_ref().filter(|t| t.is_fresh()) {
                return Ok(token.value.clone());
            }
        }

        let token = self.request_token().await?;
        let value = token.value.clone();
        *self.token.write().await = Some(token);
        Ok(value)
    }

    #[instrument(skip(self), fields(username = %self.credentials.username))]
    async fn request_token(&self) -> SocialResult<AccessToken> {
        debug!("Requesting Reddit access token");

        let response = self
            .http
            .post(&self.auth_url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[
                ("grant_type", "password"),
                ("username", self.credentials.username.as_str()),
                ("password", self.credentials.password.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SocialError::new(SocialErrorKind::Http(e.to_string())))?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(SocialError::new(SocialErrorKind::Authentication(format!(
                "token endpoint returned {}",
                status
            ))));
        }
        let response = check_status(response).await?;

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| SocialError::new(SocialErrorKind::ResponseParsing(e.to_string())))?;

        if let Some(error) = body.error {
            return Err(SocialError::new(SocialErrorKind::Authentication(error)));
        }
        let value = body.access_token.ok_or_else(|| {
            SocialError::new(SocialErrorKind::Authentication(
                "token response carried no access_token".to_string(),
            ))
        })?;

        let lifetime =
            Duration::from_secs(body.expires_in.unwrap_or(3600)).min(MAX_TOKEN_LIFETIME);
        debug!(expires_in_secs = lifetime.as_secs(), "Obtained Reddit access token");
        Ok(AccessToken {
            value,
            expires_at: Instant::now() + lifetime,
        })
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> SocialResult<T> {
        let token = self.access_token().await?;
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .form(form)
            .send()
            .await
            .map_err(|e| SocialError::new(SocialErrorKind::Http(e.to_string())))?;

        let envelope: JsonEnvelope<T> = check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| SocialError::new(SocialErrorKind::ResponseParsing(e.to_string())))?;

        if let Some(error) = classify_api_errors(&envelope.json.errors) {
            return Err(error);
        }

        envelope.json.data.ok_or_else(|| {
            SocialError::new(SocialErrorKind::ResponseParsing(format!(
                "{} response carried no data",
                path
            )))
        })
    }
}

#[async_trait]
impl SocialPlatform for RedditClient {
    #[instrument(skip(self, draft), fields(title = %draft.title(), has_body = draft.body().is_some()))]
    async fn submit_post(&self, community: &str, draft: &PostDraft) -> SocialResult<PostId> {
        if community.is_empty() {
            return Err(SocialError::new(SocialErrorKind::Validation(
                "community must not be empty".to_string(),
            )));
        }

        let mut form = vec![
            ("api_type", "json"),
            ("kind", "self"),
            ("sr", community),
            ("title", draft.title().as_str()),
        ];
        if let Some(body) = draft.body() {
            form.push(("text", body.as_str()));
        }

        let data: SubmitData = self.post_form("/api/submit", &form).await?;
        let id = data.id.or(data.name).unwrap_or_default();
        debug!(post_id = %id, "Submitted post");
        Ok(PostId(id))
    }

    #[instrument(skip(self))]
    async fn hot_posts(&self, community: &str, limit: usize) -> SocialResult<Vec<TrendingPost>> {
        let token = self.access_token().await?;
        let url = format!("{}/r/{}/hot", self.api_url, community);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(&[("limit", limit.to_string()), ("raw_json", "1".to_string())])
            .send()
            .await
            .map_err(|e| SocialError::new(SocialErrorKind::Http(e.to_string())))?;

        let listing: Listing = check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| SocialError::new(SocialErrorKind::ResponseParsing(e.to_string())))?;

        let posts: Vec<TrendingPost> = listing
            .data
            .children
            .into_iter()
            .filter(|thing| thing.kind == "t3")
            .take(limit)
            .map(|thing| {
                TrendingPost::new(
                    thing.data.id,
                    thing.data.author,
                    thing.data.title,
                    thing.data.selftext,
                )
            })
            .collect();

        debug!(count = posts.len(), "Fetched hot posts");
        Ok(posts)
    }

    #[instrument(skip(self, post, text), fields(post_id = %post.id()))]
    async fn reply(&self, post: &TrendingPost, text: &str) -> SocialResult<CommentId> {
        if text.trim().is_empty() {
            return Err(SocialError::new(SocialErrorKind::Validation(
                "reply text must not be empty".to_string(),
            )));
        }

        let thing_id = format!("t3_{}", post.id());
        let form = [
            ("api_type", "json"),
            ("thing_id", thing_id.as_str()),
            ("text", text),
        ];

        let data: CommentData = self.post_form("/api/comment", &form).await?;
        let id = data
            .things
            .into_iter()
            .next()
            .and_then(|thing| thing.data.id.or(thing.data.name))
            .unwrap_or_default();
        debug!(comment_id = %id, "Submitted reply");
        Ok(CommentId(id))
    }

    fn username(&self) -> &str {
        &self.credentials.username
    }

    fn platform_name(&self) -> &str {
        "reddit"
    }
}

/// Map non-success statuses to errors, passing successful responses through.
async fn check_status(response: reqwest::Response) -> SocialResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    let kind = if status.as_u16() == 429 {
        SocialErrorKind::RateLimit(message)
    } else {
        SocialErrorKind::Api {
            status: status.as_u16(),
            message,
        }
    };
    Err(SocialError::new(kind))
}

/// Turn an `api_type=json` error list into a single error, if any.
fn classify_api_errors(raw: &[Vec<serde_json::Value>]) -> Option<SocialError> {
    let entries: Vec<ApiErrorEntry> = raw.iter().map(|e| ApiErrorEntry::from_raw(e)).collect();

    if let Some(limit) = entries.iter().find(|e| e.code == "RATELIMIT") {
        return Some(SocialError::new(SocialErrorKind::RateLimit(
            limit.message.clone(),
        )));
    }

    if entries.is_empty() {
        return None;
    }

    let summary = entries
        .iter()
        .map(|e| format!("{}: {}", e.code, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    Some(SocialError::new(SocialErrorKind::Rejected(summary)))
}
