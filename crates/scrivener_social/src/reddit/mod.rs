//! Reddit OAuth API client.
//!
//! Uses the "script" app flow: an OAuth2 password grant against
//! `www.reddit.com`, then bearer-authenticated calls to `oauth.reddit.com`.

mod client;
mod credentials;
mod json_models;

pub use client::{REDDIT_API_URL, REDDIT_AUTH_URL, RedditClient};
pub use credentials::RedditCredentials;
