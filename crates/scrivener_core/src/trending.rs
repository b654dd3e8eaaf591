//! Read-only references to trending posts.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A post from a community's hot listing.
///
/// Owned by the platform; the bot only reads it and replies to it.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct TrendingPost {
    /// Platform id without type prefix (e.g. `1abcde`)
    id: String,
    /// Author username; `None` when the account was deleted
    #[builder(default)]
    author: Option<String>,
    /// Post title
    title: String,
    /// Self-post body, empty for link posts
    #[builder(default)]
    body: String,
}

impl TrendingPost {
    /// Create a post reference.
    pub fn new(
        id: impl Into<String>,
        author: Option<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Create a builder.
    pub fn builder() -> TrendingPostBuilder {
        TrendingPostBuilder::default()
    }

    /// Whether `username` wrote this post.
    ///
    /// Usernames compare case-insensitively, as the platform treats them.
    pub fn is_authored_by(&self, username: &str) -> bool {
        self.author
            .as_deref()
            .is_some_and(|author| author.eq_ignore_ascii_case(username))
    }

    /// Title followed by the first `excerpt_chars` characters of the body.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrivener_core::TrendingPost;
    ///
    /// let post = TrendingPost::builder()
    ///     .id("abc")
    ///     .title("Morning pages")
    ///     .body("I write three pages every day.")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(post.context(7), "Morning pages\nI write");
    /// ```
    pub fn context(&self, excerpt_chars: usize) -> String {
        let excerpt: String = self.body.chars().take(excerpt_chars).collect();
        format!("{}\n{}", self.title, excerpt)
    }
}
