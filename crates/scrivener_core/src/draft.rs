//! Post drafts derived from generated text.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Longest title the platform accepts from this bot, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

const TITLE_PREFIX: &str = "Title: ";
const ELLIPSIS: &str = "...";

/// Whether a community expects question-style, title-only posts.
///
/// # Examples
///
/// ```
/// use scrivener_core::is_ask_community;
///
/// assert!(is_ask_community("AskReddit"));
/// assert!(is_ask_community("TooAfraidToASK"));
/// assert!(!is_ask_community("KeepWriting"));
/// ```
pub fn is_ask_community(community: &str) -> bool {
    community.to_lowercase().contains("ask")
}

/// Title and optional body ready for submission.
///
/// # Examples
///
/// ```
/// use scrivener_core::PostDraft;
///
/// let draft = PostDraft::from_generated(
///     "Title: Why do cats purr?\nBecause reasons.",
///     "AskReddit",
/// )
/// .unwrap();
///
/// assert_eq!(draft.title(), "Why do cats purr??");
/// assert!(draft.body().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct PostDraft {
    /// Post title, at most [`TITLE_MAX_CHARS`] characters
    title: String,
    /// Self-post body; absent for ask-style communities
    body: Option<String>,
}

impl PostDraft {
    /// Derive a draft for `community` from generated text.
    ///
    /// The title is the first line with any `Title: ` prefix removed, cut to
    /// fit [`TITLE_MAX_CHARS`]. Ask-style communities get a trailing `?` and
    /// no body; everywhere else the full text becomes the body.
    ///
    /// Returns `None` when no title is left after trimming.
    pub fn from_generated(text: &str, community: &str) -> Option<Self> {
        let ask = is_ask_community(community);
        let title = derive_title(text, ask);
        if title.is_empty() {
            return None;
        }

        let body = if ask { None } else { Some(text.to_string()) };
        Some(Self { title, body })
    }

    /// Build a draft directly.
    pub fn new(title: impl Into<String>, body: Option<String>) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }
}

fn derive_title(text: &str, ask: bool) -> String {
    let first_line = text.lines().next().unwrap_or_default().trim_start();
    let line = first_line
        .strip_prefix(TITLE_PREFIX)
        .unwrap_or(first_line)
        .trim();
    if line.is_empty() {
        return String::new();
    }

    // Reserve room for the question mark so the final title still fits.
    let limit = if ask {
        TITLE_MAX_CHARS - 1
    } else {
        TITLE_MAX_CHARS
    };

    let mut title = if line.chars().count() > limit {
        let keep = limit - ELLIPSIS.len();
        let mut cut: String = line.chars().take(keep).collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        line.to_string()
    };

    if ask {
        title.push('?');
    }
    title
}
