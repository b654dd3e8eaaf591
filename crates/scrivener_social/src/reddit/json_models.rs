//! Wire types for the subset of the Reddit API the bot uses.

use serde::Deserialize;

/// `POST /api/v1/access_token` response.
///
/// Reddit answers bad credentials with `200 {"error": "invalid_grant"}`, so
/// every field is optional.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Generic listing wrapper (`{"kind": "Listing", "data": {...}}`).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ListingData {
    #[serde(default)]
    pub children: Vec<Thing>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Thing {
    pub kind: String,
    pub data: LinkData,
}

/// Fields of a `t3` (link/self post) thing.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LinkData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub selftext: String,
}

/// `api_type=json` envelope used by write endpoints.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct JsonEnvelope<T> {
    pub json: JsonBody<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct JsonBody<T> {
    /// Entries shaped `[code, message, field]`
    #[serde(default)]
    pub errors: Vec<Vec<serde_json::Value>>,
    pub data: Option<T>,
}

/// `POST /api/submit` data.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SubmitData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// `POST /api/comment` data.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CommentData {
    #[serde(default)]
    pub things: Vec<CommentThing>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CommentThing {
    pub data: CommentThingData,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CommentThingData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One `[code, message, field]` error entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiErrorEntry {
    pub code: String,
    pub message: String,
}

impl ApiErrorEntry {
    pub fn from_raw(raw: &[serde_json::Value]) -> Self {
        let text = |i: usize| {
            raw.get(i)
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            code: text(0),
            message: text(1),
        }
    }
}
