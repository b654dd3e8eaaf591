//! Test utilities for scrivener_bot tests.
//!
//! In-memory generator and platform that record every call.

#![allow(dead_code)]

use async_trait::async_trait;
use scrivener_core::{GenerateRequest, GenerateResponse, PostDraft, TrendingPost};
use scrivener_error::{
    ModelsError, ModelsErrorKind, ModelsResult, SocialError, SocialErrorKind, SocialResult,
};
use scrivener_models::{ContentGenerator, TextGenerator};
use scrivener_social::{CommentId, PostId, SocialPlatform};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tokio::time::Instant;

/// Username the mock platform acts as.
pub const BOT_USERNAME: &str = "ScrivenerBot";

/// Generator that replays queued completions; `None` entries fail.
///
/// Once the queue is empty every call returns `"Generated reply"`.
#[derive(Default)]
pub struct ScriptedGenerator {
    script: Mutex<VecDeque<Option<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(script: Vec<Option<&str>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().map(|s| s.map(String::from)).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn always_failing() -> Self {
        Self::new(vec![None; 16])
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, req: &GenerateRequest) -> ModelsResult<GenerateResponse> {
        let prompt = req
            .messages()
            .first()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        self.prompts.lock().unwrap().push(prompt);

        match self.script.lock().unwrap().pop_front() {
            Some(Some(text)) => Ok(GenerateResponse::new(text, "scripted")),
            Some(None) => Err(ModelsError::new(ModelsErrorKind::Http(
                "connection reset".into(),
            ))),
            None => Ok(GenerateResponse::new("Generated reply", "scripted")),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-1"
    }
}

/// Wrap a scripted generator the way the bot uses it.
pub fn generator(script: Vec<Option<&str>>) -> ContentGenerator<ScriptedGenerator> {
    ContentGenerator::new(ScriptedGenerator::new(script))
}

/// A reply the platform received.
#[derive(Debug, Clone)]
pub struct RecordedReply {
    pub post_id: String,
    pub text: String,
    pub at: Instant,
}

/// Platform that serves a fixed hot listing and records writes.
#[derive(Default)]
pub struct RecordingPlatform {
    hot: Vec<TrendingPost>,
    fail_listing: bool,
    fail_submit: Option<SocialErrorKind>,
    reply_errors: HashMap<String, SocialErrorKind>,
    pub requested_limit: Mutex<Option<usize>>,
    pub submissions: Mutex<Vec<(String, PostDraft)>>,
    pub replies: Mutex<Vec<RecordedReply>>,
    pub reply_attempts: Mutex<Vec<String>>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hot(mut self, posts: Vec<TrendingPost>) -> Self {
        self.hot = posts;
        self
    }

    pub fn with_failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    pub fn with_failing_submit(mut self, kind: SocialErrorKind) -> Self {
        self.fail_submit = Some(kind);
        self
    }

    pub fn with_reply_error(mut self, post_id: &str, kind: SocialErrorKind) -> Self {
        self.reply_errors.insert(post_id.to_string(), kind);
        self
    }

    pub fn submissions(&self) -> Vec<(String, PostDraft)> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn replies(&self) -> Vec<RecordedReply> {
        self.replies.lock().unwrap().clone()
    }

    pub fn reply_attempts(&self) -> Vec<String> {
        self.reply_attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SocialPlatform for RecordingPlatform {
    async fn submit_post(&self, community: &str, draft: &PostDraft) -> SocialResult<PostId> {
        if let Some(kind) = &self.fail_submit {
            return Err(SocialError::new(kind.clone()));
        }
        let mut submissions = self.submissions.lock().unwrap();
        submissions.push((community.to_string(), draft.clone()));
        Ok(PostId(format!("new{}", submissions.len())))
    }

    async fn hot_posts(&self, _community: &str, limit: usize) -> SocialResult<Vec<TrendingPost>> {
        *self.requested_limit.lock().unwrap() = Some(limit);
        if self.fail_listing {
            return Err(SocialError::new(SocialErrorKind::Api {
                status: 404,
                message: "community not found".into(),
            }));
        }
        // Ignore the limit so callers must enforce it themselves.
        Ok(self.hot.clone())
    }

    async fn reply(&self, post: &TrendingPost, text: &str) -> SocialResult<CommentId> {
        self.reply_attempts.lock().unwrap().push(post.id().clone());
        if let Some(kind) = self.reply_errors.get(post.id()) {
            return Err(SocialError::new(kind.clone()));
        }
        self.replies.lock().unwrap().push(RecordedReply {
            post_id: post.id().clone(),
            text: text.to_string(),
            at: Instant::now(),
        });
        Ok(CommentId(format!("c_{}", post.id())))
    }

    fn username(&self) -> &str {
        BOT_USERNAME
    }

    fn platform_name(&self) -> &str {
        "recording"
    }
}

/// Hot post by someone other than the bot.
pub fn hot_post(id: &str) -> TrendingPost {
    TrendingPost::new(id, Some("someone".into()), format!("Title {id}"), "Body text")
}
