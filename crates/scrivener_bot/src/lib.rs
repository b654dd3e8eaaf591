//! Posting and commenting jobs for Scrivener.
//!
//! - **Poster**: generates one post and submits it to the target community
//! - **Commenter**: replies to the community's hot posts with a fixed delay
//! - **TimerLoop**: fires both jobs once a day at their configured times
//!
//! Every job reports an explicit outcome instead of failing; errors are logged
//! where they occur and never reach the timer loop.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bot;
mod commenter;
mod credentials;
mod outcome;
mod poster;
pub mod prompts;
mod schedule;
mod settings;
mod timer;

pub use bot::Bot;
pub use commenter::{Commenter, CommenterConfig};
pub use credentials::Credentials;
pub use outcome::{CommentReport, PostOutcome, PostReply, ReplyOutcome};
pub use poster::Poster;
pub use schedule::{Schedule, ScheduleType};
pub use settings::{BotSettings, CommenterSettings, ScheduleSettings};
pub use timer::{JobKind, JobRunner, TimerLoop};
