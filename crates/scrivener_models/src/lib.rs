//! Language-model provider integrations for Scrivener.
//!
//! Drivers implement [`TextGenerator`]; the bot talks to them through
//! [`ContentGenerator`], which turns every provider failure into a logged
//! `None` so that a single bad call never interrupts a job.
//!
//! # Example
//!
//! ```no_run
//! use scrivener_models::{ContentGenerator, GroqDriver};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = GroqDriver::new("gsk-...", "llama-3.3-70b-versatile")?;
//! let generator = ContentGenerator::new(driver);
//! if let Some(text) = generator.generate("Write a haiku about rain.").await {
//!     println!("{text}");
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod driver;
mod generator;
mod groq;
mod openai_compat;

pub use driver::TextGenerator;
pub use generator::ContentGenerator;
pub use groq::{GROQ_BASE_URL, GroqDriver};
pub use openai_compat::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, ChoiceMessage,
    OpenAICompatibleClient,
};
