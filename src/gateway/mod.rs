//! Boundary to the hosted generative-model service.
//!
//! Request handling only ever talks to the [`ChatGateway`] trait so tests can
//! substitute a stub without touching the pipeline.

mod client;
mod models;

pub use client::GeminiClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Message;

#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Submit one conversation turn: prior history plus the new user message.
    /// Returns the model's completion text. No retries, no local fallback.
    async fn send_turn(&self, history: &[Message], user_message: &str) -> Result<String>;

    /// Independent, historyless call producing the clinical-note summary of a
    /// single exchange. Must not reuse the ongoing conversation context.
    async fn summarize(&self, user_message: &str, bot_reply: &str) -> Result<String>;
}
