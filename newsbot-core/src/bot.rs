//! Bot abstraction for replying to commands and posting news.
//!
//! [`Bot`] is transport-agnostic; the teloxide implementation lives in `news-bot`.

use crate::channel::ChannelTarget;
use crate::error::{DeliverError, Result};
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Posts pre-escaped MarkdownV2 text to the channel with link previews disabled.
    /// Failures come back classified so the caller can decide whether to retry.
    async fn send_markdown(
        &self,
        target: &ChannelTarget,
        text: &str,
    ) -> std::result::Result<(), DeliverError>;
}
