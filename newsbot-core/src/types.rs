//! Types for the command side of the bot: who wrote, where, what, and how handlers answer.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sender of a command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
}

/// Chat the command came from; replies go back here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A text message received by the bot. Non-text updates arrive with empty `content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Command name without the leading `/` and any `@botname` suffix; `None` for plain text.
    pub fn command(&self) -> Option<&str> {
        let rest = self.content.trim_start().strip_prefix('/')?;
        let word = rest.split_whitespace().next().unwrap_or("");
        let name = word.split('@').next().unwrap_or("");
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

/// Outcome of one handler. `Reply(text)` carries what was sent and ends dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Nobody in the chain answered.
    Continue,
    /// Not addressed to this handler.
    Ignore,
    Reply(String),
}

/// Conversion from a transport's message type into [`Message`].
pub trait ToCoreMessage {
    fn to_core(&self) -> Message;
}

/// A command handler; `HandlerChain` asks each in order until one replies.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, message: &Message) -> crate::error::Result<HandlerResponse>;
}
