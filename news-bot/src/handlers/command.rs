//! Static command replies. Independent of the delivery pipeline.

use async_trait::async_trait;
use newsbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::info;

pub const START_REPLY: &str = "I'm a bot, please talk to me!";
pub const UNKNOWN_COMMAND_REPLY: &str = "Sorry, I didn't understand that command.";

/// Replies to `/start` with a greeting.
pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.command() != Some("start") {
            return Ok(HandlerResponse::Continue);
        }
        info!(user_id = message.user.id, chat_id = message.chat.id, "Received /start");
        self.bot.reply_to(message, START_REPLY).await?;
        Ok(HandlerResponse::Reply(START_REPLY.to_string()))
    }
}

/// Replies to any other `/command` with an apology. Must be the last handler in the chain.
/// Plain text is ignored.
pub struct UnknownCommandHandler {
    bot: Arc<dyn Bot>,
}

impl UnknownCommandHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for UnknownCommandHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(command) = message.command() else {
            return Ok(HandlerResponse::Ignore);
        };
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            command = %command,
            "Unknown command"
        );
        self.bot.reply_to(message, UNKNOWN_COMMAND_REPLY).await?;
        Ok(HandlerResponse::Reply(UNKNOWN_COMMAND_REPLY.to_string()))
    }
}
