//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.
//! Returns when teloxide's Ctrl-C handler stops the dispatcher.

use crate::chain::HandlerChain;
use anyhow::Result;
use newsbot_core::ToCoreMessage;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Starts the long-polling REPL. Text messages are handed to `handler_chain` in a spawned task so the
/// REPL returns immediately; other messages are logged and dropped.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(username = ?me.user.username, "Command REPL starting"),
        Err(e) => warn!(error = %e, "getMe failed; starting command REPL anyway"),
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            if msg.text().is_none() {
                info!(chat_id = core_msg.chat.id, "Received non-text message");
                return respond(());
            }
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %core_msg.content,
                "Received message"
            );

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                }
            });

            respond(())
        }
    })
    .await;

    info!("Command REPL stopped");
    Ok(())
}
