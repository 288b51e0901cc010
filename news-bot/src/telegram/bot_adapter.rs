//! [`newsbot_core::Bot`] over teloxide.
//!
//! Channel posts use MarkdownV2 with link previews disabled. Send failures are classified into
//! [`DeliverError`] here, so the pipeline never sees teloxide types.

use async_trait::async_trait;
use newsbot_core::{Bot as CoreBot, ChannelTarget, Chat, DeliverError, Message, NewsbotError, Result};
use teloxide::prelude::*;
use teloxide::types::{ChatId, LinkPreviewOptions, ParseMode, Recipient};
use teloxide::{ApiError, RequestError};
use tracing::error;

/// Sends command replies and channel posts through a teloxide Bot.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Creates the teloxide Bot, pointing it at `api_url` when given (e.g. a local Bot API server).
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> teloxide::Bot {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

fn recipient(target: &ChannelTarget) -> Recipient {
    match target {
        ChannelTarget::Username(name) => Recipient::ChannelUsername(name.clone()),
        ChannelTarget::Id(id) => Recipient::Id(ChatId(*id)),
    }
}

fn disabled_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

/// Description prefixes and fragments Telegram uses when the bot may not post to a chat.
const PERMISSION_MARKERS: [&str; 5] = [
    "Unauthorized",
    "Forbidden",
    "have no rights",
    "not enough rights",
    "need administrator rights",
];

/// Classifies a raw Bot API description: permission failures are `Unauthorized`, everything else
/// Telegram rejects is a bad request.
pub fn classify_api_error(description: &str) -> DeliverError {
    if description.starts_with("Unauthorized")
        || PERMISSION_MARKERS.iter().any(|m| description.contains(m))
    {
        DeliverError::Unauthorized(description.to_string())
    } else {
        DeliverError::MalformedRequest(description.to_string())
    }
}

/// Typed API errors first; descriptions teloxide does not know arrive as `Unknown` and fall back
/// to [`classify_api_error`].
fn classify_typed_api_error(api: ApiError) -> DeliverError {
    match api {
        ApiError::InvalidToken
        | ApiError::BotBlocked
        | ApiError::BotKicked
        | ApiError::BotKickedFromSupergroup
        | ApiError::BotKickedFromChannel
        | ApiError::UserDeactivated
        | ApiError::CantInitiateConversation
        | ApiError::CantTalkWithBots
        | ApiError::ChatNotFound
        | ApiError::GroupDeactivated
        | ApiError::NotEnoughRightsToPostMessages => DeliverError::Unauthorized(api.to_string()),
        ApiError::Unknown(description) => classify_api_error(&description),
        other => DeliverError::MalformedRequest(other.to_string()),
    }
}

/// Maps a teloxide request failure onto [`DeliverError`].
pub fn classify_request_error(err: RequestError) -> DeliverError {
    match err {
        RequestError::Api(api) => classify_typed_api_error(api),
        RequestError::MigrateToChatId(new_id) => DeliverError::ChannelMigrated { new_id: new_id.0 },
        RequestError::Network(e) if e.is_timeout() => DeliverError::TimedOut,
        RequestError::Network(e) => DeliverError::Network(e.to_string()),
        other => DeliverError::Other(other.to_string()),
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| NewsbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_markdown(
        &self,
        target: &ChannelTarget,
        text: &str,
    ) -> std::result::Result<(), DeliverError> {
        self.bot
            .send_message(recipient(target), text.to_string())
            .parse_mode(ParseMode::MarkdownV2)
            .link_preview_options(disabled_link_preview())
            .await
            .map_err(classify_request_error)?;
        Ok(())
    }
}
