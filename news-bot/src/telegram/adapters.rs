//! teloxide message → [`newsbot_core::Message`].

use newsbot_core::{Chat, Message, ToCoreMessage, User};

fn core_user(user: Option<&teloxide::types::User>) -> User {
    match user {
        Some(u) => User {
            id: u.id.0 as i64,
            username: u.username.clone(),
        },
        // channel posts carry no sender
        None => User {
            id: 0,
            username: None,
        },
    }
}

/// Borrowing wrapper so [`ToCoreMessage`] can be implemented for teloxide's `Message`.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl ToCoreMessage for TelegramMessageWrapper<'_> {
    fn to_core(&self) -> Message {
        let msg = self.0;
        Message {
            id: msg.id.to_string(),
            user: core_user(msg.from.as_ref()),
            chat: Chat {
                id: msg.chat.id.0,
                chat_type: format!("{:?}", msg.chat.kind),
            },
            content: msg.text().unwrap_or_default().to_string(),
            created_at: msg.date,
        }
    }
}
