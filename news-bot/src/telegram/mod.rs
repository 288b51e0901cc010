//! Telegram layer: teloxide adapters, [`newsbot_core::Bot`] implementation, command REPL runner.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::TelegramMessageWrapper;
pub use bot_adapter::{build_teloxide_bot, classify_api_error, classify_request_error, TelegramBotAdapter};
pub use runner::run_repl;
