//! Command handlers: `/start` greeting and the unknown-command fallback.

mod command;

pub use command::{StartHandler, UnknownCommandHandler, START_REPLY, UNKNOWN_COMMAND_REPLY};
