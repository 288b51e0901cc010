//! Error types for the bot core.
//!
//! [`NewsbotError`] is the top-level error for the bot transport and config.
//! [`FetchError`] and [`DeliverError`] are the typed outcomes of the two external calls a poll
//! cycle makes (feed fetch, channel send); both are scoped to one cycle or one item.

use thiserror::Error;

/// Top-level error for the bot (transport, config).
#[derive(Error, Debug)]
pub enum NewsbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Failure to obtain the news list. Aborts the fetch step of one cycle; never partial.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Feed answered with a non-200 status.
    #[error("feed returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("feed request timed out")]
    Timeout,

    #[error("feed network error: {0}")]
    Network(String),

    /// Payload was not the expected JSON shape (missing or mistyped fields).
    #[error("malformed feed payload: {0}")]
    Parse(String),
}

/// Classified failure of a single channel send.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliverError {
    /// Token invalid, or the bot may not post to this channel.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Telegram rejected the message or its parameters.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("send timed out")]
    TimedOut,

    #[error("network error: {0}")]
    Network(String),

    /// The destination was upgraded and now lives under `new_id`.
    #[error("channel migrated to {new_id}")]
    ChannelMigrated { new_id: i64 },

    #[error("transport error: {0}")]
    Other(String),
}

impl DeliverError {
    /// Timeouts and connectivity failures may succeed on a second attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, DeliverError::TimedOut | DeliverError::Network(_))
    }
}

/// Result type for core operations; uses [`NewsbotError`].
pub type Result<T> = std::result::Result<T, NewsbotError>;
