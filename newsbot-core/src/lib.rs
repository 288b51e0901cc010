//! # newsbot-core
//!
//! Core types and traits for the news channel bot: [`NewsItem`] and its MarkdownV2 rendering,
//! [`ChannelTarget`], the [`Bot`] and [`Handler`] traits, error types and tracing initialization.
//! Transport-agnostic; the Telegram adapter and the poll pipeline live in `news-bot`.

pub mod bot;
pub mod channel;
pub mod error;
pub mod escape;
pub mod logger;
pub mod news;
pub mod types;

pub use bot::Bot;
pub use channel::ChannelTarget;
pub use error::{DeliverError, FetchError, NewsbotError, Result};
pub use escape::{escape, escape_opt};
pub use logger::init_tracing;
pub use news::{format_publish_time, NewsItem};
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, User};
