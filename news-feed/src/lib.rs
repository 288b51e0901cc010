//! # news-feed
//!
//! Fetches the flash-news list the bot republishes.
//!
//! [`FeedClient`] is the seam the poll pipeline depends on; [`BeeKuaiBaoClient`] implements it over
//! HTTP with reqwest. Every failure (status, transport, payload shape) comes back as a
//! [`newsbot_core::FetchError`]; a fetch either yields the whole list or nothing.

mod client;
mod payload;

pub use client::{BeeKuaiBaoClient, FeedClient, FeedSettings, DEFAULT_FEED_URL, DEFAULT_PAGE_SIZE};
pub use payload::parse_news;
