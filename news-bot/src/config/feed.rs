//! Feed endpoint settings from env: FEED_URL, FEED_PAGE_SIZE.

use anyhow::Result;
use news_feed::{FeedSettings, DEFAULT_FEED_URL, DEFAULT_PAGE_SIZE};
use std::env;
use std::time::Duration;

use super::env_or;

/// Loads feed settings; the request timeout comes from the poll config.
pub fn load_feed_settings(timeout: Duration) -> Result<FeedSettings> {
    Ok(FeedSettings {
        url: env::var("FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string()),
        page_size: env_or("FEED_PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
        timeout,
    })
}
