//! HTTP client for the BeeKuaiBao news list endpoint.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use newsbot_core::{FetchError, NewsItem};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, USER_AGENT};
use reqwest::{Client, StatusCode};
use tracing::{info, instrument, warn};

use crate::payload::parse_news;

pub const DEFAULT_FEED_URL: &str = "https://api.beekuaibao.com/homepage/pcApi/news/list";
pub const DEFAULT_PAGE_SIZE: u32 = 20;

const FEED_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:70.0) Gecko/20100101 Firefox/70.0";
const FEED_ORIGIN: &str = "https://www.beekuaibao.com";
const FEED_ACCEPT: &str = "application/json, text/javascript, */*; q=0.01";

/// Source of the current news list, newest first.
#[async_trait]
pub trait FeedClient: Send + Sync {
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, FetchError>;
}

/// Endpoint, page size and request timeout for [`BeeKuaiBaoClient`].
#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub url: String,
    pub page_size: u32,
    pub timeout: Duration,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(15),
        }
    }
}

/// [`FeedClient`] over HTTP. One GET per fetch, bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct BeeKuaiBaoClient {
    client: Client,
    settings: FeedSettings,
}

impl BeeKuaiBaoClient {
    /// Builds the reqwest client with the feed's required default headers.
    pub fn new(settings: FeedSettings) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(FEED_USER_AGENT));
        headers.insert(ORIGIN, HeaderValue::from_static(FEED_ORIGIN));
        headers.insert(ACCEPT, HeaderValue::from_static(FEED_ACCEPT));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()
            .context("Failed to create feed HTTP client")?;

        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &FeedSettings {
        &self.settings
    }
}

fn transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(e.to_string())
    }
}

#[async_trait]
impl FeedClient for BeeKuaiBaoClient {
    #[instrument(skip(self), fields(url = %self.settings.url))]
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, FetchError> {
        info!(page_size = self.settings.page_size, "Query news from BeeKuaiBao");

        let response = self
            .client
            .get(&self.settings.url)
            .query(&[("pageSize", self.settings.page_size)])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), body = %body, "Get news failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let items = parse_news(&body)?;
        info!(count = items.len(), "Fetched news list");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = FeedSettings::default();
        assert_eq!(settings.url, DEFAULT_FEED_URL);
        assert_eq!(settings.page_size, 20);
        assert_eq!(settings.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_client_new() {
        let client = BeeKuaiBaoClient::new(FeedSettings::default()).unwrap();
        assert_eq!(client.settings().page_size, DEFAULT_PAGE_SIZE);
    }
}
