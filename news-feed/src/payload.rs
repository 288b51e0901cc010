//! Feed JSON shape and its mapping to [`NewsItem`].

use newsbot_core::{FetchError, NewsItem};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct FeedResponse {
    #[serde(default)]
    data: Option<Vec<FeedRecord>>,
}

#[derive(Debug, Deserialize)]
struct FeedRecord {
    id: i64,
    title: String,
    content: String,
    #[serde(rename = "publishTime")]
    publish_time: i64,
}

impl From<FeedRecord> for NewsItem {
    fn from(record: FeedRecord) -> Self {
        NewsItem::new(record.id, record.title, record.content, record.publish_time)
    }
}

/// Parses a feed response body. A missing or null `data` array is an empty list; any malformed
/// record fails the whole body. Items keep feed order (newest first).
pub fn parse_news(body: &str) -> Result<Vec<NewsItem>, FetchError> {
    let response: FeedResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    Ok(response
        .data
        .unwrap_or_default()
        .into_iter()
        .map(NewsItem::from)
        .collect())
}
