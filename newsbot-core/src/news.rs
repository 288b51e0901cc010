//! News item and its MarkdownV2 rendering.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::escape::escape;

/// Offset of the timestamps shown to readers (UTC+8).
const DISPLAY_OFFSET_SECS: i32 = 8 * 3600;

/// One flash-news entry from the feed. Two items with the same `id` are the same news,
/// regardless of content drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub body: String,
    /// Epoch milliseconds, UTC.
    pub published_at_millis: i64,
}

impl PartialEq for NewsItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NewsItem {}

impl Hash for NewsItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl NewsItem {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        body: impl Into<String>,
        published_at_millis: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            published_at_millis,
        }
    }

    /// Emphasized title, blank line, body, blank line, `(YYYY-MM-DD HH:MM)` in UTC+8.
    /// Every part is escaped; only the surrounding `*` is markup.
    pub fn to_markdown(&self) -> String {
        let published = format_publish_time(self.published_at_millis).unwrap_or_default();
        format!(
            "*{}*\n\n{}\n\n{}",
            escape(&self.title),
            escape(&self.body),
            escape(&published)
        )
    }
}

/// Formats epoch milliseconds as `(YYYY-MM-DD HH:MM)` in UTC+8. `None` when out of range.
pub fn format_publish_time(millis: i64) -> Option<String> {
    let offset = FixedOffset::east_opt(DISPLAY_OFFSET_SECS)?;
    let utc = DateTime::from_timestamp_millis(millis)?;
    Some(utc.with_timezone(&offset).format("(%Y-%m-%d %H:%M)").to_string())
}
