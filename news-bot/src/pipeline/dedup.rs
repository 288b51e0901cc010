//! Ids already delivered during this process lifetime.

use std::collections::HashMap;

use newsbot_core::NewsItem;

use super::freshness::is_recent;

/// Delivered news ids with their publish times. Owned by the scheduler; only a confirmed send adds
/// to it. Not persisted: a restart starts empty.
#[derive(Debug, Clone, Default)]
pub struct DeliveryRecord {
    delivered: HashMap<i64, i64>,
}

impl DeliveryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops items whose id was already delivered, preserving order.
    pub fn filter_unseen(&self, items: Vec<NewsItem>) -> Vec<NewsItem> {
        items
            .into_iter()
            .filter(|item| !self.delivered.contains_key(&item.id))
            .collect()
    }

    pub fn mark_delivered(&mut self, item: &NewsItem) {
        self.delivered.insert(item.id, item.published_at_millis);
    }

    /// Forgets ids whose items can no longer pass the freshness window. Returns how many were
    /// dropped.
    pub fn prune(&mut self, now_millis: i64, interval_secs: u64) -> usize {
        let before = self.delivered.len();
        self.delivered
            .retain(|_, published| is_recent(*published, now_millis, interval_secs));
        before - self.delivered.len()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.delivered.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.delivered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delivered.is_empty()
    }
}
