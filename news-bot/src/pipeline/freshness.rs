//! Freshness window: keep items published within the last poll interval, oldest first.

use newsbot_core::NewsItem;

/// `published_at_millis + interval_secs * 1000 >= now_millis`, without overflow.
pub fn is_recent(published_at_millis: i64, now_millis: i64, interval_secs: u64) -> bool {
    let window_millis = i64::try_from(interval_secs)
        .unwrap_or(i64::MAX)
        .saturating_mul(1000);
    published_at_millis.saturating_add(window_millis) >= now_millis
}

/// Keeps recent items (see [`is_recent`]) and sorts them ascending by publish time. The sort is
/// stable over the reversed input, so items sharing a timestamp come out oldest-first relative to
/// the feed's newest-first listing.
pub fn select_recent(items: Vec<NewsItem>, now_millis: i64, interval_secs: u64) -> Vec<NewsItem> {
    let mut recent: Vec<NewsItem> = items
        .into_iter()
        .rev()
        .filter(|item| is_recent(item.published_at_millis, now_millis, interval_secs))
        .collect();
    recent.sort_by_key(|item| item.published_at_millis);
    recent
}
