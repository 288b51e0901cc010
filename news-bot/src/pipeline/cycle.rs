//! One poll cycle over an owned [`DeliveryRecord`].

use std::sync::Arc;
use std::time::Duration;

use news_feed::FeedClient;
use tracing::{debug, info, instrument, warn};

use super::dedup::DeliveryRecord;
use super::deliverer::Deliverer;
use super::freshness::select_recent;

/// Counts from one cycle, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Items returned by the feed.
    pub fetched: usize,
    /// Items inside the freshness window.
    pub fresh: usize,
    /// Fresh items not delivered before.
    pub unseen: usize,
    pub delivered: usize,
    pub failed: usize,
    /// The feed fetch itself failed; nothing was attempted.
    pub fetch_failed: bool,
    /// Nothing inside the freshness window; logged as "No news in the last N seconds".
    pub no_news: bool,
}

/// Feed, deliverer and dedup state for the poll loop. The record is only reachable through
/// `&mut self`, so a single cycle is its only writer.
pub struct Pipeline {
    feed: Arc<dyn FeedClient>,
    deliverer: Deliverer,
    record: DeliveryRecord,
    interval_secs: u64,
    fetch_timeout: Duration,
}

impl Pipeline {
    pub fn new(
        feed: Arc<dyn FeedClient>,
        deliverer: Deliverer,
        interval_secs: u64,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            feed,
            deliverer,
            record: DeliveryRecord::new(),
            interval_secs,
            fetch_timeout,
        }
    }

    pub fn record(&self) -> &DeliveryRecord {
        &self.record
    }

    pub fn deliverer(&self) -> &Deliverer {
        &self.deliverer
    }

    /// Fetches, filters and delivers. Never fails: a fetch error ends the cycle early, a send error
    /// skips that item only. Items are sent oldest first and recorded only after a confirmed send.
    #[instrument(skip(self), fields(channel = %self.deliverer.target()))]
    pub async fn run_cycle(&mut self, now_millis: i64) -> CycleReport {
        let mut report = CycleReport::default();

        let pruned = self.record.prune(now_millis, self.interval_secs);
        if pruned > 0 {
            debug!(pruned = pruned, remaining = self.record.len(), "Pruned delivery record");
        }

        let fetched = match tokio::time::timeout(self.fetch_timeout, self.feed.fetch_news()).await {
            Ok(Ok(items)) => items,
            Ok(Err(e)) => {
                warn!(error = %e, "Fetching news failed; skipping this cycle");
                report.fetch_failed = true;
                return report;
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.fetch_timeout.as_secs(),
                    "Fetching news timed out; skipping this cycle"
                );
                report.fetch_failed = true;
                return report;
            }
        };
        report.fetched = fetched.len();

        let fresh = select_recent(fetched, now_millis, self.interval_secs);
        report.fresh = fresh.len();
        if fresh.is_empty() {
            info!("No news in the last {} seconds", self.interval_secs);
            report.no_news = true;
            return report;
        }

        let unseen = self.record.filter_unseen(fresh);
        report.unseen = unseen.len();

        for item in unseen {
            let text = item.to_markdown();
            match self.deliverer.deliver(&text).await {
                Ok(()) => {
                    self.record.mark_delivered(&item);
                    report.delivered += 1;
                    info!(news_id = item.id, title = %item.title, "Delivered news");
                }
                Err(e) => {
                    report.failed += 1;
                    warn!(news_id = item.id, error = %e, "News not delivered");
                }
            }
        }

        info!(
            fetched = report.fetched,
            fresh = report.fresh,
            unseen = report.unseen,
            delivered = report.delivered,
            failed = report.failed,
            "Poll cycle finished"
        );
        report
    }
}
