//! Shared test doubles: a recording [`MockBot`], a scripted [`MockFeed`], and tracing setup.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use news_feed::FeedClient;
use newsbot_core::{
    Bot, ChannelTarget, Chat, DeliverError, FetchError, Message, NewsItem, Result,
};
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing once per test process; output goes to the test console.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("debug,news_bot=debug"));
        let _ = fmt().with_env_filter(env_filter).with_test_writer().try_init();
    });
}

/// One `send_markdown` attempt and the outcome the mock returned.
#[derive(Debug, Clone)]
pub struct SendAttempt {
    pub target: ChannelTarget,
    pub text: String,
    pub outcome: std::result::Result<(), DeliverError>,
}

/// Mock Bot: records every channel send and command reply. `send_markdown` outcomes are taken
/// from a script in call order; once the script runs out every send succeeds.
#[derive(Default)]
pub struct MockBot {
    script: Mutex<VecDeque<std::result::Result<(), DeliverError>>>,
    attempts: Mutex<Vec<SendAttempt>>,
    replies: Mutex<Vec<(i64, String)>>,
    delay: Option<Duration>,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_script(script: Vec<std::result::Result<(), DeliverError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            ..Default::default()
        })
    }

    /// Every send sleeps for `delay` before answering.
    pub fn with_delay(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay: Some(delay),
            ..Default::default()
        })
    }

    pub fn attempts(&self) -> Vec<SendAttempt> {
        self.attempts.lock().unwrap().clone()
    }

    /// Texts of the sends that succeeded, in order.
    pub fn delivered_texts(&self) -> Vec<String> {
        self.attempts()
            .into_iter()
            .filter(|a| a.outcome.is_ok())
            .map(|a| a.text)
            .collect()
    }

    pub fn replies(&self) -> Vec<(i64, String)> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.replies
            .lock()
            .unwrap()
            .push((chat.id, text.to_string()));
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_markdown(
        &self,
        target: &ChannelTarget,
        text: &str,
    ) -> std::result::Result<(), DeliverError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let outcome = self.script.lock().unwrap().pop_front().unwrap_or(Ok(()));
        self.attempts.lock().unwrap().push(SendAttempt {
            target: target.clone(),
            text: text.to_string(),
            outcome: outcome.clone(),
        });
        outcome
    }
}

/// Mock feed: returns queued responses in order, then repeats `fallback`.
pub struct MockFeed {
    queue: Mutex<VecDeque<std::result::Result<Vec<NewsItem>, FetchError>>>,
    fallback: std::result::Result<Vec<NewsItem>, FetchError>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    delay: Option<Duration>,
}

impl MockFeed {
    /// Always returns `items`.
    pub fn always(items: Vec<NewsItem>) -> Arc<Self> {
        Self::build(Vec::new(), Ok(items), None)
    }

    pub fn sequence(
        responses: Vec<std::result::Result<Vec<NewsItem>, FetchError>>,
        fallback: std::result::Result<Vec<NewsItem>, FetchError>,
    ) -> Arc<Self> {
        Self::build(responses, fallback, None)
    }

    /// Always returns `items`, after sleeping `delay`.
    pub fn slow(items: Vec<NewsItem>, delay: Duration) -> Arc<Self> {
        Self::build(Vec::new(), Ok(items), Some(delay))
    }

    fn build(
        responses: Vec<std::result::Result<Vec<NewsItem>, FetchError>>,
        fallback: std::result::Result<Vec<NewsItem>, FetchError>,
        delay: Option<Duration>,
    ) -> Arc<Self> {
        Arc::new(Self {
            queue: Mutex::new(responses.into()),
            fallback,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            delay,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of concurrent `fetch_news` calls observed.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedClient for MockFeed {
    async fn fetch_news(&self) -> std::result::Result<Vec<NewsItem>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now_in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now_in_flight, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let response = self
            .queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        response
    }
}

pub fn news(id: i64, title: &str, body: &str, published_at_millis: i64) -> NewsItem {
    NewsItem::new(id, title, body, published_at_millis)
}

pub fn channel() -> ChannelTarget {
    ChannelTarget::Username("@bee_news".to_string())
}
