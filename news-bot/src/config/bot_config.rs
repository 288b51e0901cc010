//! BotConfig: BaseConfig + PollConfig + feed settings.

use anyhow::Result;
use news_feed::FeedSettings;

use super::base::BaseConfig;
use super::feed::load_feed_settings;
use super::poll::PollConfig;

/// Values given on the command line; each overrides its environment variable.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub token: Option<String>,
    pub channel: Option<String>,
    pub interval_secs: Option<u64>,
}

/// Full bot config, loaded once at startup.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub poll: PollConfig,
    pub feed: FeedSettings,
}

impl BotConfig {
    /// Load from environment, applying command line overrides.
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        let base = BaseConfig::load(overrides.token)?;
        let poll = PollConfig::load(overrides.channel, overrides.interval_secs)?;
        let feed = load_feed_settings(poll.fetch_timeout)?;
        Ok(Self { base, poll, feed })
    }

    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.poll.validate()?;
        if reqwest::Url::parse(&self.feed.url).is_err() {
            anyhow::bail!("FEED_URL is not a valid URL: {}", self.feed.url);
        }
        if self.feed.page_size == 0 {
            anyhow::bail!("FEED_PAGE_SIZE must be greater than 0");
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }

    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }

    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
}
