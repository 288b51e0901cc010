//! Telegram connection and log file settings.

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/news-bot.log";

#[derive(Debug, Clone)]
pub struct BaseConfig {
    pub bot_token: String,
    /// Bot API base URL; `None` uses api.telegram.org.
    pub telegram_api_url: Option<String>,
    pub log_file: String,
}

impl BaseConfig {
    /// Reads BOT_TOKEN (unless `token` is given), TELEGRAM_API_URL with TELOXIDE_API_URL as
    /// fallback, and LOG_FILE.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").context("Please set BOT_TOKEN")?,
        };
        let telegram_api_url = ["TELEGRAM_API_URL", "TELOXIDE_API_URL"]
            .into_iter()
            .find_map(|key| env::var(key).ok());

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string()),
        })
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.bot_token.trim().is_empty(), "BOT_TOKEN is empty");
        if let Some(url) = &self.telegram_api_url {
            reqwest::Url::parse(url)
                .with_context(|| format!("Bot API URL is not a valid URL: {}", url))?;
        }
        Ok(())
    }
}
