//! Bot configuration: BaseConfig (Telegram + log) + PollConfig (channel, interval, timeouts) + feed settings.

mod base;
mod bot_config;
mod feed;
mod poll;


pub use base::BaseConfig;
pub use bot_config::{BotConfig, ConfigOverrides};
pub use feed::load_feed_settings;
pub use poll::{PollConfig, DEFAULT_INTERVAL_SECS, DEFAULT_TIMEOUT_SECS};

/// Reads `key` and parses it. Unset falls back to `default`; set but unparsable is an error
/// naming the variable.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{} has an invalid value {:?}: {}", key, raw, e)),
        Err(_) => Ok(default),
    }
}
