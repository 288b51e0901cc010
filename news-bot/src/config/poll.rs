//! Poll config: destination channel, poll interval and per-call timeouts.

use anyhow::Result;
use newsbot_core::ChannelTarget;
use std::env;
use std::time::Duration;

use super::env_or;

pub const DEFAULT_INTERVAL_SECS: u64 = 5 * 60;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Fixed for the process lifetime once loaded.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// CHANNEL_ID, normalized to `@handle`
    pub channel_target: ChannelTarget,
    /// POLL_INTERVAL_SECS; also the freshness window
    pub interval_secs: u64,
    /// FETCH_TIMEOUT_SECS
    pub fetch_timeout: Duration,
    /// SEND_TIMEOUT_SECS
    pub send_timeout: Duration,
}

impl PollConfig {
    /// Builds a config with default timeouts.
    pub fn new(channel_target: ChannelTarget, interval_secs: u64) -> Self {
        Self {
            channel_target,
            interval_secs,
            fetch_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            send_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load from environment variables; `channel` and `interval_secs` override CHANNEL_ID and POLL_INTERVAL_SECS.
    pub fn load(channel: Option<String>, interval_secs: Option<u64>) -> Result<Self> {
        let raw_channel = match channel {
            Some(c) => c,
            None => env::var("CHANNEL_ID").map_err(|_| anyhow::anyhow!("Please set CHANNEL_ID"))?,
        };
        let channel_target = ChannelTarget::normalize(&raw_channel)?;
        let interval_secs = match interval_secs {
            Some(secs) => secs,
            None => env_or("POLL_INTERVAL_SECS", DEFAULT_INTERVAL_SECS)?,
        };

        Ok(Self {
            channel_target,
            interval_secs,
            fetch_timeout: Duration::from_secs(env_or("FETCH_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?),
            send_timeout: Duration::from_secs(env_or("SEND_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?),
        })
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Interval and timeouts must be non-zero.
    pub fn validate(&self) -> Result<()> {
        if self.interval_secs == 0 {
            anyhow::bail!("POLL_INTERVAL_SECS must be greater than 0");
        }
        if self.fetch_timeout.is_zero() || self.send_timeout.is_zero() {
            anyhow::bail!("FETCH_TIMEOUT_SECS and SEND_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }
}
