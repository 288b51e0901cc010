//! Sends one rendered news message to the channel and applies the retry policy.
//!
//! | error | action |
//! |-------|--------|
//! | `TimedOut`, `Network` | retry once |
//! | `ChannelMigrated` | switch target to the new id, resend once |
//! | `Unauthorized`, `MalformedRequest`, `Other` | give up on this item |

use std::sync::Arc;
use std::time::Duration;

use newsbot_core::{Bot, ChannelTarget, DeliverError};
use tracing::{error, info, warn};

/// Holds the channel target for the scheduler's lifetime; a migration updates it in place.
pub struct Deliverer {
    bot: Arc<dyn Bot>,
    target: ChannelTarget,
    send_timeout: Duration,
}

impl Deliverer {
    pub fn new(bot: Arc<dyn Bot>, target: ChannelTarget, send_timeout: Duration) -> Self {
        Self {
            bot,
            target,
            send_timeout,
        }
    }

    pub fn target(&self) -> &ChannelTarget {
        &self.target
    }

    /// Delivers `text`, retrying at most once. The returned error is the last one observed and has
    /// already been logged.
    pub async fn deliver(&mut self, text: &str) -> Result<(), DeliverError> {
        let first = match self.send_once(text).await {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };

        let second = match first {
            DeliverError::ChannelMigrated { new_id } => {
                warn!(
                    old_target = %self.target,
                    new_id = new_id,
                    "Channel migrated; resending to the new chat id"
                );
                self.target = ChannelTarget::Id(new_id);
                self.send_once(text).await
            }
            ref e if e.is_transient() => {
                warn!(channel = %self.target, error = %e, "Transient send failure; retrying once");
                self.send_once(text).await
            }
            e => Err(e),
        };

        match second {
            Ok(()) => {
                info!(channel = %self.target, "Delivered on second attempt");
                Ok(())
            }
            Err(e) => {
                self.log_failure(&e);
                Err(e)
            }
        }
    }

    async fn send_once(&self, text: &str) -> Result<(), DeliverError> {
        match tokio::time::timeout(self.send_timeout, self.bot.send_markdown(&self.target, text))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(DeliverError::TimedOut),
        }
    }

    fn log_failure(&self, err: &DeliverError) {
        let channel = &self.target;
        match err {
            DeliverError::Unauthorized(detail) => {
                error!(channel = %channel, detail = %detail, "Bot is not allowed to post to channel")
            }
            DeliverError::MalformedRequest(detail) => {
                error!(channel = %channel, detail = %detail, "Telegram rejected the message")
            }
            DeliverError::TimedOut => {
                error!(channel = %channel, "Send timed out after retry")
            }
            DeliverError::Network(detail) => {
                error!(channel = %channel, detail = %detail, "Network error after retry")
            }
            DeliverError::ChannelMigrated { new_id } => {
                error!(channel = %channel, new_id = new_id, "Channel migrated again during resend")
            }
            DeliverError::Other(detail) => {
                error!(channel = %channel, detail = %detail, "Telegram transport error")
            }
        }
    }
}
