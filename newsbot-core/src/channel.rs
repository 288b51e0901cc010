//! Destination of outbound news messages.

use std::fmt;

use crate::error::NewsbotError;

/// Where news is posted: a public channel handle, or a numeric chat id (after a migration).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChannelTarget {
    /// Always starts with `@`.
    Username(String),
    Id(i64),
}

impl ChannelTarget {
    /// Trims `raw` and prefixes `@` if missing. Fails on an empty handle.
    pub fn normalize(raw: &str) -> Result<Self, NewsbotError> {
        let trimmed = raw.trim();
        let name = trimmed.strip_prefix('@').unwrap_or(trimmed);
        if name.is_empty() {
            return Err(NewsbotError::Config(format!(
                "channel id must not be empty (got {:?})",
                raw
            )));
        }
        Ok(ChannelTarget::Username(format!("@{}", name)))
    }
}

impl fmt::Display for ChannelTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelTarget::Username(name) => f.write_str(name),
            ChannelTarget::Id(id) => write!(f, "{}", id),
        }
    }
}
