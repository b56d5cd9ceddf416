//! Inbox configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InboxConfig {
    /// Age in days after which an unvoted proposal is flagged stale. Default: 7.
    pub stale_after_days: Option<u32>,
}

impl InboxConfig {
    /// Returns the effective stale threshold, defaulting to 7 days.
    pub fn effective_stale_after_days(&self) -> u32 {
        self.stale_after_days.unwrap_or(7)
    }
}
