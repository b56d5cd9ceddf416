//! Time-bounded waivers for a rule on specific paths.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::GuardianError;

/// An exemption from `rule_id` for files matching any of `paths`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exception {
    pub id: String,
    pub rule_id: String,
    #[serde(default)]
    pub paths: Vec<String>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Exception {
    /// Active iff it never expires or expires strictly after `now`.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(true, |expires_at| expires_at > now)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, GuardianError> {
        super::from_yaml("exception", yaml)
    }
}
