//! Proposals to add, modify or remove a rule.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::GuardianError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalType {
    Modify,
    Add,
    Remove,
}

impl fmt::Display for ProposalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Modify => write!(f, "modify"),
            Self::Add => write!(f, "add"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

/// Lifecycle status of a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Proposed,
    Accepted,
    Rejected,
    Withdrawn,
    Expired,
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proposed => write!(f, "proposed"),
            Self::Accepted => write!(f, "accepted"),
            Self::Rejected => write!(f, "rejected"),
            Self::Withdrawn => write!(f, "withdrawn"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalChange {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: String,
    pub rule_id: String,
    pub proposal_type: ProposalType,
    #[serde(default)]
    pub change: ProposalChange,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub status: ProposalStatus,
}

impl Proposal {
    /// Only `proposed` proposals accept votes and state transitions.
    pub fn is_open(&self) -> bool {
        self.status == ProposalStatus::Proposed
    }

    /// The instant after which the proposal is expired, if `ttl_days` is positive.
    pub fn expiry(&self, ttl_days: i64) -> Option<DateTime<Utc>> {
        if ttl_days <= 0 {
            return None;
        }
        TimeDelta::try_days(ttl_days).and_then(|ttl| self.created_at.checked_add_signed(ttl))
    }

    /// Expired iff a positive TTL is configured and `now` is past `created_at + ttl`.
    pub fn is_expired(&self, ttl_days: i64, now: DateTime<Utc>) -> bool {
        self.expiry(ttl_days).is_some_and(|expiry| now > expiry)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, GuardianError> {
        super::from_yaml("proposal", yaml)
    }
}
