//! Votes cast on proposals.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::GuardianError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Yes,
    No,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "yes"),
            Self::No => write!(f, "no"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub proposal_id: String,
    pub voter_email: String,
    pub decision: Decision,
    #[serde(default)]
    pub comment: String,
    pub voted_at: DateTime<Utc>,
}

impl Vote {
    pub fn from_yaml(yaml: &str) -> Result<Self, GuardianError> {
        super::from_yaml("vote", yaml)
    }
}
