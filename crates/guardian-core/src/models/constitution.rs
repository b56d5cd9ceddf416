//! The constitution: voting bodies, quorum policy and role membership.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GuardianError;

/// Top-level `constitution.yml` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constitution {
    pub governance: Governance,
    pub identity: Identity,
    /// Role name -> members. Sorted so role scans are deterministic.
    pub roles: BTreeMap<String, Role>,
    pub llm: LlmConfig,
}

impl Constitution {
    pub fn from_yaml(yaml: &str) -> Result<Self, GuardianError> {
        super::from_yaml("constitution", yaml)
    }
}

/// Voting and proposal governance rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Governance {
    pub voters: Vec<VoterRef>,
    pub quorum: QuorumConfig,
    pub forbid_self_approval: bool,
    pub allow_vote_change: bool,
    /// Days a proposal stays open. Zero disables expiry.
    pub proposal_ttl_days: i64,
    pub per_rule_overrides: BTreeMap<String, RuleOverride>,
    pub exceptions: ExceptionPolicy,
}

impl Governance {
    /// The quorum that applies to proposals against `rule_id`:
    /// the per-rule override if one exists, otherwise the default.
    pub fn quorum_for(&self, rule_id: &str) -> &QuorumConfig {
        self.per_rule_overrides
            .get(rule_id)
            .map_or(&self.quorum, |o| &o.quorum)
    }
}

/// References a role whose members may vote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterRef {
    #[serde(default)]
    pub role: String,
}

impl VoterRef {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }
}

/// How the required yes-vote count is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuorumType {
    Majority,
    TwoThirds,
    Unanimous,
    Custom,
    /// Missing or unrecognised type. Counted like `majority`.
    #[default]
    #[serde(other)]
    Unspecified,
}

impl fmt::Display for QuorumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Majority => write!(f, "majority"),
            Self::TwoThirds => write!(f, "two_thirds"),
            Self::Unanimous => write!(f, "unanimous"),
            Self::Custom => write!(f, "custom"),
            Self::Unspecified => write!(f, "unspecified"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuorumConfig {
    #[serde(rename = "type", default)]
    pub quorum_type: QuorumType,
    /// Fraction in (0, 1]; only read for `custom`.
    #[serde(default)]
    pub threshold: f64,
}

impl QuorumConfig {
    pub fn new(quorum_type: QuorumType) -> Self {
        Self {
            quorum_type,
            threshold: 0.0,
        }
    }

    pub fn majority() -> Self {
        Self::new(QuorumType::Majority)
    }

    pub fn two_thirds() -> Self {
        Self::new(QuorumType::TwoThirds)
    }

    pub fn unanimous() -> Self {
        Self::new(QuorumType::Unanimous)
    }

    pub fn custom(threshold: f64) -> Self {
        Self {
            quorum_type: QuorumType::Custom,
            threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleOverride {
    #[serde(default)]
    pub quorum: QuorumConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExceptionPolicy {
    pub require_approval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub allowed_domains: Vec<String>,
    pub require_signed_commits: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    pub members: Vec<RoleMember>,
}

impl Role {
    pub fn with_members<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: emails
                .into_iter()
                .map(|email| RoleMember { email: email.into() })
                .collect(),
        }
    }

    pub fn has_member(&self, email: &str) -> bool {
        self.members.iter().any(|m| m.email == email)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMember {
    #[serde(default)]
    pub email: String,
}

/// Provider settings for the optional explanation collaborator.
/// The core only validates this block; it never talks to the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// deepseek | openai | claude | custom; empty disables explanations.
    pub provider: String,
    pub endpoint: String,
    pub model: String,
    pub prompts: LlmPrompts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmPrompts {
    pub check_system: String,
    pub propose_system: String,
}
