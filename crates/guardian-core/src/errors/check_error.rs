//! Rule-checking errors.
//!
//! Every variant is deterministic for a given input. The engine aborts the
//! whole run on the first one it meets.

use super::error_code::{self, GuardianErrorCode};

/// Errors raised while compiling or evaluating rules against a diff.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// A rule's config is missing a required key or a value has the wrong shape.
    #[error("rule {rule_id:?}: config key {key:?}: {message}")]
    Config {
        rule_id: String,
        key: String,
        message: String,
    },

    /// A configured regular expression failed to compile.
    #[error("rule {rule_id:?}: invalid regex {pattern:?}: {message}")]
    Pattern {
        rule_id: String,
        pattern: String,
        message: String,
    },

    /// A rule references a type with no registered checker.
    #[error("unknown rule type {rule_type:?} for rule {rule_id:?}")]
    UnknownRuleType { rule_id: String, rule_type: String },

    /// The proposal-status source used by the meta check failed.
    #[error("proposal store {path}: {message}")]
    ProposalStore { path: String, message: String },
}

impl CheckError {
    /// Shorthand for a missing required config key.
    pub fn missing_key(rule_id: &str, key: &str) -> Self {
        Self::Config {
            rule_id: rule_id.to_string(),
            key: key.to_string(),
            message: "missing required key".to_string(),
        }
    }

    /// The rule this error is attributed to, if any.
    pub fn rule_id(&self) -> Option<&str> {
        match self {
            Self::Config { rule_id, .. }
            | Self::Pattern { rule_id, .. }
            | Self::UnknownRuleType { rule_id, .. } => Some(rule_id),
            Self::ProposalStore { .. } => None,
        }
    }
}

impl GuardianErrorCode for CheckError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => error_code::RULE_CONFIG_ERROR,
            Self::Pattern { .. } => error_code::PATTERN_ERROR,
            Self::UnknownRuleType { .. } => error_code::UNKNOWN_RULE_TYPE,
            Self::ProposalStore { .. } => error_code::PROPOSAL_STORE_ERROR,
        }
    }
}
