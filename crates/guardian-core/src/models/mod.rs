//! Domain models shared by the engine and governance crates.
//!
//! These are the values external loaders hand to the core. Each document type
//! can be parsed from its YAML text; reading files is left to the caller.

pub mod constitution;
pub mod exception;
pub mod proposal;
pub mod rule;
pub mod vote;

pub use constitution::{
    Constitution, ExceptionPolicy, Governance, Identity, LlmConfig, LlmPrompts, QuorumConfig,
    QuorumType, Role, RoleMember, RuleOverride, VoterRef,
};
pub use exception::Exception;
pub use proposal::{Proposal, ProposalChange, ProposalStatus, ProposalType};
pub use rule::{Rule, RulesFile, Severity};
pub use vote::{Decision, Vote};

use serde::de::DeserializeOwned;

use crate::errors::GuardianError;

/// Parse a YAML document, tagging failures with the document kind.
pub(crate) fn from_yaml<T: DeserializeOwned>(kind: &'static str, yaml: &str) -> Result<T, GuardianError> {
    serde_yaml::from_str(yaml).map_err(|e| GuardianError::document(kind, e))
}
