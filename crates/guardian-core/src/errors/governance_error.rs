//! Governance errors: refused ballots and lifecycle transitions.

use super::error_code::{self, GuardianErrorCode};

/// Reasons a vote or a proposal state change is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GovernanceError {
    #[error("proposal {proposal_id:?} has status {status:?}, not \"proposed\"")]
    ProposalNotOpen { proposal_id: String, status: String },

    #[error("{email} is not an eligible voter")]
    NotEligible { email: String },

    #[error("self-approval is forbidden; {email} cannot vote yes on their own proposal")]
    SelfApproval { email: String },

    #[error("{email} has already voted on {proposal_id:?} and vote changes are not allowed")]
    VoteChangeNotAllowed { email: String, proposal_id: String },

    #[error("only the author ({author}) can withdraw proposal {proposal_id:?}")]
    NotAuthor { author: String, proposal_id: String },

    #[error("proposal {proposal_id:?} has tally result {result}, not {expected}")]
    UnexpectedTally {
        proposal_id: String,
        result: String,
        expected: String,
    },
}

impl GovernanceError {
    pub fn proposal_not_open(proposal_id: &str, status: impl ToString) -> Self {
        Self::ProposalNotOpen {
            proposal_id: proposal_id.to_string(),
            status: status.to_string(),
        }
    }
}

impl GuardianErrorCode for GovernanceError {
    fn error_code(&self) -> &'static str {
        error_code::GOVERNANCE_ERROR
    }
}
