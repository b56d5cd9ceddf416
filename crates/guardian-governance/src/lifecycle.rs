//! Proposal state transitions.
//!
//! Each transition takes the current proposal and returns the updated copy;
//! persisting it is the caller's job.

use guardian_core::errors::GovernanceError;
use guardian_core::models::{Proposal, ProposalStatus};

use crate::quorum::QuorumOutcome;
use crate::tally::TallyResult;

fn require_open(proposal: &Proposal) -> Result<(), GovernanceError> {
    if proposal.is_open() {
        Ok(())
    } else {
        Err(GovernanceError::proposal_not_open(&proposal.id, proposal.status))
    }
}

fn require_outcome(tally: &TallyResult, expected: QuorumOutcome) -> Result<(), GovernanceError> {
    if tally.outcome() == expected {
        Ok(())
    } else {
        Err(GovernanceError::UnexpectedTally {
            proposal_id: tally.proposal_id.clone(),
            result: tally.outcome().to_string(),
            expected: expected.to_string(),
        })
    }
}

fn with_status(proposal: &Proposal, status: ProposalStatus) -> Proposal {
    Proposal {
        status,
        ..proposal.clone()
    }
}

/// Mark an open proposal accepted. Its tally must be `ACCEPTED`.
pub fn finalize(proposal: &Proposal, tally: &TallyResult) -> Result<Proposal, GovernanceError> {
    require_open(proposal)?;
    require_outcome(tally, QuorumOutcome::Accepted)?;
    tracing::info!(proposal_id = %proposal.id, "proposal finalized");
    Ok(with_status(proposal, ProposalStatus::Accepted))
}

/// Withdraw an open proposal. Only its author may.
pub fn withdraw(proposal: &Proposal, requester_email: &str) -> Result<Proposal, GovernanceError> {
    require_open(proposal)?;
    if proposal.created_by != requester_email {
        return Err(GovernanceError::NotAuthor {
            author: proposal.created_by.clone(),
            proposal_id: proposal.id.clone(),
        });
    }
    Ok(with_status(proposal, ProposalStatus::Withdrawn))
}

/// Mark an open proposal expired. Its tally must be `EXPIRED`.
pub fn expire(proposal: &Proposal, tally: &TallyResult) -> Result<Proposal, GovernanceError> {
    require_open(proposal)?;
    require_outcome(tally, QuorumOutcome::Expired)?;
    Ok(with_status(proposal, ProposalStatus::Expired))
}
