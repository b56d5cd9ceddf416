//! Ballot admission: whether a vote may be recorded.

use chrono::{DateTime, Utc};

use guardian_core::errors::GovernanceError;
use guardian_core::models::{Constitution, Decision, Proposal, Vote};

use crate::roles::RoleResolver;

/// A vote cleared for recording.
#[derive(Debug, Clone, PartialEq)]
pub struct BallotAdmission {
    pub vote: Vote,
    /// The voter already voted and vote changes are allowed; the earlier vote
    /// should be overwritten rather than kept alongside.
    pub replaces_existing: bool,
}

impl BallotAdmission {
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.vote.comment = comment.into();
        self
    }
}

/// Admit a vote by `voter_email` on `proposal`.
///
/// Checked in order: the proposal is open, the voter is eligible, the author
/// is not approving their own proposal when self-approval is forbidden, and
/// a repeat vote is only allowed when vote changes are.
pub fn admit_vote(
    constitution: &Constitution,
    proposal: &Proposal,
    existing_votes: &[Vote],
    voter_email: &str,
    decision: Decision,
    now: DateTime<Utc>,
) -> Result<BallotAdmission, GovernanceError> {
    let governance = &constitution.governance;

    if !proposal.is_open() {
        return Err(GovernanceError::proposal_not_open(&proposal.id, proposal.status));
    }
    if !RoleResolver::new(constitution).is_voter(voter_email) {
        return Err(GovernanceError::NotEligible {
            email: voter_email.to_string(),
        });
    }
    if governance.forbid_self_approval
        && decision == Decision::Yes
        && proposal.created_by == voter_email
    {
        return Err(GovernanceError::SelfApproval {
            email: voter_email.to_string(),
        });
    }

    let replaces_existing = existing_votes
        .iter()
        .any(|v| v.proposal_id == proposal.id && v.voter_email == voter_email);
    if replaces_existing && !governance.allow_vote_change {
        return Err(GovernanceError::VoteChangeNotAllowed {
            email: voter_email.to_string(),
            proposal_id: proposal.id.clone(),
        });
    }

    Ok(BallotAdmission {
        vote: Vote {
            proposal_id: proposal.id.clone(),
            voter_email: voter_email.to_string(),
            decision,
            comment: String::new(),
            voted_at: now,
        },
        replaces_existing,
    })
}

/// File stem for a voter's ballot: `@` becomes `_at_`, `.` becomes `_`.
/// One file per voter per proposal is what makes a changed vote replace the
/// old one.
pub fn ballot_file_stem(email: &str) -> String {
    email.replace('@', "_at_").replace('.', "_")
}
