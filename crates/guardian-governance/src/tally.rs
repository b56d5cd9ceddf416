//! Proposal tallies: eligible voters, counted votes, quorum and expiry.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use guardian_core::models::{Constitution, Decision, Proposal, QuorumConfig, Vote};

use crate::quorum::{calculate_quorum, QuorumOutcome, QuorumResult};
use crate::roles::eligible_voters;

/// Full tally of one proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyResult {
    pub proposal_id: String,
    pub rule_id: String,
    pub eligible_voters: Vec<String>,
    /// Every vote handed in, including ones that were not counted.
    pub votes: Vec<Vote>,
    pub quorum_result: QuorumResult,
    pub quorum_config: QuorumConfig,
    pub is_expired: bool,
}

impl TallyResult {
    pub fn outcome(&self) -> QuorumOutcome {
        self.quorum_result.result
    }

    pub fn is_accepted(&self) -> bool {
        self.outcome() == QuorumOutcome::Accepted
    }
}

/// Tally `proposal` under `constitution` at `now`.
///
/// The quorum is the per-rule override for the proposal's rule if one
/// exists, otherwise the default.
pub fn compute_tally(
    proposal: &Proposal,
    votes: &[Vote],
    constitution: &Constitution,
    now: DateTime<Utc>,
) -> TallyResult {
    let governance = &constitution.governance;
    tally_votes(
        proposal,
        votes,
        eligible_voters(&governance.voters, &constitution.roles),
        *governance.quorum_for(&proposal.rule_id),
        governance.proposal_ttl_days,
        now,
    )
}

/// Tally against an already resolved voter list and quorum.
///
/// Votes from emails outside `eligible_voters` are ignored. Each counted vote
/// record adds one. Expiry overrides every other outcome.
#[instrument(
    skip_all,
    fields(proposal_id = %proposal.id, eligible_count = eligible_voters.len(), vote_count = votes.len())
)]
pub fn tally_votes(
    proposal: &Proposal,
    votes: &[Vote],
    eligible_voters: Vec<String>,
    quorum_config: QuorumConfig,
    ttl_days: i64,
    now: DateTime<Utc>,
) -> TallyResult {
    let eligible: FxHashSet<&str> = eligible_voters.iter().map(String::as_str).collect();

    let (mut yes_votes, mut no_votes) = (0, 0);
    for vote in votes {
        if !eligible.contains(vote.voter_email.as_str()) {
            debug!(voter = %vote.voter_email, "ignoring vote from ineligible voter");
            continue;
        }
        match vote.decision {
            Decision::Yes => yes_votes += 1,
            Decision::No => no_votes += 1,
        }
    }

    let is_expired = proposal.is_expired(ttl_days, now);
    let mut quorum_result = calculate_quorum(&quorum_config, eligible.len(), yes_votes, no_votes);
    if is_expired {
        quorum_result.result = QuorumOutcome::Expired;
    }
    debug!(yes_votes, no_votes, result = %quorum_result.result, "tally computed");

    TallyResult {
        proposal_id: proposal.id.clone(),
        rule_id: proposal.rule_id.clone(),
        eligible_voters,
        votes: votes.to_vec(),
        quorum_result,
        quorum_config,
        is_expired,
    }
}
