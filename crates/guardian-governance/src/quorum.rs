//! Quorum arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

use guardian_core::models::{QuorumConfig, QuorumType};

/// Outcome of a quorum calculation or tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuorumOutcome {
    Accepted,
    Rejected,
    Pending,
    /// Only set by a tally; the calculator never returns it.
    Expired,
}

impl QuorumOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
            Self::Pending => "PENDING",
            Self::Expired => "EXPIRED",
        }
    }
}

impl fmt::Display for QuorumOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuorumResult {
    pub required: usize,
    pub yes_votes: usize,
    pub no_votes: usize,
    pub total_eligible: usize,
    pub result: QuorumOutcome,
}

/// Yes votes needed to accept. Never fails: an unspecified type counts as
/// majority, and out-of-range custom thresholds clamp at zero.
pub fn calculate_required(config: &QuorumConfig, total_eligible: usize) -> usize {
    let total = total_eligible as f64;
    match config.quorum_type {
        QuorumType::Majority | QuorumType::Unspecified => total_eligible / 2 + 1,
        QuorumType::TwoThirds => (total * 2.0 / 3.0).ceil() as usize,
        QuorumType::Unanimous => total_eligible,
        QuorumType::Custom => (total * config.threshold).ceil() as usize,
    }
}

/// Accepted once yes votes reach the requirement; rejected once no votes
/// leave too few voters for yes to get there; pending otherwise.
///
/// With no eligible voters, majority needs one vote that can never arrive,
/// so the result is rejected.
pub fn calculate_quorum(
    config: &QuorumConfig,
    total_eligible: usize,
    yes_votes: usize,
    no_votes: usize,
) -> QuorumResult {
    let required = calculate_required(config, total_eligible);

    // no > total - required, without going below zero.
    let result = if yes_votes >= required {
        QuorumOutcome::Accepted
    } else if no_votes.saturating_add(required) > total_eligible {
        QuorumOutcome::Rejected
    } else {
        QuorumOutcome::Pending
    };

    QuorumResult {
        required,
        yes_votes,
        no_votes,
        total_eligible,
        result,
    }
}
