//! Governance engine for Guardian.
//!
//! Resolves the deduplicated set of eligible voters, turns vote counts into a
//! quorum outcome, and drives proposals through their lifecycle. Every
//! function is pure over the values it is given; the current time is always
//! passed in.

pub mod ballot;
pub mod inbox;
pub mod lifecycle;
pub mod quorum;
pub mod roles;
pub mod tally;

pub use ballot::{admit_vote, BallotAdmission};
pub use inbox::{inbox, InboxItem, InboxQuery};
pub use lifecycle::{expire, finalize, withdraw};
pub use quorum::{calculate_quorum, calculate_required, QuorumOutcome, QuorumResult};
pub use roles::{eligible_voters, RoleResolver};
pub use tally::{compute_tally, tally_votes, TallyResult};
