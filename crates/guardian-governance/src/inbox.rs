//! A voter's inbox: open proposals still waiting for their vote.

use std::collections::HashMap;
use std::hash::BuildHasher;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::instrument;

use guardian_core::config::InboxConfig;
use guardian_core::models::{Constitution, Proposal, Vote};

use crate::roles::RoleResolver;

/// One pending proposal with how long it has been open.
#[derive(Debug, Clone, PartialEq)]
pub struct InboxItem<'a> {
    pub proposal: &'a Proposal,
    pub age: TimeDelta,
    /// Open longer than the query's `stale_after`.
    pub stale: bool,
}

/// Who is asking and when.
#[derive(Debug, Clone)]
pub struct InboxQuery {
    pub email: String,
    pub now: DateTime<Utc>,
    /// Only proposals created strictly after this instant.
    pub since: Option<DateTime<Utc>>,
    pub stale_after: TimeDelta,
}

impl InboxQuery {
    pub fn new(email: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            now,
            since: None,
            stale_after: days(InboxConfig::default().effective_stale_after_days()),
        }
    }

    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    pub fn stale_after(mut self, stale_after: TimeDelta) -> Self {
        self.stale_after = stale_after;
        self
    }

    /// Staleness threshold taken from `[inbox]` config.
    pub fn with_config(self, config: &InboxConfig) -> Self {
        self.stale_after(days(config.effective_stale_after_days()))
    }
}

fn days(n: u32) -> TimeDelta {
    TimeDelta::days(i64::from(n))
}

/// Open, unexpired proposals the user can vote on and has not, in input
/// order. Anyone who is not an eligible voter gets an empty inbox.
#[instrument(skip_all, fields(email = %query.email, proposal_count = proposals.len()))]
pub fn inbox<'a, S: BuildHasher>(
    proposals: &'a [Proposal],
    votes_by_proposal: &HashMap<String, Vec<Vote>, S>,
    constitution: &Constitution,
    query: &InboxQuery,
) -> Vec<InboxItem<'a>> {
    if !RoleResolver::new(constitution).is_voter(&query.email) {
        tracing::debug!("not an eligible voter");
        return Vec::new();
    }
    let ttl_days = constitution.governance.proposal_ttl_days;

    proposals
        .iter()
        .filter(|p| p.is_open() && !p.is_expired(ttl_days, query.now))
        .filter(|p| query.since.map_or(true, |since| p.created_at > since))
        .filter(|p| !has_voted(votes_by_proposal.get(&p.id), &query.email))
        .map(|proposal| {
            let age = query.now.signed_duration_since(proposal.created_at);
            InboxItem {
                proposal,
                age,
                stale: age > query.stale_after,
            }
        })
        .collect()
}

fn has_voted(votes: Option<&Vec<Vote>>, email: &str) -> bool {
    votes.is_some_and(|votes| votes.iter().any(|v| v.voter_email == email))
}
