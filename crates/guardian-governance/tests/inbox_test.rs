//! Inbox tests.
//! INB-01 through INB-05

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use guardian_core::config::InboxConfig;
use guardian_core::models::{
    Constitution, Decision, Proposal, ProposalChange, ProposalStatus, ProposalType, Role, Vote,
    VoterRef,
};
use guardian_governance::inbox::{inbox, InboxQuery};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 20, 12, 0, 0).unwrap()
}

fn constitution() -> Constitution {
    let mut c = Constitution::default();
    c.governance.voters = vec![VoterRef::new("core")];
    c.governance.proposal_ttl_days = 30;
    c.roles.insert(
        "core".to_string(),
        Role::with_members(["alice@example.com", "bob@example.com"]),
    );
    c.roles.insert("guests".to_string(), Role::with_members(["gina@example.com"]));
    c
}

fn proposal(id: &str, days_old: i64, status: ProposalStatus) -> Proposal {
    Proposal {
        id: id.to_string(),
        rule_id: "r1".to_string(),
        proposal_type: ProposalType::Modify,
        change: ProposalChange::default(),
        reason: "r".to_string(),
        impact: String::new(),
        created_by: "alice@example.com".to_string(),
        created_at: now() - TimeDelta::days(days_old),
        status,
    }
}

fn proposals() -> Vec<Proposal> {
    vec![
        proposal("fresh", 2, ProposalStatus::Proposed),
        proposal("old", 10, ProposalStatus::Proposed),
        proposal("voted", 1, ProposalStatus::Proposed),
        proposal("closed", 1, ProposalStatus::Accepted),
        proposal("expired", 31, ProposalStatus::Proposed),
    ]
}

fn votes() -> HashMap<String, Vec<Vote>> {
    let mut votes = HashMap::new();
    votes.insert(
        "voted".to_string(),
        vec![Vote {
            proposal_id: "voted".to_string(),
            voter_email: "bob@example.com".to_string(),
            decision: Decision::Yes,
            comment: String::new(),
            voted_at: now(),
        }],
    );
    votes
}

fn ids(items: &[guardian_governance::InboxItem<'_>]) -> Vec<String> {
    items.iter().map(|i| i.proposal.id.clone()).collect()
}

/// INB-01: Open, unexpired, unvoted proposals in input order.
#[test]
fn test_inbox_filters() {
    let proposals = proposals();
    let items = inbox(&proposals, &votes(), &constitution(), &InboxQuery::new("bob@example.com", now()));

    assert_eq!(ids(&items), vec!["fresh", "old"]);
    assert_eq!(items[0].age, TimeDelta::days(2));
    assert!(!items[0].stale);
    assert!(items[1].stale, "ten days exceeds the default seven");
}

/// INB-02: Another voter still sees proposals bob already voted on.
#[test]
fn test_votes_are_per_voter() {
    let proposals = proposals();
    let items = inbox(&proposals, &votes(), &constitution(), &InboxQuery::new("alice@example.com", now()));
    assert_eq!(ids(&items), vec!["fresh", "old", "voted"]);
}

/// INB-03: Non-voters get an empty inbox.
#[test]
fn test_non_voter() {
    let proposals = proposals();
    let items = inbox(&proposals, &votes(), &constitution(), &InboxQuery::new("gina@example.com", now()));
    assert!(items.is_empty());
}

/// INB-04: `since` keeps only proposals created strictly after it.
#[test]
fn test_since() {
    let proposals = proposals();
    let query = InboxQuery::new("alice@example.com", now()).since(now() - TimeDelta::days(2));
    let items = inbox(&proposals, &votes(), &constitution(), &query);
    assert_eq!(ids(&items), vec!["voted"]);
}

/// INB-05: The stale threshold follows `[inbox]` config.
#[test]
fn test_stale_threshold_from_config() {
    let proposals = proposals();
    let config = InboxConfig {
        stale_after_days: Some(1),
    };
    let query = InboxQuery::new("bob@example.com", now()).with_config(&config);
    let items = inbox(&proposals, &votes(), &constitution(), &query);
    assert!(items.iter().all(|i| i.stale));
}
