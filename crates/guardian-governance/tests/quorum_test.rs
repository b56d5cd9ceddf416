//! Quorum calculator tests.
//! QRM-01 through QRM-07

use guardian_core::models::{QuorumConfig, QuorumType};
use guardian_governance::quorum::{calculate_quorum, calculate_required, QuorumOutcome};
use proptest::prelude::*;

/// QRM-01: Majority accepts at the threshold and rejects once foreclosed.
#[test]
fn test_majority() {
    let accepted = calculate_quorum(&QuorumConfig::majority(), 5, 3, 2);
    assert_eq!(accepted.required, 3);
    assert_eq!(accepted.result, QuorumOutcome::Accepted);

    let rejected = calculate_quorum(&QuorumConfig::majority(), 5, 1, 3);
    assert_eq!(rejected.required, 3);
    assert_eq!(rejected.result, QuorumOutcome::Rejected);

    let pending = calculate_quorum(&QuorumConfig::majority(), 5, 2, 2);
    assert_eq!(pending.result, QuorumOutcome::Pending);
}

/// QRM-02: Two thirds rounds up.
#[test]
fn test_two_thirds_boundary() {
    let result = calculate_quorum(&QuorumConfig::two_thirds(), 3, 2, 1);
    assert_eq!(result.required, 2);
    assert_eq!(result.result, QuorumOutcome::Accepted);
}

/// QRM-03: Zero eligible voters under majority is rejected, not pending.
#[test]
fn test_zero_eligible() {
    let result = calculate_quorum(&QuorumConfig::majority(), 0, 0, 0);
    assert_eq!(result.required, 1);
    assert_eq!(result.result, QuorumOutcome::Rejected);
    assert_eq!(result.total_eligible, 0);
}

/// QRM-04: Unanimous is rejected by a single no.
#[test]
fn test_unanimous() {
    let config = QuorumConfig::unanimous();
    assert_eq!(calculate_quorum(&config, 4, 3, 0).result, QuorumOutcome::Pending);
    assert_eq!(calculate_quorum(&config, 4, 3, 1).result, QuorumOutcome::Rejected);
    assert_eq!(calculate_quorum(&config, 4, 4, 0).result, QuorumOutcome::Accepted);
}

/// QRM-05: Custom thresholds use ceil(total * threshold).
#[test]
fn test_custom() {
    assert_eq!(calculate_required(&QuorumConfig::custom(0.6), 10), 6);
    assert_eq!(calculate_required(&QuorumConfig::custom(0.61), 10), 7);
    assert_eq!(calculate_required(&QuorumConfig::custom(1.0), 7), 7);
}

/// QRM-06: An unspecified type falls back to majority.
#[test]
fn test_unspecified_falls_back_to_majority() {
    let unspecified = QuorumConfig::new(QuorumType::Unspecified);
    for total in 0..20 {
        assert_eq!(
            calculate_required(&unspecified, total),
            calculate_required(&QuorumConfig::majority(), total)
        );
    }
}

fn config_strategy() -> impl Strategy<Value = QuorumConfig> {
    prop_oneof![
        Just(QuorumConfig::majority()),
        Just(QuorumConfig::two_thirds()),
        Just(QuorumConfig::unanimous()),
        (0.01f64..=1.0).prop_map(QuorumConfig::custom),
    ]
}

proptest! {
    /// QRM-07: Outcomes are consistent with the counts that produced them.
    #[test]
    fn prop_outcome_consistent(
        config in config_strategy(),
        total in 0usize..200,
        yes_share in 0usize..200,
        no_share in 0usize..200,
    ) {
        let yes = yes_share.min(total);
        let no = no_share.min(total - yes);
        let result = calculate_quorum(&config, total, yes, no);

        prop_assert!(result.required <= total + 1);
        prop_assert_ne!(result.result, QuorumOutcome::Expired);
        match result.result {
            QuorumOutcome::Accepted => prop_assert!(yes >= result.required),
            QuorumOutcome::Rejected => {
                prop_assert!(yes < result.required);
                // Even if every undecided voter said yes, the threshold is out of reach.
                prop_assert!(total - no < result.required);
            }
            QuorumOutcome::Pending => {
                prop_assert!(yes < result.required);
                prop_assert!(total - no >= result.required);
            }
            QuorumOutcome::Expired => unreachable!(),
        }

        // One more yes never makes the outcome worse.
        if yes + no < total && result.result == QuorumOutcome::Accepted {
            let more = calculate_quorum(&config, total, yes + 1, no);
            prop_assert_eq!(more.result, QuorumOutcome::Accepted);
        }
    }
}
