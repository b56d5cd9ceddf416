//! Exception filtering.
//!
//! Exception paths use plain single-segment globs; `**` is not expanded here.

use chrono::{DateTime, Utc};

use guardian_core::models::Exception;

use crate::paths::match_simple;
use crate::rules::Violation;

/// Exceptions active at `now`, in input order.
pub fn active_exceptions(exceptions: &[Exception], now: DateTime<Utc>) -> Vec<&Exception> {
    exceptions.iter().filter(|e| e.is_active(now)).collect()
}

/// True if an exception for the violation's rule covers its file.
pub fn is_excepted(violation: &Violation, active: &[&Exception]) -> bool {
    active
        .iter()
        .filter(|e| e.rule_id == violation.rule_id)
        .any(|e| e.paths.iter().any(|p| match_simple(&violation.file_path, p)))
}

/// Drop every violation covered by an exception active at `now`.
pub fn apply_exceptions(
    violations: Vec<Violation>,
    exceptions: &[Exception],
    now: DateTime<Utc>,
) -> Vec<Violation> {
    let active = active_exceptions(exceptions, now);
    if active.is_empty() {
        return violations;
    }
    violations
        .into_iter()
        .filter(|v| !is_excepted(v, &active))
        .collect()
}
