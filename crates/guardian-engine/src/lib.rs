//! Rule-checking engine for Guardian.
//!
//! Parses unified diffs, evaluates the configured rule kinds against the
//! changed files and added lines, guards the governance files through the meta
//! check, and filters the results through time-bounded exceptions.

pub mod diff;
pub mod engine;
pub mod meta;
pub mod paths;
pub mod rules;

pub use engine::{CheckEngine, EngineOutcome};
pub use rules::{CheckContext, CheckerRegistry, RuleCheck, RuleKind, Violation};
