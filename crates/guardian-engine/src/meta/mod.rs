//! The always-on meta check guarding the governance files.
//!
//! Changing the constitution or the rule definitions requires at least one
//! accepted proposal. Whether one exists is answered by an injected source;
//! the check itself never touches the filesystem.

pub mod proposal_source;

pub use proposal_source::{ProposalDirectory, ProposalStatusSource};

use guardian_core::errors::CheckError;
use guardian_core::models::Severity;

use crate::rules::Violation;

/// Rule id carried by every meta-check violation.
pub const META_RULE_ID: &str = "meta_check";

/// Governance files that need an accepted proposal before they change.
pub const PROTECTED_FILES: &[&str] = &[".agreements/constitution.yml", ".agreements/rules.yml"];

/// True if `path`, with platform separators normalized to `/`, is protected.
pub fn is_protected(path: &str) -> bool {
    let normalized = normalize(path);
    PROTECTED_FILES.iter().any(|p| *p == normalized)
}

fn normalize(path: &str) -> String {
    if std::path::MAIN_SEPARATOR == '/' {
        path.to_string()
    } else {
        path.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MetaChecker;

impl MetaChecker {
    pub fn new() -> Self {
        Self
    }

    /// One error per protected file in `changed_files` when no accepted
    /// proposal exists. `has_accepted` is called at most once, and only if a
    /// protected file was touched.
    pub fn check<F>(&self, changed_files: &[String], has_accepted: F) -> Result<Vec<Violation>, CheckError>
    where
        F: FnOnce() -> Result<bool, CheckError>,
    {
        let touched: Vec<&str> = changed_files
            .iter()
            .map(String::as_str)
            .filter(|f| is_protected(f))
            .collect();
        if touched.is_empty() || has_accepted()? {
            return Ok(Vec::new());
        }

        tracing::debug!(files = touched.len(), "protected files changed without an accepted proposal");
        Ok(touched
            .into_iter()
            .map(|file| {
                Violation::new(
                    META_RULE_ID,
                    Severity::Error,
                    format!("Changes to {file} require an accepted proposal"),
                    file,
                    "",
                )
            })
            .collect())
    }

    /// [`check`](Self::check) against a [`ProposalStatusSource`].
    pub fn check_with<S>(&self, changed_files: &[String], source: &S) -> Result<Vec<Violation>, CheckError>
    where
        S: ProposalStatusSource + ?Sized,
    {
        self.check(changed_files, || source.has_accepted_proposal())
    }
}
