//! The check engine: every configured rule over one diff, then exceptions.

pub mod exceptions;

pub use exceptions::{active_exceptions, apply_exceptions, is_excepted};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use guardian_core::config::FailOn;
use guardian_core::errors::CheckError;
use guardian_core::models::{Exception, Rule, Severity};

use crate::rules::{ChangeSet, CheckerRegistry, RuleCheck, Violation};

/// Surviving violations of one run with their severity counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOutcome {
    pub violations: Vec<Violation>,
    pub error_count: usize,
    pub warning_count: usize,
}

impl EngineOutcome {
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        let mut outcome = Self {
            violations,
            ..Self::default()
        };
        outcome.recount();
        outcome
    }

    /// Append violations that bypass exception filtering (the meta check).
    pub fn merge(&mut self, extra: Vec<Violation>) {
        self.violations.extend(extra);
        self.recount();
    }

    /// `fail_on = error` fails on any error; `warning` on any error or warning.
    pub fn passed(&self, fail_on: FailOn) -> bool {
        match fail_on {
            FailOn::Error => self.error_count == 0,
            FailOn::Warning => self.error_count == 0 && self.warning_count == 0,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    fn recount(&mut self) {
        self.error_count = self.count(Severity::Error);
        self.warning_count = self.count(Severity::Warning);
    }

    fn count(&self, severity: Severity) -> usize {
        self.violations.iter().filter(|v| v.severity == severity).count()
    }
}

/// Runs a rule list against changed files and a diff.
#[derive(Debug, Clone)]
pub struct CheckEngine {
    registry: CheckerRegistry,
    rules: Vec<Rule>,
    exceptions: Vec<Exception>,
}

impl CheckEngine {
    pub fn new(registry: CheckerRegistry, rules: Vec<Rule>, exceptions: Vec<Exception>) -> Self {
        Self {
            registry,
            rules,
            exceptions,
        }
    }

    /// An engine over the built-in rule kinds.
    pub fn with_builtin_rules(rules: Vec<Rule>, exceptions: Vec<Exception>) -> Self {
        Self::new(CheckerRegistry::builtin(), rules, exceptions)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn exceptions(&self) -> &[Exception] {
        &self.exceptions
    }

    pub fn registry(&self) -> &CheckerRegistry {
        &self.registry
    }

    /// Compile every rule in declaration order, stopping at the first error.
    /// Loaders call this to reject a bad rules file before any diff exists.
    pub fn compile(&self) -> Result<Vec<RuleCheck>, CheckError> {
        self.rules.iter().map(|rule| self.registry.compile(rule)).collect()
    }

    /// [`run_at`](Self::run_at) with the current time.
    pub fn run(&self, changed_files: &[String], diff_content: &str) -> Result<EngineOutcome, CheckError> {
        self.run_at(changed_files, diff_content, Utc::now())
    }

    /// Evaluate all rules and drop violations covered by exceptions active at `now`.
    ///
    /// Any rule error aborts the whole run; no partial outcome is returned.
    #[instrument(skip_all, fields(rule_count = self.rules.len(), file_count = changed_files.len()))]
    pub fn run_at(
        &self,
        changed_files: &[String],
        diff_content: &str,
        now: DateTime<Utc>,
    ) -> Result<EngineOutcome, CheckError> {
        let checks = self.compile()?;
        let changes = ChangeSet::new(changed_files, diff_content);

        let mut violations = Vec::new();
        for (rule, check) in self.rules.iter().zip(&checks) {
            let found = check.evaluate(&changes.context(rule));
            debug!(rule_id = %rule.id, kind = %check.kind(), violations = found.len(), "rule evaluated");
            violations.extend(found);
        }

        let raised = violations.len();
        let outcome = EngineOutcome::from_violations(apply_exceptions(violations, &self.exceptions, now));
        info!(
            raised,
            excepted = raised - outcome.violations.len(),
            errors = outcome.error_count,
            warnings = outcome.warning_count,
            "check complete"
        );
        Ok(outcome)
    }
}
