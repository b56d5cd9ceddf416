//! Core types shared by every rule checker.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use guardian_core::models::{Rule, Severity};

use crate::diff::{parse_diff, FileDiff};

/// A single violation produced by a checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule_id: String,
    pub severity: Severity,
    pub description: String,
    pub file_path: String,
    /// The offending added line with its leading `+`, or empty.
    pub diff_snippet: String,
    /// Filled in after the engine runs by an optional explanation step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_explanation: Option<String>,
}

impl Violation {
    pub fn new(
        rule_id: impl Into<String>,
        severity: Severity,
        description: impl Into<String>,
        file_path: impl Into<String>,
        diff_snippet: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            severity,
            description: description.into(),
            file_path: file_path.into(),
            diff_snippet: diff_snippet.into(),
            llm_explanation: None,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.llm_explanation = Some(explanation.into());
        self
    }
}

/// The changed files and diff of one check run, with the diff parsed once.
#[derive(Debug, Clone)]
pub struct ChangeSet<'a> {
    pub changed_files: &'a [String],
    pub diff_content: &'a str,
    pub file_diffs: Vec<FileDiff>,
}

impl<'a> ChangeSet<'a> {
    pub fn new(changed_files: &'a [String], diff_content: &'a str) -> Self {
        Self {
            changed_files,
            diff_content,
            file_diffs: parse_diff(diff_content),
        }
    }

    /// The evaluation context for `rule` against these changes.
    pub fn context<'r>(&'r self, rule: &'r Rule) -> CheckContext<'r> {
        CheckContext {
            changed_files: self.changed_files,
            diff_content: self.diff_content,
            file_diffs: &self.file_diffs,
            rule,
        }
    }
}

/// Everything a checker reads while evaluating one rule. Read-only.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub changed_files: &'a [String],
    pub diff_content: &'a str,
    pub file_diffs: &'a [FileDiff],
    pub rule: &'a Rule,
}

impl<'a> CheckContext<'a> {
    pub fn rule_id(&self) -> &'a str {
        &self.rule.id
    }

    pub fn severity(&self) -> Severity {
        self.rule.severity
    }

    pub fn rule_description(&self) -> &'a str {
        &self.rule.description
    }

    pub fn rule_config(&self) -> &'a Map<String, Value> {
        &self.rule.config
    }

    /// A violation of this context's rule.
    pub fn violation(&self, file_path: &str, diff_snippet: String) -> Violation {
        Violation::new(
            self.rule.id.as_str(),
            self.rule.severity,
            self.rule.description.as_str(),
            file_path,
            diff_snippet,
        )
    }

    /// Every added line in the diff, in file order.
    pub fn all_added_lines(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.file_diffs
            .iter()
            .flat_map(|fd| fd.added_lines.iter().map(String::as_str))
    }
}
