//! `diff_pattern_forbidden`: added lines must not match any forbidden regex.

use rustc_hash::FxHashSet;

use guardian_core::errors::CheckError;
use guardian_core::models::Rule;

use super::config::{optional_string_list, string_list};
use super::pattern_set::PatternSet;
use super::types::{CheckContext, Violation};
use crate::paths::GlobList;

pub const TYPE_NAME: &str = "diff_pattern_forbidden";

/// Compiled `diff_pattern_forbidden` rule config.
#[derive(Debug, Clone)]
pub struct DiffPatternForbidden {
    forbidden: PatternSet,
    /// Scope; `None` means every changed file.
    only_in_paths: Option<GlobList>,
}

impl DiffPatternForbidden {
    pub fn from_rule(rule: &Rule) -> Result<Self, CheckError> {
        let forbidden = PatternSet::compile(&rule.id, &string_list(rule, "forbidden_regexes")?)?;
        let only_in_paths = optional_string_list(rule, "only_in_paths").map(GlobList::new);
        Ok(Self {
            forbidden,
            only_in_paths,
        })
    }

    /// One violation per matching added line, in diff order.
    pub fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<Violation> {
        let in_scope: FxHashSet<&str> = match &self.only_in_paths {
            Some(globs) => globs.filter(ctx.changed_files).into_iter().collect(),
            None => ctx.changed_files.iter().map(String::as_str).collect(),
        };
        if in_scope.is_empty() {
            return Vec::new();
        }

        let mut violations = Vec::new();
        for file_diff in ctx.file_diffs {
            if !in_scope.contains(file_diff.path.as_str()) {
                continue;
            }
            for line in &file_diff.added_lines {
                if self.forbidden.is_match(line) {
                    violations.push(ctx.violation(&file_diff.path, format!("+{line}")));
                }
            }
        }
        violations
    }
}
