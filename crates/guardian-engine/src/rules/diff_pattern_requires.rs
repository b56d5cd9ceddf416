//! `diff_pattern_requires`: touching certain paths requires a pattern somewhere
//! in the diff.
//!
//! The search for the required pattern spans every added line of the whole
//! diff, not only the files that triggered the rule.

use guardian_core::errors::CheckError;
use guardian_core::models::Rule;

use super::config::string_list;
use super::pattern_set::PatternSet;
use super::types::{CheckContext, Violation};
use crate::paths::GlobList;

pub const TYPE_NAME: &str = "diff_pattern_requires";

/// Compiled `diff_pattern_requires` rule config.
#[derive(Debug, Clone)]
pub struct DiffPatternRequires {
    required: PatternSet,
    only_in_paths: GlobList,
}

impl DiffPatternRequires {
    pub fn from_rule(rule: &Rule) -> Result<Self, CheckError> {
        let required = PatternSet::compile(&rule.id, &string_list(rule, "required_regexes")?)?;
        let only_in_paths = GlobList::new(&string_list(rule, "only_in_paths")?);
        Ok(Self {
            required,
            only_in_paths,
        })
    }

    /// At most one violation, attributed to the first changed file in scope.
    pub fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<Violation> {
        let Some(first) = ctx
            .changed_files
            .iter()
            .find(|f| self.only_in_paths.matches_any(f))
        else {
            return Vec::new();
        };

        if ctx.all_added_lines().any(|line| self.required.is_match(line)) {
            return Vec::new();
        }

        vec![ctx.violation(first, String::new())]
    }
}
