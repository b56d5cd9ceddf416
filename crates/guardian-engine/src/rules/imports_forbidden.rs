//! `imports_forbidden`: files in one area must not reference another area.
//!
//! This is a text heuristic over added lines, not import analysis. Each
//! `forbid_globs` entry is reduced to a path segment (`infra/**` becomes
//! `infra`) and a line is flagged when it contains `segment/` or `segment.`
//! anywhere. Comments and string literals count too.

use aho_corasick::AhoCorasick;
use rustc_hash::FxHashMap;

use guardian_core::errors::CheckError;
use guardian_core::models::Rule;

use super::config::string_list;
use super::types::{CheckContext, Violation};
use crate::diff::FileDiff;
use crate::paths::GlobList;

pub const TYPE_NAME: &str = "imports_forbidden";

/// Compiled `imports_forbidden` rule config.
#[derive(Debug, Clone)]
pub struct ImportsForbidden {
    from_globs: GlobList,
    forbid_segments: Vec<String>,
    /// `segment/` and `segment.` for every segment; `None` when there are no
    /// segments, in which case nothing is ever flagged.
    needles: Option<AhoCorasick>,
}

impl ImportsForbidden {
    pub fn from_rule(rule: &Rule) -> Result<Self, CheckError> {
        let from_globs = string_list(rule, "from_globs")?;
        let forbid_globs = string_list(rule, "forbid_globs")?;
        let forbid_segments = forbidden_segments(&forbid_globs);

        let needles = if forbid_segments.is_empty() {
            None
        } else {
            let patterns = forbid_segments
                .iter()
                .flat_map(|seg| [format!("{seg}/"), format!("{seg}.")]);
            let automaton = AhoCorasick::new(patterns).map_err(|e| CheckError::Config {
                rule_id: rule.id.clone(),
                key: "forbid_globs".to_string(),
                message: e.to_string(),
            })?;
            Some(automaton)
        };

        Ok(Self {
            from_globs: GlobList::new(&from_globs),
            forbid_segments,
            needles,
        })
    }

    pub fn forbid_segments(&self) -> &[String] {
        &self.forbid_segments
    }

    /// One violation per offending added line of each changed file in scope.
    pub fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<Violation> {
        let Some(needles) = &self.needles else {
            return Vec::new();
        };

        // A later section for the same path replaces an earlier one.
        let by_path: FxHashMap<&str, &FileDiff> = ctx
            .file_diffs
            .iter()
            .map(|fd| (fd.path.as_str(), fd))
            .collect();

        let mut violations = Vec::new();
        for file in ctx.changed_files {
            if !self.from_globs.matches_any(file) {
                continue;
            }
            let Some(file_diff) = by_path.get(file.as_str()) else {
                continue;
            };
            for line in &file_diff.added_lines {
                if needles.is_match(line) {
                    violations.push(ctx.violation(file, format!("+{line}")));
                }
            }
        }
        violations
    }
}

/// Strip trailing `*` then trailing `/` from each glob; empty results are dropped.
pub fn forbidden_segments(globs: &[String]) -> Vec<String> {
    globs
        .iter()
        .map(|g| g.trim_end_matches('*').trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
