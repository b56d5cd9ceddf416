//! Compiled regex lists, matched in a single pass per line.

use regex::{Regex, RegexSet};

use guardian_core::errors::CheckError;

/// The regexes of one config key, compiled into a `RegexSet`.
#[derive(Debug, Clone)]
pub struct PatternSet {
    regex_set: RegexSet,
}

impl PatternSet {
    /// Compile `patterns`. The first invalid pattern is reported by name.
    pub fn compile(rule_id: &str, patterns: &[String]) -> Result<Self, CheckError> {
        for pattern in patterns {
            Regex::new(pattern).map_err(|e| pattern_error(rule_id, pattern, e))?;
        }
        let regex_set =
            RegexSet::new(patterns).map_err(|e| pattern_error(rule_id, &patterns.join(" | "), e))?;
        Ok(Self { regex_set })
    }

    /// Fast boolean check: does any pattern match `line`.
    pub fn is_match(&self, line: &str) -> bool {
        self.regex_set.is_match(line)
    }

    pub fn patterns(&self) -> &[String] {
        self.regex_set.patterns()
    }

    pub fn len(&self) -> usize {
        self.regex_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regex_set.is_empty()
    }
}

fn pattern_error(rule_id: &str, pattern: &str, err: regex::Error) -> CheckError {
    CheckError::Pattern {
        rule_id: rule_id.to_string(),
        pattern: pattern.to_string(),
        message: err.to_string(),
    }
}
