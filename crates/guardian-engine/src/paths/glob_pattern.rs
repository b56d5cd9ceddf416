//! Precompiled `**`-aware glob patterns.

use glob::Pattern;

use super::{compile_simple, matches_compiled, RECURSIVE};

#[derive(Debug, Clone)]
enum Matcher {
    /// The pattern (or its suffix) is malformed; matches nothing.
    Invalid,
    /// No `**`: plain single-segment matching.
    Simple(Pattern),
    /// `prefix/**` with nothing after: any path starting with `prefix`.
    Under { prefix: String },
    /// `prefix/**/suffix`: any tail of the remainder must match `suffix`.
    Tail { prefix: String, suffix: Pattern },
}

/// A glob compiled once and matched many times.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    source: String,
    matcher: Matcher,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> Self {
        let matcher = match pattern.split_once(RECURSIVE) {
            None => compile_simple(pattern).map_or(Matcher::Invalid, Matcher::Simple),
            Some((prefix, suffix)) => {
                let prefix = prefix.trim_end_matches('/').to_string();
                let suffix = suffix.trim_start_matches('/');
                if suffix.is_empty() {
                    Matcher::Under { prefix }
                } else {
                    compile_simple(suffix)
                        .map_or(Matcher::Invalid, |suffix| Matcher::Tail { prefix, suffix })
                }
            }
        };

        Self {
            source: pattern.to_string(),
            matcher,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, path: &str) -> bool {
        match &self.matcher {
            Matcher::Invalid => false,
            Matcher::Simple(pattern) => matches_compiled(pattern, path),
            Matcher::Under { prefix } => path.starts_with(prefix.as_str()),
            Matcher::Tail { prefix, suffix } => {
                let Some(rest) = path.strip_prefix(prefix.as_str()) else {
                    return false;
                };
                let rest = rest.trim_start_matches('/');
                tail_starts(rest).any(|start| matches_compiled(suffix, &rest[start..]))
            }
        }
    }
}

/// Byte offsets of `rest` and of every sub-path after a `/`.
fn tail_starts(rest: &str) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0).chain(rest.match_indices('/').map(|(i, _)| i + 1))
}

/// An ordered list of compiled globs from one config key.
#[derive(Debug, Clone, Default)]
pub struct GlobList {
    patterns: Vec<GlobPattern>,
}

impl GlobList {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| GlobPattern::new(p.as_ref()))
                .collect(),
        }
    }

    pub fn matches_any(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(path))
    }

    /// The paths from `files` that match at least one pattern, in order.
    pub fn filter<'a>(&self, files: &'a [String]) -> Vec<&'a str> {
        files
            .iter()
            .map(String::as_str)
            .filter(|f| self.matches_any(f))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_starts() {
        let starts: Vec<usize> = tail_starts("a/bc/d").collect();
        assert_eq!(starts, vec![0, 2, 5]);
        assert_eq!(tail_starts("").count(), 1);
    }

    #[test]
    fn test_prefix_is_raw_string_prefix() {
        // The prefix is compared as a string, not as a path segment.
        let pattern = GlobPattern::new("domain/**");
        assert!(pattern.matches("domainish/file.kt"));
        assert!(pattern.matches("domain"));
    }
}
