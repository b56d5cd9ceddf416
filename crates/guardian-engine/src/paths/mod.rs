//! Path matching for rule scopes and exceptions.
//!
//! Two matchers live here. [`match_simple`] is plain single-segment glob
//! matching: `*`, `?` and `[...]` classes never match a `/`, and a malformed
//! pattern matches nothing. [`GlobPattern`] adds `**` on top of it
//! with a prefix-then-any-tail rule: the pattern is split on its first `**`,
//! the path must start with the prefix, and the remaining suffix (if any) must
//! match one of the `/`-separated tails of whatever follows the prefix.
//! That is narrower than true recursive globbing and the difference is
//! observable at suffix boundaries.

pub mod glob_pattern;

pub use glob_pattern::{GlobList, GlobPattern};

use glob::{MatchOptions, Pattern};

const RECURSIVE: &str = "**";

const OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Match `path` against `pattern`, expanding a `**` in the pattern.
pub fn matches(path: &str, pattern: &str) -> bool {
    GlobPattern::new(pattern).matches(path)
}

/// True if any pattern matches `path` under [`matches`].
pub fn matches_any<S: AsRef<str>>(path: &str, patterns: &[S]) -> bool {
    patterns.iter().any(|p| matches(path, p.as_ref()))
}

/// Single-segment glob match with no `**` expansion. A `**` here behaves like
/// a single `*`.
pub fn match_simple(path: &str, pattern: &str) -> bool {
    compile_simple(pattern).is_some_and(|p| p.matches_with(path, OPTIONS))
}

/// Compile a single-segment pattern; `None` when it is malformed.
pub(crate) fn compile_simple(pattern: &str) -> Option<Pattern> {
    Pattern::new(&to_glob_syntax(pattern)).ok()
}

pub(crate) fn matches_compiled(pattern: &Pattern, path: &str) -> bool {
    pattern.matches_with(path, OPTIONS)
}

/// Rewrite shell-style pattern syntax into what the `glob` crate accepts:
/// runs of `*` collapse to one (they never cross a separator anyway), `[^` is
/// class negation, and `\x` escapes a metacharacter.
fn to_glob_syntax(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '*' if !in_class => {
                while chars.peek() == Some(&'*') {
                    chars.next();
                }
                out.push('*');
            }
            '[' if !in_class => {
                in_class = true;
                out.push('[');
                if chars.peek() == Some(&'^') {
                    chars.next();
                    out.push('!');
                }
            }
            ']' if in_class => {
                in_class = false;
                out.push(']');
            }
            '\\' if !in_class => match chars.next() {
                Some(escaped @ ('*' | '?' | '[' | ']')) => {
                    out.push('[');
                    out.push(escaped);
                    out.push(']');
                }
                Some(other) => out.push(other),
                // A trailing backslash is malformed; keep it so compilation fails.
                None => out.push_str("[\\"),
            },
            other => out.push(other),
        }
    }

    out
}
