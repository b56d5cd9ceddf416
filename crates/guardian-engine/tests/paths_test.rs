//! Path matcher tests.
//! PTH-01 through PTH-07

use guardian_engine::paths::{match_simple, matches, matches_any, GlobList, GlobPattern};

/// PTH-01: A bare `prefix/**` matches anything under the prefix.
#[test]
fn test_prefix_only() {
    assert!(matches("domain/service/User.kt", "domain/**"));
    assert!(!matches("app/service/User.kt", "domain/**"));
}

/// PTH-02: A leading `**` tries the suffix against every tail.
#[test]
fn test_prefix_and_suffix() {
    assert!(matches("src/model.kt", "**/*.kt"));
    assert!(matches("model.kt", "**/*.kt"));
    assert!(!matches("docs/readme.md", "**/*.kt"));
    assert!(matches("src/domain/api/Handler.kt", "src/**/api/*.kt"));
    assert!(!matches("src/domain/api/v1/Handler.kt", "src/**/api/*.kt"));
}

/// PTH-03: Without `**`, wildcards stay within one segment.
#[test]
fn test_single_segment() {
    assert!(matches("domain/User.kt", "domain/*.kt"));
    assert!(!matches("domain/legacy/User.kt", "domain/*.kt"));
    assert!(matches("a/b.rs", "a/?.rs"));
    assert!(!matches("a//.rs", "a/?/.rs"));
    assert!(matches("x/c.kt", "x/[a-c].kt"));
    assert!(!matches("x/d.kt", "x/[a-c].kt"));
    assert!(matches("x/d.kt", "x/[^a-c].kt"));
}

/// PTH-04: Only the first `**` splits; a later `**` behaves like `*`.
#[test]
fn test_second_recursive_wildcard() {
    assert!(matches("a/x/b/y.kt", "a/**/b/**.kt"));
    assert!(!matches("a/x/b/z/y.kt", "a/**/b/**.kt"));
}

/// PTH-05: Exceptions use plain matching where `**` does not recurse.
#[test]
fn test_simple_matcher_ignores_recursion() {
    assert!(match_simple("domain/legacy/OldAdapter.kt", "domain/legacy/*.kt"));
    assert!(!match_simple("domain/legacy/deep/OldAdapter.kt", "domain/**"));
    assert!(match_simple("domain/legacy", "domain/**"));
}

/// PTH-06: Precompiled lists agree with the one-shot helpers.
#[test]
fn test_glob_list() {
    let globs = ["domain/**", "**/*.sql"];
    let list = GlobList::new(globs);
    let files: Vec<String> = ["domain/a.kt", "app/b.kt", "db/migrations/1.sql"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(list.filter(&files), vec!["domain/a.kt", "db/migrations/1.sql"]);
    for f in &files {
        assert_eq!(list.matches_any(f), matches_any(f, &globs));
    }
    assert_eq!(GlobPattern::new("domain/**").as_str(), "domain/**");
    assert!(!GlobList::default().matches_any("anything"));
}

/// PTH-07: Character classes never match the separator, negated or not.
#[test]
fn test_class_does_not_match_separator() {
    assert!(match_simple("a-b", "a[!x]b"));
    assert!(!match_simple("a/b", "a[!x]b"));
    assert!(!match_simple("a/b", "a[^x]b"));
    assert!(!match_simple("a/b", "a[/]b"));
}
