//! Check engine tests.
//! ENG-01 through ENG-07

use chrono::{DateTime, TimeZone, Utc};
use guardian_core::config::FailOn;
use guardian_core::errors::{CheckError, GuardianErrorCode};
use guardian_core::models::{Exception, Rule, RulesFile, Severity};
use guardian_engine::meta::MetaChecker;
use guardian_engine::rules::{CheckerRegistry, RuleKind};
use guardian_engine::CheckEngine;
use serde_json::json;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn domain_rule() -> Rule {
    Rule::new("domain_no_infra", "imports_forbidden", Severity::Error)
        .with_description("Domain must not depend on infra")
        .with_config("from_globs", json!(["domain/**"]))
        .with_config("forbid_globs", json!(["infra/**"]))
}

fn todo_rule() -> Rule {
    Rule::new("no_todo", "diff_pattern_forbidden", Severity::Warning)
        .with_description("No TODOs")
        .with_config("forbidden_regexes", json!(["TODO"]))
}

fn legacy_exception(rule_id: &str, expires_at: Option<DateTime<Utc>>) -> Exception {
    Exception {
        id: "exc-legacy".to_string(),
        rule_id: rule_id.to_string(),
        paths: vec!["domain/legacy/*.kt".to_string()],
        reason: "legacy adapter pending migration".to_string(),
        created_by: "alice@example.com".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        expires_at,
    }
}

fn changed() -> Vec<String> {
    vec!["domain/legacy/OldAdapter.kt".to_string()]
}

const DIFF: &str = "\
diff --git a/domain/legacy/OldAdapter.kt b/domain/legacy/OldAdapter.kt
--- a/domain/legacy/OldAdapter.kt
+++ b/domain/legacy/OldAdapter.kt
@@ -1,2 +1,3 @@
 package domain.legacy
+import com.myapp.infra.http.Client
+// TODO remove
";

/// ENG-01: Violations from every rule, in declaration order, with counts.
#[test]
fn test_run_collects_in_rule_order() {
    let engine = CheckEngine::with_builtin_rules(vec![todo_rule(), domain_rule()], vec![]);
    let outcome = engine.run_at(&changed(), DIFF, now()).unwrap();

    let ids: Vec<&str> = outcome.violations.iter().map(|v| v.rule_id.as_str()).collect();
    assert_eq!(ids, vec!["no_todo", "domain_no_infra"]);
    assert_eq!(outcome.error_count, 1);
    assert_eq!(outcome.warning_count, 1);
    assert!(!outcome.passed(FailOn::Error));
}

/// ENG-02: A permanent exception suppresses the matching violation only.
#[test]
fn test_exception_suppresses() {
    let engine = CheckEngine::with_builtin_rules(
        vec![domain_rule(), todo_rule()],
        vec![legacy_exception("domain_no_infra", None)],
    );
    let outcome = engine.run_at(&changed(), DIFF, now()).unwrap();

    assert_eq!(outcome.violations.len(), 1);
    assert_eq!(outcome.violations[0].rule_id, "no_todo");
    assert_eq!(outcome.error_count, 0);
    assert!(outcome.passed(FailOn::Error));
    assert!(!outcome.passed(FailOn::Warning));
}

/// ENG-03: An exception for another rule does not suppress.
#[test]
fn test_exception_for_other_rule() {
    let engine = CheckEngine::with_builtin_rules(
        vec![domain_rule()],
        vec![legacy_exception("some_other_rule", None)],
    );
    let outcome = engine.run_at(&changed(), DIFF, now()).unwrap();
    assert_eq!(outcome.error_count, 1);
}

/// ENG-04: Expired exceptions do not suppress; future expiry still does.
#[test]
fn test_exception_expiry() {
    let past = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let engine = CheckEngine::with_builtin_rules(
        vec![domain_rule()],
        vec![legacy_exception("domain_no_infra", Some(past))],
    );
    assert_eq!(engine.run_at(&changed(), DIFF, now()).unwrap().error_count, 1);

    let future = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let engine = CheckEngine::with_builtin_rules(
        vec![domain_rule()],
        vec![legacy_exception("domain_no_infra", Some(future))],
    );
    assert!(engine.run_at(&changed(), DIFF, now()).unwrap().is_clean());
}

/// ENG-05: Exception paths do not expand `**` into nested directories.
#[test]
fn test_exception_paths_are_single_segment() {
    let mut exception = legacy_exception("domain_no_infra", None);
    exception.paths = vec!["domain/**".to_string()];
    let engine = CheckEngine::with_builtin_rules(vec![domain_rule()], vec![exception]);
    assert_eq!(engine.run_at(&changed(), DIFF, now()).unwrap().error_count, 1);
}

/// ENG-06: One bad rule aborts the whole run.
#[test]
fn test_fail_fast() {
    let bad = Rule::new("bad", "diff_pattern_forbidden", Severity::Error)
        .with_config("forbidden_regexes", json!(["(unclosed"]));
    let unknown = Rule::new("mystery", "ast_magic", Severity::Error);

    let engine = CheckEngine::with_builtin_rules(vec![domain_rule(), bad, unknown.clone()], vec![]);
    let err = engine.run_at(&changed(), DIFF, now()).unwrap_err();
    assert!(matches!(err, CheckError::Pattern { .. }));
    assert_eq!(err.error_code(), "PATTERN_ERROR");
    assert!(engine.compile().is_err());

    let engine = CheckEngine::with_builtin_rules(vec![unknown], vec![]);
    let err = engine.run_at(&changed(), DIFF, now()).unwrap_err();
    assert!(matches!(err, CheckError::UnknownRuleType { ref rule_type, .. } if rule_type == "ast_magic"));
}

/// ENG-07: Custom registries and meta violations merged after filtering.
#[test]
fn test_custom_registry_and_meta_merge() {
    let mut registry = CheckerRegistry::new();
    registry.register("no_todo_alias", RuleKind::DiffPatternForbidden);
    let mut rule = todo_rule();
    rule.rule_type = "no_todo_alias".to_string();

    let rules = RulesFile { rules: vec![rule] };
    let engine = CheckEngine::new(registry, rules.rules, vec![]);
    let mut files = changed();
    files.push(".agreements/rules.yml".to_string());

    let mut outcome = engine.run_at(&files, DIFF, now()).unwrap();
    assert_eq!((outcome.error_count, outcome.warning_count), (0, 1));

    let meta = MetaChecker::new().check(&files, || Ok(false)).unwrap();
    outcome.merge(meta);
    assert_eq!((outcome.error_count, outcome.warning_count), (1, 1));
    assert_eq!(outcome.violations[1].rule_id, "meta_check");
}
