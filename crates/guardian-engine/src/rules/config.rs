//! Typed reads from a rule's loosely typed `config` map.

use serde_json::Value;

use guardian_core::errors::CheckError;
use guardian_core::models::Rule;

/// A required list of strings.
pub fn string_list(rule: &Rule, key: &str) -> Result<Vec<String>, CheckError> {
    match rule.config.get(key) {
        Some(value) => to_strings(rule, key, value),
        None => Err(CheckError::missing_key(&rule.id, key)),
    }
}

/// An optional list of strings. An empty list reads as absent, and so does a
/// value of the wrong shape, which is logged and otherwise ignored.
pub fn optional_string_list(rule: &Rule, key: &str) -> Option<Vec<String>> {
    let value = match rule.config.get(key) {
        None | Some(Value::Null) => return None,
        Some(value) => value,
    };
    match to_strings(rule, key, value) {
        Ok(items) => (!items.is_empty()).then_some(items),
        Err(e) => {
            tracing::warn!(rule_id = %rule.id, key, error = %e, "ignoring malformed optional config key");
            None
        }
    }
}

fn to_strings(rule: &Rule, key: &str, value: &Value) -> Result<Vec<String>, CheckError> {
    let Value::Array(items) = value else {
        return Err(shape_error(
            rule,
            key,
            format!("expected a list of strings, got {}", type_name(value)),
        ));
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(shape_error(
                rule,
                key,
                format!("expected string elements, got {}", type_name(other)),
            )),
        })
        .collect()
}

fn shape_error(rule: &Rule, key: &str, message: String) -> CheckError {
    CheckError::Config {
        rule_id: rule.id.clone(),
        key: key.to_string(),
        message,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guardian_core::models::Severity;
    use serde_json::json;

    fn rule() -> Rule {
        Rule::new("r1", "imports_forbidden", Severity::Error)
            .with_config("globs", json!(["a/**", "b/*"]))
            .with_config("empty", json!([]))
            .with_config("scalar", json!("a/**"))
            .with_config("mixed", json!(["a", 3]))
    }

    #[test]
    fn test_string_list() {
        let rule = rule();
        assert_eq!(string_list(&rule, "globs").unwrap(), vec!["a/**", "b/*"]);
        assert!(string_list(&rule, "empty").unwrap().is_empty());
    }

    #[test]
    fn test_shape_errors_name_the_key() {
        let rule = rule();
        let err = string_list(&rule, "scalar").unwrap_err();
        assert!(err.to_string().contains("expected a list of strings, got string"));
        let err = string_list(&rule, "mixed").unwrap_err();
        assert!(err.to_string().contains("expected string elements, got number"));
        let err = string_list(&rule, "absent").unwrap_err();
        assert!(matches!(err, CheckError::Config { ref key, .. } if key == "absent"));
    }

    #[test]
    fn test_optional_list() {
        let rule = rule();
        assert_eq!(optional_string_list(&rule, "absent"), None);
        assert_eq!(optional_string_list(&rule, "empty"), None);
        assert_eq!(optional_string_list(&rule, "globs"), Some(vec!["a/**".to_string(), "b/*".to_string()]));
    }

    #[test]
    fn test_optional_list_ignores_wrong_shape() {
        let rule = rule();
        assert_eq!(optional_string_list(&rule, "scalar"), None);
        assert_eq!(optional_string_list(&rule, "mixed"), None);
    }
}
