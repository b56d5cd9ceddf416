//! Rule definitions as declared in `rules.yml`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::GuardianError;

/// Severity levels for rules and the violations they produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single team rule. `rule_type` is the dispatch key into the checker
/// registry; `config` stays loosely typed until the engine compiles it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub rule_type: String,
    #[serde(default)]
    pub config: Map<String, Value>,
    pub severity: Severity,
}

impl Rule {
    pub fn new(id: impl Into<String>, rule_type: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            rule_type: rule_type.into(),
            config: Map::new(),
            severity,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }
}

/// The `rules.yml` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesFile {
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RulesFile {
    pub fn from_yaml(yaml: &str) -> Result<Self, GuardianError> {
        super::from_yaml("rules", yaml)
    }
}
