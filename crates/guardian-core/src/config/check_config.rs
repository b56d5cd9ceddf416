//! Check configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lowest violation severity that fails a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

impl FromStr for FailOn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            other => Err(format!("expected \"error\" or \"warning\", got {other:?}")),
        }
    }
}

/// Configuration for `guardian check`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CheckConfig {
    /// Fail level: "error" | "warning". Default: "error".
    pub fail_on: Option<String>,
}

impl CheckConfig {
    /// Returns the effective fail level, defaulting to `FailOn::Error`.
    /// Unparseable values are rejected earlier by `GuardianConfig::validate`.
    pub fn effective_fail_on(&self) -> FailOn {
        self.fail_on
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(FailOn::Error)
    }
}
