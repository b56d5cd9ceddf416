//! GuardianErrorCode trait for callers that need a stable error identifier.

/// Every error enum implements this to expose a structured error code string
/// that outer layers (CLI exit mapping, JSON reports) can match on.
pub trait GuardianErrorCode {
    /// Returns the error code string (e.g., "PATTERN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RULE_CONFIG_ERROR: &str = "RULE_CONFIG_ERROR";
pub const PATTERN_ERROR: &str = "PATTERN_ERROR";
pub const UNKNOWN_RULE_TYPE: &str = "UNKNOWN_RULE_TYPE";
pub const PROPOSAL_STORE_ERROR: &str = "PROPOSAL_STORE_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const GOVERNANCE_ERROR: &str = "GOVERNANCE_ERROR";
pub const DOCUMENT_ERROR: &str = "DOCUMENT_ERROR";
