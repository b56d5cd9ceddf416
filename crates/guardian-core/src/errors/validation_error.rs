//! Document validation errors.

use std::fmt;

use super::error_code::{self, GuardianErrorCode};

/// All problems found while validating one document, reported together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// What was validated: "constitution", "rules", "proposal", ...
    pub subject: &'static str,
    pub problems: Vec<String>,
}

impl ValidationError {
    pub fn new(subject: &'static str, problems: Vec<String>) -> Self {
        Self { subject, problems }
    }

    /// True if any problem message contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.problems.iter().any(|p| p.contains(needle))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation failed:", self.subject)?;
        for problem in &self.problems {
            write!(f, "\n  - {problem}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl GuardianErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
