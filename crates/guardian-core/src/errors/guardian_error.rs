//! Top-level error aggregating every subsystem.

use super::error_code::{self, GuardianErrorCode};
use super::{CheckError, ConfigError, GovernanceError, ValidationError};

/// Errors surfaced to the outer layers (CLI, hooks, CI integrations).
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum GuardianError {
    #[error("Check error: {0}")]
    Check(#[from] CheckError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Governance error: {0}")]
    Governance(#[from] GovernanceError),

    #[error("Malformed {kind} document: {message}")]
    Document { kind: &'static str, message: String },
}

impl GuardianError {
    pub(crate) fn document(kind: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Document {
            kind,
            message: err.to_string(),
        }
    }
}

impl GuardianErrorCode for GuardianError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Check(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Validation(e) => e.error_code(),
            Self::Governance(e) => e.error_code(),
            Self::Document { .. } => error_code::DOCUMENT_ERROR,
        }
    }
}
