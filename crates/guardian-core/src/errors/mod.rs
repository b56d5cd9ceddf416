//! Error handling for Guardian.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod check_error;
pub mod config_error;
pub mod error_code;
pub mod governance_error;
pub mod guardian_error;
pub mod validation_error;

pub use check_error::CheckError;
pub use config_error::ConfigError;
pub use error_code::GuardianErrorCode;
pub use governance_error::GovernanceError;
pub use guardian_error::GuardianError;
pub use validation_error::ValidationError;
