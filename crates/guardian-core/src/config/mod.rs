//! Configuration system for Guardian.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod agreements_config;
pub mod check_config;
pub mod guardian_config;
pub mod inbox_config;

pub use agreements_config::AgreementsConfig;
pub use check_config::{CheckConfig, FailOn};
pub use guardian_config::{CliOverrides, GuardianConfig};
pub use inbox_config::InboxConfig;
