//! Top-level Guardian configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AgreementsConfig, CheckConfig, FailOn, InboxConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "guardian.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`GUARDIAN_*`)
/// 3. Project config (`guardian.toml` in project root)
/// 4. User config (`~/.guardian/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GuardianConfig {
    pub agreements: AgreementsConfig,
    pub check: CheckConfig,
    pub inbox: InboxConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub agreements_dir: Option<String>,
    pub fail_on: Option<String>,
}

impl GuardianConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &GuardianConfig) -> Result<(), ConfigError> {
        if let Some(ref fail_on) = config.check.fail_on {
            if let Err(message) = fail_on.parse::<FailOn>() {
                return Err(ConfigError::ValidationFailed {
                    field: "check.fail_on".to_string(),
                    message,
                });
            }
        }
        if let Some(ref dir) = config.agreements.dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "agreements.dir".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if config.inbox.stale_after_days == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "inbox.stale_after_days".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.guardian/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".guardian").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut GuardianConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GuardianConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut GuardianConfig, other: &GuardianConfig) {
        if other.agreements.dir.is_some() {
            base.agreements.dir = other.agreements.dir.clone();
        }
        if other.check.fail_on.is_some() {
            base.check.fail_on = other.check.fail_on.clone();
        }
        if other.inbox.stale_after_days.is_some() {
            base.inbox.stale_after_days = other.inbox.stale_after_days;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `GUARDIAN_AGREEMENTS_DIR`, `GUARDIAN_CHECK_FAIL_ON`, ...
    fn apply_env_overrides(config: &mut GuardianConfig) {
        if let Ok(val) = std::env::var("GUARDIAN_AGREEMENTS_DIR") {
            config.agreements.dir = Some(val);
        }
        if let Ok(val) = std::env::var("GUARDIAN_CHECK_FAIL_ON") {
            config.check.fail_on = Some(val);
        }
        if let Ok(val) = std::env::var("GUARDIAN_INBOX_STALE_AFTER_DAYS") {
            if let Ok(v) = val.parse::<u32>() {
                config.inbox.stale_after_days = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut GuardianConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.agreements_dir {
            config.agreements.dir = Some(v.clone());
        }
        if let Some(ref v) = cli.fail_on {
            config.check.fail_on = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
