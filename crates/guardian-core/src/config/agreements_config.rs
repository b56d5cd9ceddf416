//! Location of the governance documents.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where `constitution.yml`, `rules.yml` and the proposal, vote and exception
/// directories live, relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AgreementsConfig {
    /// Agreements directory. Default: `.agreements`.
    pub dir: Option<String>,
}

impl AgreementsConfig {
    pub const DEFAULT_DIR: &'static str = ".agreements";

    /// Returns the effective agreements directory, defaulting to `.agreements`.
    pub fn effective_dir(&self) -> &str {
        self.dir.as_deref().unwrap_or(Self::DEFAULT_DIR)
    }

    pub fn root(&self, project_root: &Path) -> PathBuf {
        project_root.join(self.effective_dir())
    }

    pub fn constitution_path(&self, project_root: &Path) -> PathBuf {
        self.root(project_root).join("constitution.yml")
    }

    pub fn rules_path(&self, project_root: &Path) -> PathBuf {
        self.root(project_root).join("rules.yml")
    }

    pub fn proposals_dir(&self, project_root: &Path) -> PathBuf {
        self.root(project_root).join("proposals")
    }

    /// Votes are stored as `<votes_dir>/<proposal_id>/<voter>.yml`.
    pub fn votes_dir(&self, project_root: &Path) -> PathBuf {
        self.root(project_root).join("votes")
    }

    pub fn exceptions_dir(&self, project_root: &Path) -> PathBuf {
        self.root(project_root).join("exceptions")
    }
}
