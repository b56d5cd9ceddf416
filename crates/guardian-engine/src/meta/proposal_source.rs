//! Sources that answer "is there an accepted proposal?".

use std::path::{Path, PathBuf};

use guardian_core::errors::CheckError;
use guardian_core::models::{Proposal, ProposalStatus};

const ACCEPTED_MARKER: &[u8] = b"status: accepted";

pub trait ProposalStatusSource {
    fn has_accepted_proposal(&self) -> Result<bool, CheckError>;
}

impl ProposalStatusSource for [Proposal] {
    fn has_accepted_proposal(&self) -> Result<bool, CheckError> {
        Ok(self.iter().any(|p| p.status == ProposalStatus::Accepted))
    }
}

impl ProposalStatusSource for Vec<Proposal> {
    fn has_accepted_proposal(&self) -> Result<bool, CheckError> {
        self.as_slice().has_accepted_proposal()
    }
}

/// A directory of proposal YAML files, searched as raw bytes.
///
/// A file counts as accepted when it contains `status: accepted` anywhere.
/// The files are not parsed.
#[derive(Debug, Clone)]
pub struct ProposalDirectory {
    dir: PathBuf,
}

impl ProposalDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn store_error(&self, err: std::io::Error) -> CheckError {
        CheckError::ProposalStore {
            path: self.dir.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl ProposalStatusSource for ProposalDirectory {
    /// A missing directory means no proposals. Unreadable files are skipped.
    fn has_accepted_proposal(&self) -> Result<bool, CheckError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(self.store_error(e)),
        };

        for entry in entries {
            let path = entry.map_err(|e| self.store_error(e))?.path();
            if path.is_dir() || !is_yaml(&path) {
                continue;
            }
            match std::fs::read(&path) {
                Ok(content) if contains_marker(&content) => return Ok(true),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable proposal file");
                }
            }
        }

        Ok(false)
    }
}

/// Byte search, so a file with stray non-UTF-8 bytes still counts.
fn contains_marker(content: &[u8]) -> bool {
    content
        .windows(ACCEPTED_MARKER.len())
        .any(|window| window == ACCEPTED_MARKER)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
}
