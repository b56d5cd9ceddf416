//! Line-oriented unified-diff parser.
//!
//! Only what the rule checkers need is kept: the new-side path of every file
//! section and the text of its added lines, in file order.

use serde::{Deserialize, Serialize};

const FILE_MARKER: &str = "diff --git ";
const NEW_PATH_MARKER: &str = "+++ b/";
const OLD_PATH_MARKER: &str = "--- ";
const HUNK_MARKER: &str = "@@";

/// Added lines of one file touched by a diff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiff {
    /// New-side path, empty if the section had no `+++ b/` header.
    pub path: String,
    /// Added lines without the leading `+`. Empty strings are kept.
    pub added_lines: Vec<String>,
}

impl FileDiff {
    pub fn is_empty(&self) -> bool {
        self.added_lines.is_empty()
    }
}

/// Parse unified-diff text into one [`FileDiff`] per `diff --git` section.
///
/// Lines before the first section header are ignored. A section with no added
/// lines is still returned. Lines are split on `\n` only, so a trailing `\r`
/// stays part of the line text.
pub fn parse_diff(diff_content: &str) -> Vec<FileDiff> {
    let mut files = Vec::new();
    if diff_content.is_empty() {
        return files;
    }

    let mut current: Option<FileDiff> = None;

    for line in diff_content.split('\n') {
        if line.starts_with(FILE_MARKER) {
            if let Some(done) = current.take() {
                files.push(done);
            }
            current = Some(FileDiff::default());
            continue;
        }

        if let Some(path) = line.strip_prefix(NEW_PATH_MARKER) {
            if let Some(file) = current.as_mut() {
                file.path = path.to_string();
            }
            continue;
        }

        if line.starts_with(OLD_PATH_MARKER) || line.starts_with(HUNK_MARKER) {
            continue;
        }

        if let (Some(added), Some(file)) = (line.strip_prefix('+'), current.as_mut()) {
            file.added_lines.push(added.to_string());
        }
    }

    if let Some(done) = current {
        files.push(done);
    }

    files
}
