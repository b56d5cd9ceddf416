//! Unified-diff parsing into per-file added lines.

pub mod parser;

pub use parser::{parse_diff, FileDiff};
