//! Rule kinds, their typed configs and the checker registry.

pub mod config;
pub mod diff_pattern_forbidden;
pub mod diff_pattern_requires;
pub mod imports_forbidden;
pub mod pattern_set;
pub mod registry;
pub mod types;

pub use diff_pattern_forbidden::DiffPatternForbidden;
pub use diff_pattern_requires::DiffPatternRequires;
pub use imports_forbidden::ImportsForbidden;
pub use pattern_set::PatternSet;
pub use registry::{CheckerRegistry, RuleCheck, RuleKind};
pub use types::{ChangeSet, CheckContext, Violation};
