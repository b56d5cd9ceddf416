//! The checker registry: rule type strings to the closed set of rule kinds.
//!
//! A registry is a plain value owned by whoever builds the engine. Two engines
//! with different registries never see each other's entries.

use std::fmt;

use rustc_hash::FxHashMap;

use guardian_core::errors::CheckError;
use guardian_core::models::Rule;

use super::types::{CheckContext, Violation};
use super::{diff_pattern_forbidden, diff_pattern_requires, imports_forbidden};
use super::{DiffPatternForbidden, DiffPatternRequires, ImportsForbidden};

/// The rule kinds the engine knows how to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    ImportsForbidden,
    DiffPatternForbidden,
    DiffPatternRequires,
}

impl RuleKind {
    pub const ALL: [RuleKind; 3] = [
        Self::ImportsForbidden,
        Self::DiffPatternForbidden,
        Self::DiffPatternRequires,
    ];

    /// The built-in `type` string for this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ImportsForbidden => imports_forbidden::TYPE_NAME,
            Self::DiffPatternForbidden => diff_pattern_forbidden::TYPE_NAME,
            Self::DiffPatternRequires => diff_pattern_requires::TYPE_NAME,
        }
    }

    /// Parse and validate `rule.config` into this kind's typed config.
    pub fn build(&self, rule: &Rule) -> Result<RuleCheck, CheckError> {
        Ok(match self {
            Self::ImportsForbidden => RuleCheck::ImportsForbidden(ImportsForbidden::from_rule(rule)?),
            Self::DiffPatternForbidden => {
                RuleCheck::DiffPatternForbidden(DiffPatternForbidden::from_rule(rule)?)
            }
            Self::DiffPatternRequires => {
                RuleCheck::DiffPatternRequires(DiffPatternRequires::from_rule(rule)?)
            }
        })
    }

    /// Evaluate `ctx.rule` as this kind in one step.
    pub fn check(&self, ctx: &CheckContext<'_>) -> Result<Vec<Violation>, CheckError> {
        Ok(self.build(ctx.rule)?.evaluate(ctx))
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A rule whose config has been compiled for its kind.
#[derive(Debug, Clone)]
pub enum RuleCheck {
    ImportsForbidden(ImportsForbidden),
    DiffPatternForbidden(DiffPatternForbidden),
    DiffPatternRequires(DiffPatternRequires),
}

impl RuleCheck {
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::ImportsForbidden(_) => RuleKind::ImportsForbidden,
            Self::DiffPatternForbidden(_) => RuleKind::DiffPatternForbidden,
            Self::DiffPatternRequires(_) => RuleKind::DiffPatternRequires,
        }
    }

    pub fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<Violation> {
        match self {
            Self::ImportsForbidden(check) => check.evaluate(ctx),
            Self::DiffPatternForbidden(check) => check.evaluate(ctx),
            Self::DiffPatternRequires(check) => check.evaluate(ctx),
        }
    }
}

/// Maps rule `type` strings to rule kinds.
#[derive(Debug, Clone, Default)]
pub struct CheckerRegistry {
    kinds: FxHashMap<String, RuleKind>,
}

impl CheckerRegistry {
    /// An empty registry; every rule type is unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in kind under its own type name.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for kind in RuleKind::ALL {
            registry.register(kind.type_name(), kind);
        }
        registry
    }

    /// Register `kind` under `type_name`, returning the kind it replaced.
    pub fn register(&mut self, type_name: impl Into<String>, kind: RuleKind) -> Option<RuleKind> {
        self.kinds.insert(type_name.into(), kind)
    }

    pub fn get(&self, type_name: &str) -> Option<RuleKind> {
        self.kinds.get(type_name).copied()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.kinds.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.kinds.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The kind registered for `rule.rule_type`.
    pub fn resolve(&self, rule: &Rule) -> Result<RuleKind, CheckError> {
        self.get(&rule.rule_type)
            .ok_or_else(|| CheckError::UnknownRuleType {
                rule_id: rule.id.clone(),
                rule_type: rule.rule_type.clone(),
            })
    }

    /// Resolve and compile one rule.
    pub fn compile(&self, rule: &Rule) -> Result<RuleCheck, CheckError> {
        self.resolve(rule)?.build(rule)
    }
}
