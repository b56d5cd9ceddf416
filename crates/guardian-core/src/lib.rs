//! Core types, errors, config, validation and tracing for Guardian.
//!
//! Guardian enforces team-defined code rules against git diffs and resolves
//! governance votes on proposed rule changes. This crate holds the shared
//! vocabulary; the rule-checking engine lives in `guardian-engine` and the
//! quorum/tally engine in `guardian-governance`.

pub mod config;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod validation;
