//! Tests for the Guardian tracing setup.

use std::sync::Mutex;

use guardian_core::tracing::init_tracing;

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

/// TRC-01: GUARDIAN_LOG with per-crate levels is accepted.
#[test]
fn test_per_crate_filter() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("GUARDIAN_LOG", "guardian_engine=debug,guardian_governance=warn");
    init_tracing();
    std::env::remove_var("GUARDIAN_LOG");
}

/// TRC-02: init_tracing() is idempotent.
#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}
