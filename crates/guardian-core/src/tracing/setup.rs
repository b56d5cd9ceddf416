//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "GUARDIAN_LOG";

/// Filter used when `GUARDIAN_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "guardian=info";

static INIT: Once = Once::new();

/// Initialize the Guardian tracing/logging system.
///
/// Reads `GUARDIAN_LOG` for per-subsystem log levels, e.g.
/// `GUARDIAN_LOG=guardian_engine=debug,guardian_governance=info`.
///
/// Falls back to `guardian=info` if `GUARDIAN_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed by the host (tests, CLI).
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    });
}
