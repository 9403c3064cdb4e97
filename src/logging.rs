// src/logging.rs
//! Tracing subscriber setup for the binary.

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a tracing filter, e.g. `levgroups_core=debug`.
pub const LOG_ENV: &str = "LEVGROUPS_LOG";

static INIT: Once = Once::new();

/// Installs a stderr subscriber. `LEVGROUPS_LOG` wins over `verbose`.
///
/// Idempotent; later calls are ignored.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "levgroups_core=debug,levgroups=debug"
        } else {
            "levgroups_core=warn,levgroups=warn"
        };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbose),
            )
            .with(filter)
            .init();
    });
}
