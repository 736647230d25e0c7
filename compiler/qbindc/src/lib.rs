//! qbind command-line front end.
//!
//! Reads a parsed query as JSON (the upstream parser's output), optionally a
//! JSON object of parameter values, and prints the interpolated query.
//!
//! # Environment Variables
//!
//! - `RUST_LOG=qbind_interp=debug`: one event per interpolation pass.
//! - `RUST_LOG=qbind_interp=trace`: one event per parameter occurrence.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Only installs a subscriber when `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
