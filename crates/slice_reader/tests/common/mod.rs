//! Shared helpers for integration tests.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber for test output.
///
/// Safe to call from every test. Only installs when `RUST_LOG` is set, e.g.
/// `RUST_LOG=slice_reader=trace cargo test`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another harness may already have installed a global subscriber.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(filter)
                .try_init();
        }
    });
}
