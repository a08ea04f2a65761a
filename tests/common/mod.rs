//! Common test utilities for hotcold.

pub mod assertions;

use std::sync::Once;

static INIT: Once = Once::new();

/// Install a tracing subscriber once for the whole test binary.
///
/// Lets `RUST_LOG=debug cargo test` show the table-build events.
pub fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}
