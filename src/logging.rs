//! Subscriber setup for the `tracing` events this crate emits.
//!
//! The library only emits events; installing a subscriber is left to the
//! binary. Filtering follows `RUST_LOG`, e.g.
//! `RUST_LOG=u_fleet::benchmark=debug,u_fleet::allocation=trace`.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

fn subscriber(is_test: bool) -> impl tracing::Subscriber + Send + Sync {
    let stderr_log = (!is_test).then(fmt::layer);
    let test_log = is_test.then(|| fmt::layer().with_test_writer());
    let env_filter = EnvFilter::from_default_env();
    registry().with(stderr_log).with(test_log).with(env_filter)
}

/// Installs a stderr subscriber filtered by `RUST_LOG` as the global default.
///
/// Fails if a global subscriber is already set.
pub fn init_logging() -> Result<(), TryInitError> {
    subscriber(false).try_init()
}

/// Like [`init_logging`] but routes output through the test harness capture
/// and ignores repeated calls.
pub fn init_test_logging() {
    subscriber(true).try_init().ok();
}
