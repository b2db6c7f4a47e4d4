//! Tracing setup for embedding applications.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize a global tracing subscriber.
///
/// Respects `RUST_LOG`, falling back to the provided default directive
/// (e.g. "info"). Outputs to stderr with targets. Should be called once at
/// application startup; library code only emits events and never installs
/// a subscriber on its own.
pub fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}
