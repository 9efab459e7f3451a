//! Diagnostic logging setup
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - one line per highlighted block
//! - `RUST_LOG=rtdocs::syntax=trace` - per-rule span counts

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the tracing subscriber, logging to stderr
///
/// Stdout carries rendered output, so logs never go there. Defaults to
/// `warn` when RUST_LOG is unset or invalid.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
