//! Tracing/logging initialization.
//!
//! Prompt and reply logging in the llm crate sits behind `debug!`, so
//! `RUST_LOG=chefbyte_llm=debug` recovers the old debugging view.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
