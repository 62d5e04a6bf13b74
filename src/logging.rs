//! Diagnostic logging setup.
//!
//! User-facing output goes through `ui::messages`; this subscriber only
//! carries diagnostics and writes them to stderr so that stdout (including
//! `calc --json`) stays clean.

use tracing_subscriber::EnvFilter;

/// Environment variable read before `RUST_LOG`.
pub const LOG_ENV: &str = "RDEPARTURE_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) is ignored.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
