//! Diagnostic logging.
//!
//! Log lines go to stderr so they never interleave with the stdout transcript.
//! The filter comes from `FINANCE_LOG`, then `RUST_LOG`, and defaults to `warn`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "FINANCE_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Initialize tracing for the process. Later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
