//! Tracing setup for the binary and the shell
//!
//! The budget core never logs; only the shell emits events.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

static TRACING_INIT: Once = Once::new();

/// Default filter for a `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "expense_tracker=warn",
        1 => "expense_tracker=info",
        2 => "expense_tracker=debug",
        _ => "expense_tracker=trace",
    }
}

/// Install the global subscriber, writing to stderr. Safe to call twice.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
