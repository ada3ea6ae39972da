//! Bootstrap utilities for the smoke binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LOG_ENV_VAR;

/// Default filter when LOG_ENV_VAR is unset.
///
/// Runs only log below this level, so the console report stays exactly
/// as specified unless logging is asked for.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize tracing with the APP_SMOKE_LOG environment variable.
///
/// Events go to stderr so they never interleave with the pass lines on stdout.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
