//! Structured logging setup and span names.

use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter.
pub const LOG_ENV: &str = "WALLETRATE_LOG";

/// Install a global `fmt` subscriber writing to stderr.
///
/// `filter` takes precedence over `WALLETRATE_LOG`; both fall back to `warn`.
/// Calling this twice is harmless: the second install is ignored.
pub fn init_tracing(filter: Option<&str>) {
    let filter = filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_env(LOG_ENV).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Create the span wrapping one wallet rating.
#[macro_export]
macro_rules! rate_span {
    ($wallet:expr, $variant:expr) => {
        tracing::info_span!("walletrate.rate", wallet = %$wallet, variant = %$variant)
    };
}
