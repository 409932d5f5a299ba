//! Logging setup
//!
//! Components log through `tracing` with a bracketed tag (`[RENDER]`,
//! `[INPUT]`, `[NETWORK]`, ...). The binary installs a `fmt` subscriber
//! filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// `default_directive` is used when `RUST_LOG` is unset or invalid.
/// Calling this twice is harmless; the second call is ignored.
pub fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("[LOGGING] Subscriber already installed");
    }
}
