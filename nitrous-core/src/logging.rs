//! Tracing setup for host shells
//!
//! Logs always go to stderr; stdout belongs to the host.

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber
///
/// `level` is used when `RUST_LOG` is unset (e.g. "info", "nitrous_core=debug").
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
