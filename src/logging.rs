//! Tracing subscriber setup for binaries embedding the engine.

use tracing_subscriber::{EnvFilter, fmt};

use grc_core::config::logging::LoggingConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Output goes to stderr so that
/// command output on stdout stays machine-readable. Calling this twice is a
/// no-op.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init(),
        _ => fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init(),
    };
    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
