//! Logging setup
//!
//! Library code only emits `tracing` events; binaries install the subscriber.

use crate::config::LoggingConfig;
use crate::utils::error::{PortalError, Result};
use tracing_subscriber::EnvFilter;

/// Build the event filter: `RUST_LOG` when set, otherwise the configured level
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_ascii_lowercase()))
}

/// Install the global tracing subscriber. Events go to stderr so stdout
/// carries only command output.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_target(config.with_target)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| PortalError::Config(format!("Failed to initialize logging: {}", e)))
}
