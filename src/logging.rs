//! Tracing subscriber setup for binaries.
//!
//! Library code only emits events; installing a subscriber is left to the
//! executable, which calls [`init_tracing`] once at startup.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Installs a global `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` directives take precedence over [`Config::log_level`]. Output is
/// JSON when [`Config::log_format`] is `json`, plain text otherwise.
///
/// # Errors
///
/// Returns an error if the level is not a valid filter or a global
/// subscriber was already installed.
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;
    }

    Ok(())
}
