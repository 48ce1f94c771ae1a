//! Logging initialization for the CLI driver.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::shared::error::ReconcileError;
use crate::shared::Result;

const LOG_TARGET: &str = "oracle_license_reconciler";

/// Installs a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at `INFO`, or
/// `DEBUG` when `verbose` is set.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = build_filter(verbose)?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ReconcileError::InvalidConfig {
            message: format!("Failed to install log subscriber: {}", e),
        })?;

    Ok(())
}

fn build_filter(verbose: bool) -> Result<EnvFilter> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("{}={}", LOG_TARGET, level)))
        .map_err(|e| ReconcileError::InvalidConfig {
            message: format!("Failed to create log filter: {}", e),
        })?;

    Ok(filter)
}
