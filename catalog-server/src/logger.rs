//! Logging Infrastructure
//!
//! Console tracing setup. The service runs on platforms that collect
//! stdout, so there is no file appender or rotation here.

use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence; `level` is the fallback default (normally
/// from `LOG_LEVEL`).
pub fn init_logger(level: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {e}"))?;

    Ok(())
}
