//! Logging init: stderr subscriber with env-filter control.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// Returns Err if a global subscriber is already installed, so embedding
/// applications that bring their own subscriber can ignore the failure.
pub fn init_logging_stderr() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,response_url=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install global tracing subscriber")?;
    Ok(())
}
