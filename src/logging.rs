use std::io;

use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Installs the global subscriber. Everything goes to stderr; `RUST_LOG`
/// wins over the `verbose` flag when set.
pub fn init(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("failed to install log subscriber: {}", e))?;

    Ok(())
}
