use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install the console logger: full timestamps, written to stderr so stdout
/// only carries command output.
pub fn init(level: &str, verbose: bool) -> Result<()> {
    let directive = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| anyhow!("invalid log level {:?}: {}", directive, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {}", e))
}
