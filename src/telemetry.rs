use crate::error::{LeaseBuyError, Result};
use tracing_subscriber::EnvFilter;

/// Log filter for the CLI verbosity flags; `RUST_LOG` wins when set.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn init(verbose: u8, quiet: bool) -> Result<()> {
    let level = level_for(verbose, quiet);
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| {
            LeaseBuyError::Telemetry(format!("invalid log filter '{level}': {e}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| LeaseBuyError::Telemetry(e.to_string()))
}
