use crate::error::{GrantError, Result};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LEVEL: &str = "warn";

pub fn level_for(verbose: u8, quiet: bool, configured: Option<&str>) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => configured.unwrap_or(DEFAULT_LEVEL),
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

/// Installs the stderr subscriber. `RUST_LOG` overrides `level` when set.
pub fn init(level: &str) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|source| {
            GrantError::Telemetry(format!("invalid log level '{level}': {source}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|err| GrantError::Telemetry(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_flags_override_config() {
        assert_eq!(level_for(0, false, None), "warn");
        assert_eq!(level_for(0, false, Some("info")), "info");
        assert_eq!(level_for(1, false, Some("error")), "info");
        assert_eq!(level_for(2, false, None), "debug");
        assert_eq!(level_for(5, false, None), "trace");
        assert_eq!(level_for(2, true, Some("debug")), "error");
    }
}
