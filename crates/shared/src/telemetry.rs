use tracing_subscriber::EnvFilter;

use crate::error::DemoError;

/// Installs the global fmt subscriber. `filter` uses `EnvFilter` directive syntax.
pub fn init(filter: &str) -> Result<(), DemoError> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|err| DemoError::Telemetry(format!("invalid log filter '{filter}': {err}")))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| DemoError::Telemetry(err.to_string()))
}
