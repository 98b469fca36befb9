// src/logging.rs
//
// Log output for the server binary.
//
// Library code logs through the `log` facade; the subscriber installed here
// also receives those records, alongside the request spans emitted by
// tower-http.

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

/// Install the global subscriber. `filter` uses `EnvFilter` directive syntax.
pub fn init_logging(filter: &str) -> AppResult<()> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| AppError::Config(format!("Invalid log filter {:?}: {}", filter, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| AppError::Other(format!("Logging already initialized: {}", e)))?;

    Ok(())
}
