//! Logging initialisation via tracing-subscriber.
//!
//! The library itself only emits `tracing` events (coercions, type
//! mismatches, serializer fallbacks); binaries call [`init`] once to see them.

use tracing_subscriber::EnvFilter;

use crate::error::{PhrasalError, Result};

/// Initialise the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence, `level` is the fallback.
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| PhrasalError::Logger(format!("invalid log level '{level}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| PhrasalError::Logger(format!("failed to set subscriber: {e}")))?;

    Ok(())
}
