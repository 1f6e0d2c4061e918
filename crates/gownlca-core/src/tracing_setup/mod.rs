//! Tracing setup: subscriber initialization and structured event helpers.

pub mod events;

use tracing_subscriber::EnvFilter;

use crate::config::defaults::LOG_FILTER_ENV;
use crate::config::ObservabilityConfig;
use crate::errors::{GownlcaError, GownlcaResult};

/// Build the filter: `GOWNLCA_LOG` if set and valid, else the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global subscriber.
///
/// Returns [`GownlcaError::TracingInit`] if a global subscriber is already set.
pub fn init_tracing(config: &ObservabilityConfig) -> GownlcaResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_target(true);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| GownlcaError::TracingInit {
        message: e.to_string(),
    })
}
