//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Pick the log level from config, CLI or `RUST_LOG`
//!
//! # Design Decisions
//! - `RUST_LOG` wins over config so a run can be inspected without edits
//! - Logs go to stderr; stdout carries command output only

use std::str::FromStr;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig};

/// Accept a level name (trace, debug, info, warn, error, off).
pub fn parse_level(level: &str) -> Result<String, String> {
    LevelFilter::from_str(level)
        .map(|_| level.to_string())
        .map_err(|e| format!("unknown log level '{}': {}", level, e))
}

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(config: &ObservabilityConfig, level_override: Option<&str>) -> String {
    let level = level_override.unwrap_or(config.log_level.as_str());
    format!("view_router={}", level.to_lowercase())
}

/// Install the global subscriber.
pub fn init_logging(
    config: &ObservabilityConfig,
    level_override: Option<&str>,
) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config, level_override)));
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(layer.pretty())
            .try_init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .try_init(),
    }
}
