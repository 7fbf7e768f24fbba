//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Route table invariants (unique paths and names, root redirect)
//! - Validate setting values (log level)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::RouterConfig;
use crate::observability::logging::parse_level;
use crate::routing::table::{RouteTable, TableError};

/// A semantic problem in a parsed configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("routes: {0}")]
    Route(#[from] TableError),

    #[error("observability.log_level: unknown level '{0}'")]
    LogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors: Vec<ValidationError> = match RouteTable::from_config(&config.routes) {
        Ok(_) => Vec::new(),
        Err(table_errors) => table_errors.into_iter().map(ValidationError::from).collect(),
    };

    if parse_level(&config.observability.log_level).is_err() {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
