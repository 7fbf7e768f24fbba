//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing produces:
//!     → logging.rs (structured log events)
//!     → metrics.rs (resolution and navigation counters)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (path, outcome, navigation id)
//! - Metrics are cheap (no-ops until a recorder is installed)

pub mod logging;
pub mod metrics;
