//! Routing metrics.
//!
//! # Metrics
//! - `router_resolutions_total` (counter): path lookups by outcome
//!   (`view`, `redirect`, `no_match`)
//! - `router_navigations_total` (counter): navigator pushes by outcome
//!   (`ok`, `not_found`, `unknown_name`)
//!
//! # Design Decisions
//! - No exporter here; the host installs a recorder if it wants the numbers
//! - Labels are static strings

pub const RESOLUTIONS_TOTAL: &str = "router_resolutions_total";
pub const NAVIGATIONS_TOTAL: &str = "router_navigations_total";

/// Register metric descriptions with the installed recorder.
pub fn describe_metrics() {
    ::metrics::describe_counter!(RESOLUTIONS_TOTAL, "Route table lookups by outcome");
    ::metrics::describe_counter!(NAVIGATIONS_TOTAL, "Navigations by outcome");
}

pub fn record_resolution(outcome: &'static str) {
    ::metrics::counter!(RESOLUTIONS_TOTAL, "outcome" => outcome).increment(1);
}

pub fn record_navigation(outcome: &'static str) {
    ::metrics::counter!(NAVIGATIONS_TOTAL, "outcome" => outcome).increment(1);
}
