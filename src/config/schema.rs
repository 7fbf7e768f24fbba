//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::route::{Route, Target, View};
use crate::routing::table::{default_routes, TableError};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Route definitions, in match order.
    pub routes: Vec<RouteConfig>,

    /// Navigation history settings.
    pub history: HistoryConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            routes: default_routes().iter().map(RouteConfig::from).collect(),
            history: HistoryConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// A single route entry. Exactly one of `view` and `redirect` is set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    /// Path to match (e.g., "/sm2").
    pub path: String,

    /// Name for named navigation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// View rendered at this path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<View>,

    /// Path to resolve instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl RouteConfig {
    /// Convert into a route record, checking the view/redirect exclusivity.
    pub fn to_route(&self) -> Result<Route, TableError> {
        let target = match (&self.view, &self.redirect) {
            (Some(view), None) => Target::View(*view),
            (None, Some(to)) => Target::Redirect(to.clone()),
            (Some(_), Some(_)) => return Err(TableError::AmbiguousTarget(self.path.clone())),
            (None, None) => return Err(TableError::MissingTarget(self.path.clone())),
        };

        Ok(Route {
            path: self.path.clone(),
            name: self.name.clone(),
            target,
        })
    }
}

impl From<&Route> for RouteConfig {
    fn from(route: &Route) -> Self {
        let (view, redirect) = match &route.target {
            Target::View(view) => (Some(*view), None),
            Target::Redirect(to) => (None, Some(to.clone())),
        };
        Self {
            path: route.path.clone(),
            name: route.name.clone(),
            view,
            redirect,
        }
    }
}

/// Navigation history configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum back-history entries kept (0 disables history).
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_entries: 50 }
    }
}

/// Log output style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log line format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
