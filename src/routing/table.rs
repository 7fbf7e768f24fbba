//! Route lookup.
//!
//! # Responsibilities
//! - Store the ordered route list
//! - Check the table invariants once, at construction
//! - Look up the route for a path and return it or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (shareable without locks)
//! - O(n) first-match scan; tables are a handful of entries
//! - Explicit `NoMatch` rather than a silent default route

use std::collections::HashSet;

use crate::config::RouteConfig;
use crate::observability::metrics;
use crate::routing::matcher::{ExactPath, Matcher};
use crate::routing::route::{Resolution, Route, Target, View};

/// Path of the single redirect-only entry.
pub const ROOT_PATH: &str = "/";

/// A violated table invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("route '{0}' declares both a view and a redirect")]
    AmbiguousTarget(String),

    #[error("route '{0}' declares neither a view nor a redirect")]
    MissingTarget(String),

    #[error("duplicate path '{0}'")]
    DuplicatePath(String),

    #[error("duplicate route name '{0}'")]
    DuplicateName(String),

    #[error("no route is registered for '/'")]
    MissingRoot,

    #[error("route '/' must redirect, not render a view")]
    RootNotRedirect,

    #[error("route '{0}' redirects; only '/' may redirect")]
    UnexpectedRedirect(String),

    #[error("route '{from}' redirects to '{to}', which is not a registered view route")]
    DanglingRedirect { from: String, to: String },
}

/// Immutable ordered route table.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    matcher: Box<dyn Matcher>,
}

impl RouteTable {
    /// Build a table, reporting every violated invariant.
    pub fn new(routes: Vec<Route>) -> Result<Self, Vec<TableError>> {
        let errors = validate_routes(&routes);
        if !errors.is_empty() {
            return Err(errors);
        }

        tracing::debug!(routes = routes.len(), "Route table built");
        Ok(Self {
            routes,
            matcher: Box::new(ExactPath),
        })
    }

    /// Build a table from configuration entries.
    pub fn from_config(configs: &[RouteConfig]) -> Result<Self, Vec<TableError>> {
        let mut routes = Vec::with_capacity(configs.len());
        let mut errors = Vec::new();

        for config in configs {
            match config.to_route() {
                Ok(route) => routes.push(route),
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            return Self::new(routes);
        }

        // Entries without a usable target still count as declared paths.
        let declared: HashSet<&str> = configs.iter().map(|c| c.path.as_str()).collect();
        errors.extend(check_routes(&routes, &declared));
        Err(errors)
    }

    /// Resolve a requested path.
    pub fn resolve(&self, path: &str) -> Resolution {
        let resolution = match self.route_for(path) {
            Some(route) => route.resolution(),
            None => Resolution::NoMatch,
        };

        tracing::debug!(path = %path, outcome = resolution.outcome(), "Path resolved");
        metrics::record_resolution(resolution.outcome());
        resolution
    }

    /// First route whose path matches, if any.
    pub fn route_for(&self, path: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| self.matcher.matches(route, path))
    }

    /// Route registered under `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| route.name.as_deref() == Some(name))
    }

    /// Routes in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    /// `/` redirects to `/sm3`; `/sm2`, `/sm3` and `/sm4` render their views.
    fn default() -> Self {
        Self {
            routes: default_routes(),
            matcher: Box::new(ExactPath),
        }
    }
}

/// The application's route list.
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::redirect(ROOT_PATH, "/sm3"),
        Route::view("/sm2", View::Sm2).named("SM2"),
        Route::view("/sm3", View::Sm3).named("SM3"),
        Route::view("/sm4", View::Sm4).named("SM4"),
    ]
}

/// Check a route list against the table invariants.
///
/// Pure: returns all violations, empty when the list is valid.
pub fn validate_routes(routes: &[Route]) -> Vec<TableError> {
    let declared: HashSet<&str> = routes.iter().map(|r| r.path.as_str()).collect();
    check_routes(routes, &declared)
}

/// Invariant checks where root presence and redirect targets are looked up
/// in `declared`, which may hold paths of entries that are not in `routes`.
fn check_routes(routes: &[Route], declared: &HashSet<&str>) -> Vec<TableError> {
    let mut errors = Vec::new();
    let mut paths = HashSet::new();
    let mut names = HashSet::new();

    for route in routes {
        if let Err(reason) = check_path(&route.path) {
            errors.push(TableError::InvalidPath {
                path: route.path.clone(),
                reason,
            });
        }
        if !paths.insert(route.path.as_str()) {
            errors.push(TableError::DuplicatePath(route.path.clone()));
        }
        if let Some(name) = &route.name {
            if !names.insert(name.as_str()) {
                errors.push(TableError::DuplicateName(name.clone()));
            }
        }

        match (&route.target, route.path == ROOT_PATH) {
            (Target::View(_), true) => errors.push(TableError::RootNotRedirect),
            (Target::Redirect(_), false) => {
                errors.push(TableError::UnexpectedRedirect(route.path.clone()))
            }
            (Target::Redirect(to), true) => {
                let lands_on_view = routes
                    .iter()
                    .any(|r| &r.path == to && matches!(r.target, Target::View(_)));
                let target_unusable = declared.contains(to.as_str())
                    && !routes.iter().any(|r| &r.path == to);
                if !lands_on_view && !target_unusable {
                    errors.push(TableError::DanglingRedirect {
                        from: route.path.clone(),
                        to: to.clone(),
                    });
                }
            }
            (Target::View(_), false) => {}
        }
    }

    if !declared.contains(ROOT_PATH) {
        errors.push(TableError::MissingRoot);
    }

    errors
}

fn check_path(path: &str) -> Result<(), &'static str> {
    if !path.starts_with('/') {
        return Err("must start with '/'");
    }
    if path.chars().any(char::is_whitespace) {
        return Err("must not contain whitespace");
    }
    if path.contains(['?', '#']) {
        return Err("must not contain a query or fragment");
    }
    Ok(())
}
