//! Route matching logic.
//!
//! # Responsibilities
//! - Split a requested location into path, query and fragment
//! - Match a path against a route (exact, case-sensitive)
//!
//! # Design Decisions
//! - No trailing-slash folding: `/sm2/` is not `/sm2`
//! - No case folding: `/SM2` is not `/sm2`
//! - No patterns or wildcards, so matching is a plain string comparison

use serde::Serialize;

use crate::routing::route::Route;

/// A requested location broken into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
}

impl Location {
    /// Parse a raw location such as `/sm2?mode=cbc#out`.
    ///
    /// The fragment starts at the first `#`; the query starts at the first
    /// `?` before it. An empty path is treated as `/`.
    pub fn parse(raw: &str) -> Self {
        let (rest, fragment) = match raw.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };

        Self {
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            query,
            fragment,
        }
    }

    /// Render the location back into its raw form.
    pub fn to_raw(&self) -> String {
        let mut raw = self.path.clone();
        if let Some(query) = &self.query {
            raw.push('?');
            raw.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            raw.push('#');
            raw.push_str(fragment);
        }
        raw
    }
}

/// Trait for matching a requested path against a route.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if `path` selects `route`.
    fn matches(&self, route: &Route, path: &str) -> bool;
}

/// Byte-for-byte path equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactPath;

impl Matcher for ExactPath {
    fn matches(&self, route: &Route, path: &str) -> bool {
        route.path == path
    }
}
