//! Navigation state over a route table.
//!
//! # Responsibilities
//! - Turn a requested location into a rendered view
//! - Follow the root redirect, carrying query and fragment over
//! - Keep back/forward history
//!
//! # Design Decisions
//! - A failed navigation leaves state untouched
//! - Re-navigating to the current path does not grow history
//! - History is bounded; the oldest entries are dropped first

use std::collections::VecDeque;
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::config::HistoryConfig;
use crate::observability::metrics;
use crate::routing::matcher::Location;
use crate::routing::route::{Resolution, View};
use crate::routing::table::RouteTable;

/// Error type for navigation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("no route matches '{0}'")]
    NotFound(String),

    #[error("no route is named '{0}'")]
    UnknownName(String),
}

/// One successful navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub id: Uuid,
    /// Location as it was requested.
    pub requested: String,
    /// Location that was rendered, after any redirect.
    pub location: Location,
    pub view: View,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirected_from: Option<String>,
}

/// Navigation history on top of a shared route table.
#[derive(Debug)]
pub struct Navigator {
    table: Arc<RouteTable>,
    current: Option<Navigation>,
    /// Most recent first.
    back: VecDeque<Navigation>,
    /// Most recent first.
    forward: VecDeque<Navigation>,
    max_history: usize,
}

impl Navigator {
    pub fn new(table: Arc<RouteTable>, config: &HistoryConfig) -> Self {
        Self {
            table,
            current: None,
            back: VecDeque::new(),
            forward: VecDeque::new(),
            max_history: config.max_entries,
        }
    }

    /// Navigate to a raw location such as `/sm2?mode=cbc`.
    pub fn push(&mut self, raw: &str) -> Result<&Navigation, NavigationError> {
        let navigation = self.resolve_location(raw)?;

        tracing::info!(
            navigation_id = %navigation.id,
            requested = %navigation.requested,
            path = %navigation.location.path,
            view = %navigation.view,
            redirected = navigation.redirected_from.is_some(),
            "Navigated"
        );
        metrics::record_navigation("ok");

        Ok(self.commit(navigation))
    }

    /// Navigate to the route registered under `name`.
    pub fn push_named(&mut self, name: &str) -> Result<&Navigation, NavigationError> {
        let path = match self.table.find_by_name(name) {
            Some(route) => route.path.clone(),
            None => {
                tracing::warn!(name = %name, "No route with that name");
                metrics::record_navigation("unknown_name");
                return Err(NavigationError::UnknownName(name.to_string()));
            }
        };
        self.push(&path)
    }

    /// Return to the previous entry. Returns false when history is empty.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.back.pop_front() else {
            return false;
        };
        if let Some(current) = self.current.replace(previous) {
            self.forward.push_front(current);
        }
        true
    }

    /// Undo the last `back`. Returns false when there is nothing to redo.
    pub fn forward(&mut self) -> bool {
        let Some(next) = self.forward.pop_front() else {
            return false;
        };
        if let Some(current) = self.current.replace(next) {
            self.back.push_front(current);
        }
        true
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    pub fn current(&self) -> Option<&Navigation> {
        self.current.as_ref()
    }

    /// Back history, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &Navigation> {
        self.back.iter()
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    fn resolve_location(&self, raw: &str) -> Result<Navigation, NavigationError> {
        let mut location = Location::parse(raw);
        let mut redirected_from = None;

        let view = match self.table.resolve(&location.path) {
            Resolution::View { view } => view,
            Resolution::Redirect { to } => {
                let target = Location::parse(&to);
                let from = std::mem::replace(&mut location.path, target.path);
                if target.query.is_some() {
                    location.query = target.query;
                }
                if target.fragment.is_some() {
                    location.fragment = target.fragment;
                }

                // Table validation guarantees the target is a view route.
                match self.table.resolve(&location.path) {
                    Resolution::View { view } => {
                        redirected_from = Some(from);
                        view
                    }
                    _ => {
                        metrics::record_navigation("not_found");
                        return Err(NavigationError::NotFound(location.path));
                    }
                }
            }
            Resolution::NoMatch => {
                tracing::warn!(path = %location.path, "No route matched");
                metrics::record_navigation("not_found");
                return Err(NavigationError::NotFound(location.path));
            }
        };

        Ok(Navigation {
            id: Uuid::new_v4(),
            requested: raw.to_string(),
            location,
            view,
            redirected_from,
        })
    }

    fn commit(&mut self, navigation: Navigation) -> &Navigation {
        if let Some(previous) = self.current.take() {
            if previous.location.path != navigation.location.path {
                self.forward.clear();
                if self.max_history > 0 {
                    self.back.push_front(previous);
                    self.back.truncate(self.max_history);
                }
            }
        }
        self.current.insert(navigation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::route::Route;

    fn navigator(max_entries: usize) -> Navigator {
        Navigator::new(Arc::new(RouteTable::default()), &HistoryConfig { max_entries })
    }

    #[test]
    fn test_push_view() {
        let mut nav = navigator(10);
        let navigation = nav.push("/sm2").unwrap();
        assert_eq!(navigation.view, View::Sm2);
        assert_eq!(navigation.redirected_from, None);
        assert_eq!(navigation.location.path, "/sm2");
    }

    #[test]
    fn test_root_redirect_keeps_query_and_fragment() {
        let mut nav = navigator(10);
        let navigation = nav.push("/?mode=ecb#out").unwrap();
        assert_eq!(navigation.view, View::Sm3);
        assert_eq!(navigation.requested, "/?mode=ecb#out");
        assert_eq!(navigation.redirected_from.as_deref(), Some("/"));
        assert_eq!(navigation.location.to_raw(), "/sm3?mode=ecb#out");
    }

    #[test]
    fn test_not_found_leaves_state() {
        let mut nav = navigator(10);
        nav.push("/sm4").unwrap();
        let err = nav.push("/sm5").unwrap_err();
        assert_eq!(err, NavigationError::NotFound("/sm5".into()));
        assert_eq!(nav.current().unwrap().view, View::Sm4);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_push_named() {
        let mut nav = navigator(10);
        assert_eq!(nav.push_named("SM4").unwrap().view, View::Sm4);
        assert_eq!(
            nav.push_named("SM9").unwrap_err(),
            NavigationError::UnknownName("SM9".into())
        );
    }

    #[test]
    fn test_back_and_forward() {
        let mut nav = navigator(10);
        nav.push("/sm2").unwrap();
        nav.push("/sm3").unwrap();
        nav.push("/sm4").unwrap();

        assert!(nav.back());
        assert_eq!(nav.current().unwrap().view, View::Sm3);
        assert!(nav.back());
        assert_eq!(nav.current().unwrap().view, View::Sm2);
        assert!(!nav.back());

        assert!(nav.forward());
        assert_eq!(nav.current().unwrap().view, View::Sm3);
        assert!(nav.can_go_forward());

        // A fresh push drops the forward stack
        nav.push("/sm2").unwrap();
        assert!(!nav.can_go_forward());
        assert!(!nav.forward());
    }

    #[test]
    fn test_forward_replays_in_order() {
        let mut nav = navigator(10);
        for path in ["/sm2", "/sm3", "/sm4"] {
            nav.push(path).unwrap();
        }
        assert!(nav.back());
        assert!(nav.back());

        assert!(nav.forward());
        assert_eq!(nav.current().unwrap().view, View::Sm3);
        assert!(nav.forward());
        assert_eq!(nav.current().unwrap().view, View::Sm4);
        assert!(!nav.forward());

        let trail: Vec<_> = nav.history().map(|n| n.view).collect();
        assert_eq!(trail, [View::Sm3, View::Sm2]);
    }

    #[test]
    fn test_redirect_in_custom_table() {
        let table = RouteTable::new(vec![
            Route::redirect("/", "/sm4"),
            Route::view("/sm4", View::Sm4),
        ])
        .unwrap();
        let mut nav = Navigator::new(Arc::new(table), &HistoryConfig::default());

        let navigation = nav.push("/").unwrap();
        assert_eq!(navigation.view, View::Sm4);
        assert_eq!(navigation.redirected_from.as_deref(), Some("/"));
    }

    #[test]
    fn test_same_path_does_not_grow_history() {
        let mut nav = navigator(10);
        nav.push("/sm2").unwrap();
        nav.push("/sm2?x=1").unwrap();
        assert_eq!(nav.history().count(), 0);
        assert_eq!(nav.current().unwrap().location.query.as_deref(), Some("x=1"));
    }

    #[test]
    fn test_history_bound() {
        let mut nav = navigator(2);
        for path in ["/sm2", "/sm3", "/sm4", "/sm2"] {
            nav.push(path).unwrap();
        }
        let paths: Vec<_> = nav.history().map(|n| n.location.path.as_str()).collect();
        assert_eq!(paths, ["/sm4", "/sm3"]);
    }

    #[test]
    fn test_history_disabled() {
        let mut nav = navigator(0);
        nav.push("/sm2").unwrap();
        nav.push("/sm3").unwrap();
        assert!(!nav.can_go_back());
        assert!(!nav.back());
        assert_eq!(nav.current().unwrap().view, View::Sm3);
    }

    #[test]
    fn test_navigation_ids_are_unique() {
        let mut nav = navigator(10);
        let first = nav.push("/sm2").unwrap().id;
        let second = nav.push("/sm3").unwrap().id;
        assert_ne!(first, second);
    }
}
