//! Route records and resolution results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Views the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    #[serde(rename = "SM2")]
    Sm2,
    #[serde(rename = "SM3")]
    Sm3,
    #[serde(rename = "SM4")]
    Sm4,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Sm2 => "SM2",
            View::Sm3 => "SM3",
            View::Sm4 => "SM4",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view '{0}'")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SM2" => Ok(View::Sm2),
            "SM3" => Ok(View::Sm3),
            "SM4" => Ok(View::Sm4),
            other => Err(UnknownView(other.to_string())),
        }
    }
}

/// What a route points at. A route carries a view or a redirect, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    View(View),
    Redirect(String),
}

/// A single path binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub target: Target,
}

impl Route {
    /// Create a route rendering `view` at `path`.
    pub fn view(path: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: Target::View(view),
        }
    }

    /// Create a route redirecting `path` to `to`.
    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: Target::Redirect(to.into()),
        }
    }

    /// Set the route name used for named navigation.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, Target::Redirect(_))
    }

    /// The resolution this route produces when matched.
    pub fn resolution(&self) -> Resolution {
        match &self.target {
            Target::View(view) => Resolution::View { view: *view },
            Target::Redirect(to) => Resolution::Redirect { to: to.clone() },
        }
    }
}

/// Outcome of looking up a path in the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Resolve `to` instead of the requested path.
    Redirect { to: String },
    /// Render `view`.
    View { view: View },
    /// Nothing is registered for the path.
    NoMatch,
}

impl Resolution {
    /// Label used for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Resolution::Redirect { .. } => "redirect",
            Resolution::View { .. } => "view",
            Resolution::NoMatch => "no_match",
        }
    }

    pub fn view(&self) -> Option<View> {
        match self {
            Resolution::View { view } => Some(*view),
            _ => None,
        }
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Resolution::Redirect { to } => Some(to),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_text_form() {
        for view in [View::Sm2, View::Sm3, View::Sm4] {
            assert_eq!(view.as_str().parse::<View>(), Ok(view));
            assert_eq!(view.to_string(), view.as_str());
        }
        assert_eq!("sm2".parse::<View>(), Err(UnknownView("sm2".into())));
    }

    #[test]
    fn test_view_serde_names() {
        assert_eq!(serde_json::to_string(&View::Sm4).unwrap(), "\"SM4\"");
        let view: View = serde_json::from_str("\"SM2\"").unwrap();
        assert_eq!(view, View::Sm2);
    }

    #[test]
    fn test_route_resolution() {
        let route = Route::view("/sm2", View::Sm2).named("SM2");
        assert_eq!(route.name.as_deref(), Some("SM2"));
        assert!(!route.is_redirect());
        assert_eq!(route.resolution(), Resolution::View { view: View::Sm2 });

        let root = Route::redirect("/", "/sm3");
        assert!(root.is_redirect());
        assert_eq!(root.resolution().redirect_target(), Some("/sm3"));
        assert_eq!(root.resolution().view(), None);
    }

    #[test]
    fn test_resolution_json_shape() {
        let json = serde_json::to_value(Resolution::Redirect { to: "/sm3".into() }).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "redirect", "to": "/sm3" }));

        let json = serde_json::to_value(Resolution::NoMatch).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "no_match" }));
    }
}
