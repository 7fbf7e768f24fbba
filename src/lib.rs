//! Client-side view route table.
//!
//! Maps application paths to the SM2, SM3 and SM4 views, with `/`
//! redirecting to `/sm3`. Unregistered paths resolve to an explicit no-match.

pub mod config;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use routing::{Navigator, Resolution, RouteTable, View};
