//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Requested location ("/?mode=cbc")
//!     → matcher.rs (split path / query / fragment)
//!     → table.rs (first-match lookup)
//!     → Return: Redirect, View or NoMatch
//!     → navigator.rs (follow redirect, record history)
//!
//! Table construction (at startup):
//!     RouteConfig[]
//!     → route.rs records (view XOR redirect)
//!     → invariant checks (unique paths/names, root redirect)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table built at startup, immutable at runtime
//! - Exact path matching, no patterns
//! - Deterministic: same path always yields the same resolution
//! - First match wins (registration order)

pub mod matcher;
pub mod navigator;
pub mod route;
pub mod table;

pub use matcher::Location;
pub use navigator::{Navigation, NavigationError, Navigator};
pub use route::{Resolution, Route, Target, View};
pub use table::{RouteTable, TableError};
