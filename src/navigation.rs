//! Navigation module
//!
//! Routes, the router that owns the current route, and the header shell
//! that renders the navigation menu around the routed page.

mod nav_entry;
mod route;
mod router;
pub mod shell;

pub use nav_entry::{NAV_ENTRIES, NavigationEntry};
pub use route::{MatchMode, Route, is_active};
pub use router::{RouteMatching, Router};
pub use shell::NavigationShell;
