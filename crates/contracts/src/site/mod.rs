//! Generated site document consumed by the frontend.
//!
//! A documentation build produces a single JSON document holding the site
//! configuration, the route table, and the navigation tree. The frontend
//! fetches it at startup and never mutates it.

pub mod config;
pub mod nav;
pub mod routes;

pub use config::*;
pub use nav::*;
pub use routes::*;

use serde::{Deserialize, Serialize};

/// The whole generated document: configuration, routes, navigation tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub config: SiteConfig,
    pub routes: Vec<Route>,
    pub nav: Vec<NavItem>,
}
