//! # Application State
//!
//! Core state for zzmenu. Domain data only; focus cursors and other
//! presentation state live in the `tui` module.
//!
//! ```text
//! App
//! ├── menu: MenuConfig     // side-nav and tab-bar labels
//! ├── router: Router       // route table
//! └── location: String     // current path, normalized
//! ```
//!
//! Nothing in here changes after startup. Selection actions pass through
//! `update()` without touching it.

use crate::core::config::ResolvedConfig;
use crate::core::menu::MenuConfig;
use crate::core::router::{RouteMatch, Router, normalize_path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub menu: MenuConfig,
    pub router: Router,
    pub location: String,
}

impl App {
    pub fn new(menu: MenuConfig, router: Router, location: &str) -> Self {
        Self {
            menu,
            router,
            location: normalize_path(location),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.menu.clone(), Router::default(), &config.initial_path)
    }

    pub fn current_route(&self) -> Option<RouteMatch<'_>> {
        self.router.resolve(&self.location)
    }
}
