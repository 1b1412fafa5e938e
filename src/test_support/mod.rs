//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

mod buffer;

pub use buffer::buffer_lines;

use crate::core::menu::MenuConfig;
use crate::core::router::Router;
use crate::core::state::App;

/// Creates a test App with the built-in menu and routes at `path`.
pub fn test_app(path: &str) -> App {
    App::new(MenuConfig::default(), Router::default(), path)
}
