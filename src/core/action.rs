//! # Actions
//!
//! Everything the user can do becomes an `Action`.
//! Pressing Enter on a nav row? That's `Action::Select { list, key }`.
//!
//! `update()` takes the current state and an action and returns the
//! `Effect` the adapter should perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  Effect
//! ```
//!
//! Selections are declared but not wired to anything yet: they are logged
//! and leave the state exactly as it was.

use log::{debug, info, warn};

use crate::core::menu::NavList;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Select { list: NavList, key: String },
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Select { list, key } => {
            match app.menu.find(list, &key) {
                Some(item) => debug!("Selected {} item '{}' ({}), no handler", list, key, item.title),
                None => warn!("Selected unknown {} key '{}'", list, key),
            }
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}
