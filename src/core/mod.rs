//! # Core Application Logic
//!
//! Menu data, the route table and the reducer.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Menu (label lists)   │
//!                    │  • Router (routes)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No draw.  │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct
//! - [`action`]: The `Action` enum and `update()`
//! - [`menu`]: Navigation items
//! - [`router`]: Route table and path resolution
//! - [`config`]: Config file loading and resolution

pub mod action;
pub mod config;
pub mod menu;
pub mod router;
pub mod state;
