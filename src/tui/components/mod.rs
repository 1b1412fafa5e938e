//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `HeaderImage`: Build-time bundled banner art
//! - `NotFoundPage`: Catch-all route page
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `ShellState`; a transient wrapper borrowing it
//! is built each frame:
//! - `SideNav` / `SideNavState`: Category list with a keyboard cursor
//! - `TabBar` / `TabBarState`: Bottom tabs with a keyboard cursor
//! - `LayoutShell` / `ShellState`: Composes the three regions
//!
//! Components receive data as props rather than reading `App` directly, so
//! each one can be rendered alone against a `TestBackend`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header_image.rs  (Top banner)
//! ├── side_nav.rs      (Category list)
//! ├── tab_bar.rs       (Bottom tabs)
//! ├── layout_shell.rs  (Element for "/")
//! └── not_found.rs     (Element for "*")
//! ```

pub mod header_image;
pub mod layout_shell;
pub mod not_found;
pub mod side_nav;
pub mod tab_bar;

pub use header_image::HeaderImage;
pub use layout_shell::{Focus, LayoutShell, ShellState};
pub use not_found::NotFoundPage;
pub use side_nav::NavEvent;
