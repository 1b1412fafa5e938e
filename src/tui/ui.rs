use crate::core::router::Element;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{LayoutShell, NotFoundPage};

use ratatui::Frame;

/// Draws whatever the current route resolves to.
///
/// A router without a catch-all leaves unmatched paths blank.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let area = frame.area();
    let Some(matched) = app.current_route() else {
        return;
    };

    match matched.element() {
        Element::Layout => LayoutShell {
            menu: &app.menu,
            header: tui.header,
            state: &mut tui.shell,
        }
        .render(frame, area),
        Element::NotFound => NotFoundPage {
            path: &matched.path,
        }
        .render(frame, area),
    }
}
