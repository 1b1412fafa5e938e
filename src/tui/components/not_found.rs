//! # Not Found Page
//!
//! Rendered by the catch-all route for any path that isn't `/`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct NotFoundPage<'a> {
    pub path: &'a str,
}

impl Component for NotFoundPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "404",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("No page at {}", self.path)),
            Line::from(Span::styled("q to quit", Style::default().fg(Color::DarkGray))),
        ];

        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_lines;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_shows_path() {
        let backend = TestBackend::new(40, 9);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| NotFoundPage { path: "/orders" }.render(f, f.area()))
            .unwrap();

        let lines = buffer_lines(terminal.backend().buffer());
        assert!(lines[3].contains("404"));
        assert!(lines[4].contains("No page at /orders"));
    }
}
