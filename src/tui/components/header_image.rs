//! # Header Image Component
//!
//! Full-width banner at the top of the layout shell. The art comes from
//! `assets/header.txt`, baked into the binary by `build.rs`.
//!
//! When the asset was missing at build time the component draws a
//! "broken image" box labelled with its alt text instead of failing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

include!(concat!(env!("OUT_DIR"), "/header_image.rs"));

pub const HEADER_ALT: &str = "header";

/// Height of the broken-image placeholder: one line inside a border.
const PLACEHOLDER_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy)]
pub struct HeaderImage {
    rows: &'static [&'static str],
    width: u16,
}

impl HeaderImage {
    pub fn new(rows: &'static [&'static str], width: u16) -> Self {
        Self { rows, width }
    }

    /// The art bundled at build time.
    pub fn bundled() -> Self {
        Self::new(HEADER_ROWS, HEADER_WIDTH)
    }

    pub fn is_broken(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &'static [&'static str] {
        self.rows
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Rows the header occupies in the shell.
    pub fn height(&self) -> u16 {
        if self.is_broken() {
            PLACEHOLDER_HEIGHT
        } else {
            u16::try_from(self.rows.len()).unwrap_or(u16::MAX)
        }
    }
}

impl Component for HeaderImage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.is_broken() {
            let placeholder = Paragraph::new(format!("✕ {HEADER_ALT}"))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
            frame.render_widget(placeholder, area);
            return;
        }

        // Pad every row to the art width so centering keeps columns aligned
        let width = self.width as usize;
        let lines: Vec<Line> = self
            .rows
            .iter()
            .map(|row| Line::from(format!("{:<width$}", row)))
            .collect();

        let art = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        frame.render_widget(art, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_lines;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_bundled_asset_present() {
        let header = HeaderImage::bundled();
        assert!(!header.is_broken());
        assert_eq!(header.height() as usize, header.rows().len());
        assert!(header.rows().iter().all(|row| row.chars().count() <= header.width() as usize));
    }

    #[test]
    fn test_renders_every_row() {
        let mut header = HeaderImage::bundled();
        let backend = TestBackend::new(80, header.height());
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| header.render(f, f.area())).unwrap();

        let lines = buffer_lines(terminal.backend().buffer());
        for (line, row) in lines.iter().zip(header.rows()) {
            assert!(line.contains(row.trim()), "{line:?} should contain {row:?}");
        }
    }

    #[test]
    fn test_missing_asset_shows_alt_text() {
        let mut header = HeaderImage::new(&[], 0);
        assert!(header.is_broken());
        assert_eq!(header.height(), PLACEHOLDER_HEIGHT);

        let backend = TestBackend::new(40, PLACEHOLDER_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| header.render(f, f.area())).unwrap();

        let lines = buffer_lines(terminal.backend().buffer());
        assert!(lines[1].contains("✕ header"));
    }
}
