//! Buffer readback for render tests.
//!
//! Depends on nothing but ratatui and unicode-width so the integration tests
//! under `tests/` can include this file with `#[path]`.

use ratatui::buffer::Buffer;
use unicode_width::UnicodeWidthStr;

/// Reads a buffer back as one string per row.
///
/// Wide glyphs (CJK labels) fill two cells; the filler cell after them is
/// skipped so `"大厨"` reads back as written.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width.max(1) as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| {
            let mut line = String::new();
            let mut skip = 0usize;
            for cell in row {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                let symbol = cell.symbol();
                line.push_str(symbol);
                skip = symbol.width().saturating_sub(1);
            }
            line
        })
        .collect()
}
