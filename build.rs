use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=assets/");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("header_image.rs");
    let mut f = fs::File::create(&dest_path).unwrap();

    // A missing asset must not fail the build; the header falls back to its alt text.
    let asset_path = Path::new("assets").join("header.txt");
    let content = match fs::read_to_string(&asset_path) {
        Ok(content) => content,
        Err(_) => {
            println!("cargo:warning=header asset not found at {}", asset_path.display());
            writeln!(f, "const HEADER_ROWS: &[&str] = &[];").unwrap();
            writeln!(f, "const HEADER_WIDTH: u16 = 0;").unwrap();
            return;
        }
    };

    let content = content.trim_start_matches('\u{feff}');
    let mut rows: Vec<&str> = content.lines().map(|line| line.trim_end()).collect();

    // Blank lines around the art only waste vertical space
    while rows.first().is_some_and(|row| row.is_empty()) {
        rows.remove(0);
    }
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }

    // Shift the art left so its leftmost column sits at 0
    let indent = rows
        .iter()
        .filter(|row| !row.is_empty())
        .map(|row| row.chars().take_while(|c| *c == ' ').count())
        .min()
        .unwrap_or(0);

    let mut width = 0usize;
    writeln!(f, "const HEADER_ROWS: &[&str] = &[").unwrap();
    for row in &rows {
        let row: String = row.chars().skip(indent).collect();
        width = width.max(row.chars().count());
        writeln!(f, "    {:?},", row).unwrap();
    }
    writeln!(f, "];").unwrap();
    writeln!(f, "const HEADER_WIDTH: u16 = {};", width).unwrap();
}
