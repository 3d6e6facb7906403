//! Terminal grid renderer.
//!
//! Implements the rendering capability over a character grid sized
//! from the view configuration; `present` prints the grid to stdout.
//! Layout coordinates are divided by the step sizes to find the cell.

use weft_browser::ViewConfig;
use weft_types::backend::Renderer;

pub struct TermRenderer {
    cols: usize,
    rows: usize,
    hstep: i32,
    vstep: i32,
    cells: Vec<char>,
}

impl TermRenderer {
    pub fn new(config: &ViewConfig) -> Self {
        let cols = (config.width / config.hstep).max(1) as usize;
        let rows = (config.height / config.vstep).max(1) as usize;
        Self {
            cols,
            rows,
            hstep: config.hstep,
            vstep: config.vstep,
            cells: vec![' '; cols * rows],
        }
    }

    fn cell_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let col = (x / self.hstep) as usize;
        let row = (y / self.vstep) as usize;
        (col < self.cols && row < self.rows).then_some(row * self.cols + col)
    }

    /// The grid as text rows, right-trimmed.
    fn grid_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| {
                let line: String = row.iter().collect();
                line.trim_end().to_string()
            })
            .collect()
    }
}

impl Renderer for TermRenderer {
    fn clear(&mut self) {
        self.cells.fill(' ');
    }

    fn draw_char(&mut self, x: i32, y: i32, ch: char) {
        // Control characters have no glyph in a character cell.
        let ch = if ch.is_control() { ' ' } else { ch };
        if let Some(index) = self.cell_index(x, y) {
            self.cells[index] = ch;
        }
    }

    fn present(&mut self) {
        let mut frame = String::with_capacity(self.cells.len() + self.rows);
        for row in self.grid_rows() {
            frame.push_str(&row);
            frame.push('\n');
        }
        print!("{frame}");
    }
}
