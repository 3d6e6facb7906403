//! Fixed-pitch grid layout.
//!
//! Text is placed one character per cell, left to right, wrapping on
//! position alone. No word boundaries are respected and every glyph is
//! assumed to be exactly one cell wide.

/// One positioned glyph on the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayItem {
    pub x: i32,
    pub y: i32,
    pub ch: char,
}

/// Lay `text` onto the grid, producing the display list in reading
/// order.
///
/// The cursor starts at `(hstep, vstep)` -- the left and top margins
/// equal the step sizes. After each glyph the cursor advances by
/// `hstep`; once it would pass `viewport_width - hstep`, it resets to
/// the left margin and drops down one line.
pub fn layout(text: &str, viewport_width: i32, hstep: i32, vstep: i32) -> Vec<DisplayItem> {
    let mut display = Vec::with_capacity(text.len());
    let mut cursor_x = hstep;
    let mut cursor_y = vstep;

    for ch in text.chars() {
        display.push(DisplayItem {
            x: cursor_x,
            y: cursor_y,
            ch,
        });
        cursor_x += hstep;
        if cursor_x > viewport_width - hstep {
            cursor_x = hstep;
            cursor_y += vstep;
        }
    }

    display
}
