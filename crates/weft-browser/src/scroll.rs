//! Viewport and scroll offset management.

use weft_types::input::InputEvent;

use crate::layout::DisplayItem;

/// The visible window into a display list.
///
/// `scroll_y` is deliberately unclamped: scrolling above the top or
/// past the bottom of the content just leaves less (or nothing)
/// visible. Each redraw recomputes the visible subset from scratch.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Current vertical scroll offset.
    pub scroll_y: i32,
    /// Viewport width.
    pub width: i32,
    /// Viewport height.
    pub height: i32,
    /// One line of vertical advance, used as top slack so a partially
    /// visible line is not dropped.
    line_height: i32,
    /// Offset change per scroll event.
    scroll_step: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32, line_height: i32, scroll_step: i32) -> Self {
        Self {
            scroll_y: 0,
            width,
            height,
            line_height,
            scroll_step,
        }
    }

    /// Scroll down by one step.
    pub fn scroll_down(&mut self) {
        self.scroll_y += self.scroll_step;
    }

    /// Scroll up by one step.
    pub fn scroll_up(&mut self) {
        self.scroll_y -= self.scroll_step;
    }

    /// Scroll down by one page (viewport height less one line).
    pub fn page_down(&mut self) {
        self.scroll_y += self.page_step();
    }

    /// Scroll up by one page.
    pub fn page_up(&mut self) {
        self.scroll_y -= self.page_step();
    }

    fn page_step(&self) -> i32 {
        (self.height - self.line_height).max(self.scroll_step)
    }

    /// Back to the top (new document load).
    pub fn reset(&mut self) {
        self.scroll_y = 0;
    }

    /// Apply a scroll event. Returns true when the offset changed and
    /// the caller should redraw.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::ScrollUp => self.scroll_up(),
            InputEvent::ScrollDown => self.scroll_down(),
            InputEvent::PageUp => self.page_up(),
            InputEvent::PageDown => self.page_down(),
            InputEvent::Quit => return false,
        }
        true
    }

    /// The subset of `display` currently in view, in reading order.
    ///
    /// A record is visible iff its `y` falls within one line above the
    /// offset through the bottom edge: `[scroll_y - line_height,
    /// scroll_y + height)`.
    pub fn visible(&self, display: &[DisplayItem]) -> Vec<DisplayItem> {
        display
            .iter()
            .copied()
            .filter(|item| {
                item.y >= self.scroll_y - self.line_height && item.y < self.scroll_y + self.height
            })
            .collect()
    }
}
