//! Platform-agnostic input event types.
//!
//! The embedding shell maps its native key or pointer input to these
//! events. The viewer core never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A discrete viewer input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// Scroll up by one step.
    ScrollUp,
    /// Scroll down by one step.
    ScrollDown,
    /// Scroll up by one page.
    PageUp,
    /// Scroll down by one page.
    PageDown,
    /// User requested quit.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_equality() {
        assert_eq!(InputEvent::ScrollUp, InputEvent::ScrollUp);
        assert_ne!(InputEvent::ScrollUp, InputEvent::ScrollDown);
        assert_ne!(InputEvent::PageUp, InputEvent::PageDown);
        assert_ne!(InputEvent::Quit, InputEvent::ScrollDown);
    }

    #[test]
    fn event_is_copy() {
        let a = InputEvent::PageDown;
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn event_debug() {
        let dbg = format!("{:?}", InputEvent::ScrollDown);
        assert!(dbg.contains("ScrollDown"));
    }

    #[test]
    fn all_variants_distinct() {
        let events = [
            InputEvent::ScrollUp,
            InputEvent::ScrollDown,
            InputEvent::PageUp,
            InputEvent::PageDown,
            InputEvent::Quit,
        ];
        for (i, a) in events.iter().enumerate() {
            for (j, b) in events.iter().enumerate() {
                assert_eq!(i == j, a == b);
            }
        }
    }
}
