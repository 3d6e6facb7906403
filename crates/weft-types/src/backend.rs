//! Backend capability traits.
//!
//! The viewer core never talks to a socket API or a display toolkit
//! directly. The embedding shell supplies these traits and the core
//! stays platform-agnostic.

use crate::error::Result;

/// A bidirectional byte stream: plain TCP or a TLS-wrapped session.
///
/// All operations block until they complete; there is no timeout or
/// cancellation. Dropping or closing the stream releases the handle.
pub trait NetworkStream: Send {
    /// Read up to `buf.len()` bytes. `Ok(0)` means end-of-stream.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Write bytes, returning how many were accepted.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Shut the stream down.
    fn close(&mut self) -> Result<()>;
}

/// Character-cell rendering capability.
///
/// The core emits positioned glyphs; whoever implements this owns the
/// actual pixel (or terminal) output. Coordinates are in the same
/// units as the layout grid, already translated by the scroll offset.
pub trait Renderer {
    /// Erase the output surface.
    fn clear(&mut self);

    /// Place one glyph at the given grid position.
    fn draw_char(&mut self, x: i32, y: i32, ch: char);

    /// Flush the composed frame to the user.
    fn present(&mut self);
}
