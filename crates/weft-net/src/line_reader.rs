//! Buffered CRLF line reading.
//!
//! HTTP responses are CRLF-delimited up to the header/body boundary and
//! free-form bytes after it. [`CrlfReader`] exposes exactly those two
//! operations -- "read one line terminated by CRLF" and "read whatever
//! remains until end-of-stream" -- so the protocol state machine never
//! touches the socket API directly.

use std::io::Read;

use weft_types::error::{Result, WeftError};

const CHUNK_SIZE: usize = 8192;

/// Buffered reader over any byte stream.
pub struct CrlfReader<R> {
    inner: R,
    /// Bytes read from the stream but not yet consumed.
    buf: Vec<u8>,
    /// Whether the underlying stream has reported end-of-stream.
    eof: bool,
}

impl<R: Read> CrlfReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(CHUNK_SIZE),
            eof: false,
        }
    }

    /// Read one line terminated by `\r\n`, returning it without the
    /// terminator. Fails with `Protocol` if the stream ends before a
    /// terminator arrives or the line is not UTF-8.
    pub fn read_line(&mut self) -> Result<String> {
        loop {
            if let Some(pos) = find_crlf(&self.buf) {
                let line_bytes: Vec<u8> = self.buf.drain(..pos + 2).collect();
                let line = std::str::from_utf8(&line_bytes[..pos])
                    .map_err(|_| WeftError::Protocol("non-UTF-8 header line".to_string()))?;
                return Ok(line.to_string());
            }
            if self.eof {
                return Err(WeftError::Protocol(
                    "unexpected end of stream before CRLF".to_string(),
                ));
            }
            self.fill()?;
        }
    }

    /// Read everything left on the stream: buffered bytes first, then
    /// the rest until the peer closes.
    pub fn read_remaining(&mut self) -> Result<Vec<u8>> {
        let mut out = std::mem::take(&mut self.buf);
        while !self.eof {
            self.fill()?;
            out.append(&mut self.buf);
        }
        Ok(out)
    }

    /// Pull one chunk from the stream into the buffer.
    fn fill(&mut self) -> Result<()> {
        let mut chunk = [0u8; CHUNK_SIZE];
        match self.inner.read(&mut chunk) {
            Ok(0) => {
                self.eof = true;
                Ok(())
            },
            Ok(n) => {
                self.buf.extend_from_slice(&chunk[..n]);
                Ok(())
            },
            Err(e) => Err(WeftError::Connection(format!("read: {e}"))),
        }
    }
}

/// Position of the first `\r\n` in `buf`.
fn find_crlf(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|w| w == b"\r\n")
}
