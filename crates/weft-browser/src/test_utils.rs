//! Shared helpers for browser tests.

use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener};
use std::thread::JoinHandle;

use weft_types::backend::Renderer;

/// Renderer that records calls for assertions.
#[derive(Default)]
pub struct RecordingRenderer {
    pub clears: usize,
    pub presents: usize,
    pub chars: Vec<(i32, i32, char)>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The drawn characters in call order.
    pub fn text(&self) -> String {
        self.chars.iter().map(|&(_, _, ch)| ch).collect()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.clears += 1;
        self.chars.clear();
    }

    fn draw_char(&mut self, x: i32, y: i32, ch: char) {
        self.chars.push((x, y, ch));
    }

    fn present(&mut self) {
        self.presents += 1;
    }
}

/// Serve one canned HTTP response on a loopback listener.
///
/// Accepts a single connection, reads the request up to the blank
/// line, writes `response`, and half-closes. The join handle yields
/// the raw request bytes for assertions.
pub fn serve_once(response: &'static [u8]) -> (u16, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        stream.write_all(response).unwrap();
        let _ = stream.shutdown(Shutdown::Write);
        request
    });

    (port, handle)
}
