//! Blocking TCP stream backend.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};

use weft_types::backend::NetworkStream;
use weft_types::error::{Result, WeftError};

/// A plain blocking TCP connection.
///
/// Connect, TLS handshake, and reads all block the calling thread until
/// they complete; a hung peer hangs the caller. No timeout is set.
#[derive(Debug)]
pub struct StdNetworkStream {
    inner: TcpStream,
}

impl StdNetworkStream {
    /// Open a blocking connection to `(host, port)`.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let addr = format!("{host}:{port}")
            .to_socket_addrs()
            .map_err(|e| WeftError::Connection(format!("DNS resolution failed: {e}")))?
            .next()
            .ok_or_else(|| WeftError::Connection(format!("no addresses for {host}:{port}")))?;

        let inner = TcpStream::connect(addr)
            .map_err(|e| WeftError::Connection(format!("TCP connect failed: {e}")))?;

        log::debug!("connected to {host}:{port}");
        Ok(Self { inner })
    }

    /// Wrap an already-connected socket.
    pub fn new(inner: TcpStream) -> Self {
        Self { inner }
    }
}

impl NetworkStream for StdNetworkStream {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(self.inner.read(buf)?)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        Ok(self.inner.write(data)?)
    }

    fn close(&mut self) -> Result<()> {
        self.inner.shutdown(Shutdown::Both)?;
        Ok(())
    }
}

// -------------------------------------------------------------------
// NetworkStream → Read + Write adapter
// -------------------------------------------------------------------

/// Adapts a `Box<dyn NetworkStream>` to `std::io::Read` + `std::io::Write`
/// so protocol code can stay independent of the stream implementation.
pub struct StreamAdapter(pub Box<dyn NetworkStream>);

impl Read for StreamAdapter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf).map_err(weft_err_to_io)
    }
}

impl Write for StreamAdapter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf).map_err(weft_err_to_io)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Convert a [`WeftError`] to [`io::Error`], preserving the original
/// `io::Error` (and its error kind) when the variant is `WeftError::Io`.
fn weft_err_to_io(e: WeftError) -> io::Error {
    match e {
        WeftError::Io(io_err) => io_err,
        other => io::Error::other(other.to_string()),
    }
}
