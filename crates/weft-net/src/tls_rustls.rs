//! [`TlsProvider`] backed by rustls + ring.
//!
//! Enabled by the `tls-rustls` feature. Streams here are blocking, so
//! the handshake and all record pumping simply run to completion on
//! the calling thread.

use std::io::{self, Read, Write};
use std::sync::Arc;

use rustls::ClientConfig;
use rustls::pki_types::ServerName;

use weft_types::backend::NetworkStream;
use weft_types::error::{Result, WeftError};

use crate::tls::TlsProvider;

/// Shared, reusable TLS client configuration (one per process).
pub struct RustlsTlsProvider {
    config: Arc<ClientConfig>,
}

impl RustlsTlsProvider {
    /// Build a provider that trusts Mozilla's root CA bundle.
    pub fn new() -> Self {
        let root_store =
            rustls::RootCertStore::from_iter(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        Self::with_roots(root_store)
    }

    /// Build a provider with an explicit trust store, for callers that
    /// pin their own anchors.
    pub fn with_roots(root_store: rustls::RootCertStore) -> Self {
        let config = ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for RustlsTlsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TlsProvider for RustlsTlsProvider {
    fn connect_tls(
        &self,
        mut stream: Box<dyn NetworkStream>,
        server_name: &str,
    ) -> Result<Box<dyn NetworkStream>> {
        let sni = ServerName::try_from(server_name.to_owned())
            .map_err(|e| WeftError::Connection(format!("invalid server name: {e}")))?;

        let mut tls = rustls::ClientConnection::new(Arc::clone(&self.config), sni)
            .map_err(|e| WeftError::Connection(format!("TLS init: {e}")))?;

        // Run the handshake to completion before handing the stream out.
        let mut adapter = IoAdapter::new(&mut *stream);
        while tls.is_handshaking() {
            tls.complete_io(&mut adapter)
                .map_err(|e| WeftError::Connection(format!("TLS handshake: {e}")))?;
        }

        Ok(Box::new(RustlsStream { tls, inner: stream }))
    }
}

// ---------------------------------------------------------------------------
// RustlsStream
// ---------------------------------------------------------------------------

/// A TLS-wrapped network stream.
///
/// [`rustls::ClientConnection`] does the crypto; raw record I/O is
/// delegated to the inner [`NetworkStream`].
struct RustlsStream {
    tls: rustls::ClientConnection,
    inner: Box<dyn NetworkStream>,
}

impl NetworkStream for RustlsStream {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        loop {
            match self.tls.reader().read(buf) {
                Ok(n) => return Ok(n),
                // No plaintext pending: pump ciphertext off the wire.
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => {
                    let mut adapter = IoAdapter::new(&mut *self.inner);
                    match self.tls.read_tls(&mut adapter) {
                        // Peer closed the transport. Some servers skip the
                        // close_notify alert, so treat this as end-of-stream
                        // rather than an error.
                        Ok(0) => return Ok(0),
                        Ok(_) => {},
                        Err(e) => {
                            return Err(WeftError::Connection(format!("TLS read: {e}")));
                        },
                    }
                    self.tls
                        .process_new_packets()
                        .map_err(|e| WeftError::Connection(format!("TLS process: {e}")))?;
                },
                Err(e) => return Err(WeftError::Connection(format!("TLS read: {e}"))),
            }
        }
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        let n = self
            .tls
            .writer()
            .write(data)
            .map_err(|e| WeftError::Connection(format!("TLS write: {e}")))?;

        // Flush the resulting ciphertext to the network.
        let mut adapter = IoAdapter::new(&mut *self.inner);
        while self.tls.wants_write() {
            self.tls
                .write_tls(&mut adapter)
                .map_err(|e| WeftError::Connection(format!("TLS write: {e}")))?;
        }

        Ok(n)
    }

    fn close(&mut self) -> Result<()> {
        self.tls.send_close_notify();
        let mut adapter = IoAdapter::new(&mut *self.inner);
        let _ = self.tls.write_tls(&mut adapter);
        self.inner.close()
    }
}

// ---------------------------------------------------------------------------
// IoAdapter: bridge NetworkStream to std::io::Read + std::io::Write
// ---------------------------------------------------------------------------

/// Thin wrapper that lets rustls drive `std::io` traits over a
/// `&mut dyn NetworkStream`.
struct IoAdapter<'a> {
    inner: &'a mut dyn NetworkStream,
}

impl<'a> IoAdapter<'a> {
    fn new(inner: &'a mut dyn NetworkStream) -> Self {
        Self { inner }
    }
}

impl io::Read for IoAdapter<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner
            .read(buf)
            .map_err(|e| io::Error::other(e.to_string()))
    }
}

impl io::Write for IoAdapter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner
            .write(buf)
            .map_err(|e| io::Error::other(e.to_string()))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
