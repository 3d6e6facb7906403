//! TLS provider abstraction.
//!
//! The embedding shell supplies a [`TlsProvider`] that wraps a plain
//! TCP [`NetworkStream`] in a TLS session. The HTTP client uses this
//! trait so it never depends on a concrete TLS library.

use weft_types::backend::NetworkStream;
use weft_types::error::Result;

/// Provides TLS client connections.
pub trait TlsProvider: Send + Sync {
    /// Wrap `stream` in a TLS client session, performing the handshake.
    ///
    /// `server_name` is used for SNI and certificate verification; no
    /// certificate overrides are supported.
    fn connect_tls(
        &self,
        stream: Box<dyn NetworkStream>,
        server_name: &str,
    ) -> Result<Box<dyn NetworkStream>>;
}
