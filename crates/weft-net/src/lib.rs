//! Networking for weft.
//!
//! Provides the blocking TCP [`StdNetworkStream`], the [`TlsProvider`]
//! abstraction (with a rustls implementation behind the `tls-rustls`
//! feature), and the CRLF-oriented [`CrlfReader`] the HTTP client
//! parses responses with.

pub mod line_reader;
pub mod stream;
pub mod tls;
#[cfg(feature = "tls-rustls")]
pub mod tls_rustls;

pub use line_reader::CrlfReader;
pub use stream::{StdNetworkStream, StreamAdapter};
pub use tls::TlsProvider;
#[cfg(feature = "tls-rustls")]
pub use tls_rustls::RustlsTlsProvider;
