//! Error types for weft.
//!
//! Every failure a load can hit is a variant here. None of them are
//! recovered internally: they propagate to the caller and terminate the
//! current load, leaving previously rendered content untouched.

use std::io;

/// Errors produced by the weft crates.
#[derive(Debug, thiserror::Error)]
pub enum WeftError {
    /// The URL string has no scheme separator, an unsupported scheme,
    /// or an unparseable host/port form.
    #[error("malformed URL: {0}")]
    MalformedUrl(String),

    /// A `file` URL pointing at anything other than a `.txt` file.
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// DNS, TCP connect, or TLS handshake failure.
    #[error("connection error: {0}")]
    Connection(String),

    /// Malformed status/header line, or a response encoding the client
    /// does not support.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// A local file that is missing or unreadable.
    #[error("local read error: {0}")]
    LocalRead(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, WeftError>;
