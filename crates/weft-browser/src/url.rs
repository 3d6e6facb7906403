//! URL resolution.
//!
//! Turns a raw URL string into a typed descriptor. Supported forms:
//! `http://host[:port]/path`, `https://host[:port]/path`,
//! `file:///local/path.txt`, and a `view-source:` wrapper around the
//! http/https forms.

use std::fmt;

use weft_types::error::{Result, WeftError};

/// Transport scheme of a resolved URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
    File,
}

/// A resolved, immutable URL descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    pub scheme: Scheme,
    /// Present presentation-only: the body is shown raw instead of
    /// being stripped of markup. Fetching is unaffected.
    pub view_source: bool,
    /// Present iff the scheme is network-based.
    pub host: Option<String>,
    /// Present iff the scheme is network-based; defaults 80/443.
    pub port: Option<u16>,
    /// Always present. Starts with `/` for network schemes; verbatim
    /// local path for `file`.
    pub path: String,
}

impl Url {
    /// Parse a raw URL string.
    ///
    /// Fails with `MalformedUrl` when the scheme separator is missing
    /// or the scheme is unsupported, and with `UnsupportedFileType`
    /// when a `file` URL names anything but a `.txt` file.
    pub fn resolve(raw: &str) -> Result<Url> {
        let (view_source, rest) = match raw.strip_prefix("view-source:") {
            Some(inner) => (true, inner),
            None => (false, raw),
        };

        let (scheme_str, remainder) = rest.split_once("://").ok_or_else(|| {
            WeftError::MalformedUrl(format!("missing scheme separator in {raw:?}"))
        })?;

        let scheme = match scheme_str {
            "http" => Scheme::Http,
            "https" => Scheme::Https,
            "file" => Scheme::File,
            other => {
                return Err(WeftError::MalformedUrl(format!(
                    "unsupported scheme {other:?}"
                )));
            },
        };

        if scheme == Scheme::File {
            if view_source {
                return Err(WeftError::MalformedUrl(
                    "view-source wraps only http/https".to_string(),
                ));
            }
            // The remainder is a verbatim local path; only plain text
            // files are accepted.
            if !remainder.ends_with(".txt") {
                return Err(WeftError::UnsupportedFileType(remainder.to_string()));
            }
            return Ok(Url {
                scheme,
                view_source: false,
                host: None,
                port: None,
                path: remainder.to_string(),
            });
        }

        let mut port = if scheme == Scheme::Https { 443 } else { 80 };

        // A bare authority means the root path.
        let (host_port, path) = match remainder.split_once('/') {
            Some((authority, rest)) => (authority.to_string(), format!("/{rest}")),
            None => (remainder.to_string(), "/".to_string()),
        };

        let host = match host_port.split_once(':') {
            Some((host, explicit)) => {
                port = explicit.parse::<u16>().map_err(|_| {
                    WeftError::MalformedUrl(format!("bad port {explicit:?} in {raw:?}"))
                })?;
                host.to_string()
            },
            None => host_port,
        };

        Ok(Url {
            scheme,
            view_source,
            host: Some(host),
            port: Some(port),
            path,
        })
    }

    /// Whether this URL is fetched over the network.
    pub fn is_network(&self) -> bool {
        self.scheme != Scheme::File
    }

    fn default_port(&self) -> u16 {
        if self.scheme == Scheme::Https { 443 } else { 80 }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.view_source {
            write!(f, "view-source:")?;
        }
        match self.scheme {
            Scheme::File => write!(f, "file://{}", self.path),
            Scheme::Http | Scheme::Https => {
                let scheme = if self.scheme == Scheme::Https {
                    "https"
                } else {
                    "http"
                };
                write!(f, "{scheme}://")?;
                if let Some(host) = &self.host {
                    write!(f, "{host}")?;
                }
                if let Some(port) = self.port
                    && port != self.default_port()
                {
                    write!(f, ":{port}")?;
                }
                write!(f, "{}", self.path)
            },
        }
    }
}
