//! Minimal HTTP/1.0-1.1 GET client and local file fetch.
//!
//! One request, one response, one connection. The body is read until
//! the peer closes, which is why `transfer-encoding` and
//! `content-encoding` responses are rejected outright rather than
//! decoded.

use std::io::{Read, Write};

use weft_net::line_reader::CrlfReader;
use weft_net::stream::{StdNetworkStream, StreamAdapter};
use weft_net::tls::TlsProvider;
use weft_types::backend::NetworkStream;
use weft_types::error::{Result, WeftError};

use crate::headers::Headers;
use crate::url::{Scheme, Url};

/// Client identifier sent with every network request.
pub const USER_AGENT: &str = "weft/0.1";

/// A parsed response, or its 200-equivalent for local files.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub reason: String,
    /// Names folded to lowercase at parse time.
    pub headers: Headers,
    /// Remaining stream bytes after the header block, decoded as UTF-8
    /// (lossily).
    pub body: String,
}

/// Fetch the resource a resolved URL names.
///
/// `extra` headers overlay the mandatory defaults (caller wins on an
/// exact name match). `tls` supplies the HTTPS capability; https URLs
/// fail with `Connection` when it is absent.
pub fn fetch(url: &Url, extra: &Headers, tls: Option<&dyn TlsProvider>) -> Result<Response> {
    match url.scheme {
        Scheme::File => fetch_file(&url.path),
        Scheme::Http | Scheme::Https => fetch_http(url, extra, tls),
    }
}

/// Read a whole local text file.
///
/// No status line exists for local files; the read is presented as a
/// 200-equivalent success with no headers.
fn fetch_file(path: &str) -> Result<Response> {
    let body = std::fs::read_to_string(path)
        .map_err(|e| WeftError::LocalRead(format!("{path}: {e}")))?;
    Ok(Response {
        status: 200,
        reason: "OK".to_string(),
        headers: Headers::new(),
        body,
    })
}

/// Connect, optionally upgrade to TLS, send one GET, parse the reply.
fn fetch_http(url: &Url, extra: &Headers, tls: Option<&dyn TlsProvider>) -> Result<Response> {
    let host = url
        .host
        .as_deref()
        .ok_or_else(|| WeftError::MalformedUrl("network URL without host".to_string()))?;
    let port = url
        .port
        .ok_or_else(|| WeftError::MalformedUrl("network URL without port".to_string()))?;

    // An https URL without a TLS capability can never succeed; fail
    // before touching the network.
    let provider = if url.scheme == Scheme::Https {
        Some(tls.ok_or_else(|| {
            WeftError::Connection("TLS not available for https URL".to_string())
        })?)
    } else {
        None
    };

    let tcp = StdNetworkStream::connect(host, port)?;
    let stream: Box<dyn NetworkStream> = match provider {
        Some(provider) => provider.connect_tls(Box::new(tcp), host)?,
        None => Box::new(tcp),
    };

    let headers = build_headers(host, extra);
    let version = http_version(extra);
    let request = serialize_request(&url.path, version, &headers);
    log::debug!("GET {} HTTP/{version} ({host}:{port})", url.path);

    let mut adapter = StreamAdapter(stream);
    adapter
        .write_all(request.as_bytes())
        .map_err(|e| WeftError::Connection(format!("send request: {e}")))?;

    let response = read_response(CrlfReader::new(adapter))?;
    log::debug!(
        "{} {} ({} body bytes)",
        response.status,
        response.reason,
        response.body.len(),
    );
    Ok(response)
}

/// Mandatory defaults first, then the caller overlay.
fn build_headers(host: &str, extra: &Headers) -> Headers {
    let mut headers = Headers::new();
    headers.set("HOST", host);
    headers.set("User-Agent", USER_AGENT);
    for (name, value) in extra.iter() {
        headers.set(name, value);
    }
    headers
}

/// `HTTP/1.0` unless the caller asked for `Connection: close`.
///
/// Closing a connection mid-stream is only well-defined in 1.1, so
/// that is the one case where the newer version is requested. No
/// keep-alive or pipelining happens either way.
fn http_version(extra: &Headers) -> &'static str {
    match extra.get("Connection") {
        Some(v) if v.trim().eq_ignore_ascii_case("close") => "1.1",
        _ => "1.0",
    }
}

/// Request line, headers in insertion order, terminating blank line.
fn serialize_request(path: &str, version: &str, headers: &Headers) -> String {
    let mut request = format!("GET {path} HTTP/{version}\r\n");
    for (name, value) in headers.iter() {
        request.push_str(name);
        request.push_str(": ");
        request.push_str(value);
        request.push_str("\r\n");
    }
    request.push_str("\r\n");
    request
}

/// Parse status line and header block, then read the body to the end
/// of the stream.
fn read_response<R: Read>(mut reader: CrlfReader<R>) -> Result<Response> {
    let status_line = reader.read_line()?;
    let (status, reason) = parse_status_line(&status_line)?;

    let mut headers = Headers::new();
    loop {
        let line = reader.read_line()?;
        if line.is_empty() {
            break;
        }
        let (name, value) = line.split_once(':').ok_or_else(|| {
            WeftError::Protocol(format!("malformed header line: {line:?}"))
        })?;
        headers.set(&name.to_lowercase(), value.trim());
    }

    // Only identity-encoded, read-to-close bodies are supported.
    for unsupported in ["transfer-encoding", "content-encoding"] {
        if headers.get(unsupported).is_some() {
            return Err(WeftError::Protocol(format!(
                "unsupported response encoding: {unsupported}"
            )));
        }
    }

    let body = reader.read_remaining()?;
    Ok(Response {
        status,
        reason,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

/// Split `HTTP/1.x NNN Reason phrase` on its first two spaces.
fn parse_status_line(line: &str) -> Result<(u16, String)> {
    let mut parts = line.splitn(3, ' ');
    let _version = parts.next();
    let status = parts
        .next()
        .ok_or_else(|| WeftError::Protocol(format!("bad status line: {line:?}")))?
        .parse::<u16>()
        .map_err(|_| WeftError::Protocol(format!("bad status code in: {line:?}")))?;
    let reason = parts.next().unwrap_or("").to_string();
    Ok((status, reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::serve_once;

    fn local_url(port: u16, path: &str) -> Url {
        Url::resolve(&format!("http://127.0.0.1:{port}{path}")).unwrap()
    }

    #[test]
    fn simple_response_parsed() {
        let (port, server) = serve_once(
            b"HTTP/1.0 200 OK\r\n\
              Content-Type: text/html\r\n\
              \r\n\
              <html>hi</html>",
        );
        let resp = fetch(&local_url(port, "/"), &Headers::new(), None).unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(resp.reason, "OK");
        assert_eq!(resp.headers.get("content-type"), Some("text/html"));
        assert_eq!(resp.body, "<html>hi</html>");
        server.join().unwrap();
    }

    #[test]
    fn reason_phrase_with_spaces_preserved() {
        let (port, server) = serve_once(b"HTTP/1.0 404 Not Found\r\n\r\n");
        let resp = fetch(&local_url(port, "/missing"), &Headers::new(), None).unwrap();
        assert_eq!(resp.status, 404);
        assert_eq!(resp.reason, "Not Found");
        assert_eq!(resp.body, "");
        server.join().unwrap();
    }

    #[test]
    fn response_header_names_folded() {
        let (port, server) = serve_once(
            b"HTTP/1.0 200 OK\r\n\
              X-Custom-Header:  spaced value \r\n\
              \r\nbody",
        );
        let resp = fetch(&local_url(port, "/"), &Headers::new(), None).unwrap();
        // Folded at parse time, looked up case-insensitively.
        assert_eq!(resp.headers.get("x-custom-header"), Some("spaced value"));
        assert_eq!(resp.headers.get("X-CUSTOM-HEADER"), Some("spaced value"));
        server.join().unwrap();
    }

    #[test]
    fn content_encoding_rejected_without_body() {
        let (port, server) = serve_once(
            b"HTTP/1.0 200 OK\r\n\
              content-encoding: gzip\r\n\
              \r\n\
              \x1f\x8bcompressed",
        );
        let err = fetch(&local_url(port, "/"), &Headers::new(), None).unwrap_err();
        assert!(matches!(err, WeftError::Protocol(_)), "got: {err}");
        server.join().unwrap();
    }

    #[test]
    fn transfer_encoding_rejected() {
        let (port, server) = serve_once(
            b"HTTP/1.0 200 OK\r\n\
              Transfer-Encoding: chunked\r\n\
              \r\n\
              5\r\nhello\r\n0\r\n\r\n",
        );
        let err = fetch(&local_url(port, "/"), &Headers::new(), None).unwrap_err();
        assert!(matches!(err, WeftError::Protocol(_)), "got: {err}");
        server.join().unwrap();
    }

    #[test]
    fn malformed_status_line_is_protocol_error() {
        let (port, server) = serve_once(b"garbage\r\n\r\n");
        let err = fetch(&local_url(port, "/"), &Headers::new(), None).unwrap_err();
        assert!(matches!(err, WeftError::Protocol(_)), "got: {err}");
        server.join().unwrap();
    }

    #[test]
    fn malformed_header_line_is_protocol_error() {
        let (port, server) = serve_once(
            b"HTTP/1.0 200 OK\r\n\
              this header has no colon\r\n\
              \r\n",
        );
        let err = fetch(&local_url(port, "/"), &Headers::new(), None).unwrap_err();
        assert!(matches!(err, WeftError::Protocol(_)), "got: {err}");
        server.join().unwrap();
    }

    #[test]
    fn request_defaults_to_http_1_0() {
        let (port, server) = serve_once(b"HTTP/1.0 200 OK\r\n\r\nok");
        fetch(&local_url(port, "/page"), &Headers::new(), None).unwrap();
        let request = String::from_utf8(server.join().unwrap()).unwrap();

        let mut lines = request.split("\r\n");
        assert_eq!(lines.next(), Some("GET /page HTTP/1.0"));
        assert_eq!(lines.next(), Some("HOST: 127.0.0.1"));
        assert_eq!(lines.next(), Some("User-Agent: weft/0.1"));
        assert_eq!(lines.next(), Some(""));
    }

    #[test]
    fn connection_close_selects_http_1_1() {
        let (port, server) = serve_once(b"HTTP/1.0 200 OK\r\n\r\nok");
        let extra = Headers::from_pairs(&[("Connection", "close")]);
        fetch(&local_url(port, "/"), &extra, None).unwrap();
        let request = String::from_utf8(server.join().unwrap()).unwrap();

        assert!(request.starts_with("GET / HTTP/1.1\r\n"), "{request}");
        assert!(request.contains("Connection: close\r\n"));
        // Defaults are still present.
        assert!(request.contains("HOST: 127.0.0.1\r\n"));
        assert!(request.contains("User-Agent: weft/0.1\r\n"));
    }

    #[test]
    fn caller_header_overrides_default() {
        let (port, server) = serve_once(b"HTTP/1.0 200 OK\r\n\r\nok");
        let extra = Headers::from_pairs(&[("User-Agent", "custom/9.9")]);
        fetch(&local_url(port, "/"), &extra, None).unwrap();
        let request = String::from_utf8(server.join().unwrap()).unwrap();

        assert!(request.contains("User-Agent: custom/9.9\r\n"));
        assert!(!request.contains("weft/0.1"));
        // Replacement, not duplication.
        assert_eq!(request.matches("User-Agent:").count(), 1);
    }

    #[test]
    fn extra_headers_appended_in_order() {
        let (port, server) = serve_once(b"HTTP/1.0 200 OK\r\n\r\nok");
        let extra = Headers::from_pairs(&[("X-First", "1"), ("X-Second", "2")]);
        fetch(&local_url(port, "/"), &extra, None).unwrap();
        let request = String::from_utf8(server.join().unwrap()).unwrap();

        let first = request.find("X-First").unwrap();
        let second = request.find("X-Second").unwrap();
        assert!(first < second);
        assert!(request.ends_with("\r\n\r\n"));
    }

    #[test]
    fn connect_to_closed_port_is_connection_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let err = fetch(&local_url(port, "/"), &Headers::new(), None).unwrap_err();
        assert!(matches!(err, WeftError::Connection(_)), "got: {err}");
    }

    #[test]
    fn https_without_tls_provider_is_connection_error() {
        let url = Url::resolve("https://127.0.0.1:1/").unwrap();
        let err = fetch(&url, &Headers::new(), None).unwrap_err();
        assert!(matches!(err, WeftError::Connection(_)), "got: {err}");
    }

    #[test]
    fn file_fetch_reads_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.txt");
        std::fs::write(&path, "plain file contents\nsecond line\n").unwrap();

        let url = Url::resolve(&format!("file://{}", path.display())).unwrap();
        let resp = fetch(&url, &Headers::new(), None).unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(resp.reason, "OK");
        assert!(resp.headers.is_empty());
        assert_eq!(resp.body, "plain file contents\nsecond line\n");
    }

    #[test]
    fn missing_file_is_local_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let url = Url::resolve(&format!("file://{}", path.display())).unwrap();
        let err = fetch(&url, &Headers::new(), None).unwrap_err();
        assert!(matches!(err, WeftError::LocalRead(_)), "got: {err}");
    }

    #[test]
    fn status_line_version_selection_pure() {
        assert_eq!(http_version(&Headers::new()), "1.0");
        assert_eq!(
            http_version(&Headers::from_pairs(&[("Connection", "close")])),
            "1.1",
        );
        assert_eq!(
            http_version(&Headers::from_pairs(&[("connection", "CLOSE")])),
            "1.1",
        );
        assert_eq!(
            http_version(&Headers::from_pairs(&[("Connection", "keep-alive")])),
            "1.0",
        );
    }

    #[test]
    fn parse_status_line_variants() {
        assert_eq!(
            parse_status_line("HTTP/1.0 200 OK").unwrap(),
            (200, "OK".to_string()),
        );
        assert_eq!(
            parse_status_line("HTTP/1.1 301 Moved Permanently").unwrap(),
            (301, "Moved Permanently".to_string()),
        );
        // A missing reason phrase is tolerated.
        assert_eq!(parse_status_line("HTTP/1.0 204").unwrap(), (204, String::new()));
        assert!(parse_status_line("garbage").is_err());
        assert!(parse_status_line("HTTP/1.0 abc OK").is_err());
    }
}
