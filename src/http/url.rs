//! URL decomposition into scheme, host, port and path.

use alloc::string::{String, ToString};

use serde::Serialize;

use super::ErrorKind;

/// Schemes with a known default port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Scheme {
    /// Plain HTTP, port 80
    Http,
    /// HTTP over TLS, port 443
    Https,
}

impl Scheme {
    /// Recognizes `"http"` and `"https"`, exactly.
    pub fn parse(scheme: &str) -> Option<Self> {
        match scheme {
            "http" => Some(Scheme::Http),
            "https" => Some(Scheme::Https),
            _ => None,
        }
    }

    /// `"80"` or `"443"`.
    pub fn default_port(&self) -> &'static str {
        match self {
            Scheme::Http => "80",
            Scheme::Https => "443",
        }
    }
}

/// A URL split into the pieces the client needs.
///
/// The host segment is kept verbatim: `example.com:8443` stays the host and
/// the port comes from the scheme alone. An unknown scheme leaves `port`
/// empty, which then fails address resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    scheme: String,
    host: String,
    port: String,
    path: String,
}

impl ParsedUrl {
    /// Splits `url` at the first `://` and then at the first `/` after it.
    pub fn parse(url: &str) -> Result<Self, ErrorKind> {
        let (scheme, rest) = url.split_once("://").ok_or(ErrorKind::InvalidURL)?;

        let (host, path) = match rest.find('/') {
            Some(slash) => rest.split_at(slash),
            None => (rest, ""),
        };

        let port = Scheme::parse(scheme)
            .map(|s| s.default_port())
            .unwrap_or("");

        Ok(Self {
            scheme: scheme.to_string(),
            host: host.to_string(),
            port: port.to_string(),
            path: path.to_string(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn scheme_kind(&self) -> Option<Scheme> {
        Scheme::parse(&self.scheme)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port as text; empty for unknown schemes.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Path including the leading `/`, or empty.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The path to put on the request line: `/` when the URL has none.
    pub fn request_target(&self) -> &str {
        if self.path.is_empty() { "/" } else { &self.path }
    }
}
