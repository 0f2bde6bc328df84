//! HTTP/1.1 response parsing.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use super::{ErrorKind, Headers, chunked, find_slice};

const HEAD_END: &[u8] = b"\r\n\r\n";

/// A fully buffered response, or the error that prevented one.
///
/// Check [`error`](Response::error) or [`success`](Response::success) before
/// trusting the other fields: a response built from an error, or one whose
/// parsing failed half way, leaves them empty or partially filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Response {
    error: ErrorKind,
    statusline: String,
    protocol: String,
    status: u16,
    status_message: String,
    headers: Headers,
    body: Vec<u8>,
}

impl Response {
    /// Parses a complete response as received from the server.
    pub fn parse(raw: &[u8]) -> Self {
        let mut response = Self::default();
        if let Err(kind) = response.fill(raw) {
            response.error = kind;
        }
        response
    }

    /// A response that carries only `error`.
    pub fn from_error(error: ErrorKind) -> Self {
        Self {
            error,
            ..Self::default()
        }
    }

    fn fill(&mut self, raw: &[u8]) -> Result<(), ErrorKind> {
        let head_end = find_slice(raw, HEAD_END).ok_or(ErrorKind::InvalidResponse)?;
        let head = String::from_utf8_lossy(&raw[..head_end]);
        let region = &raw[head_end + HEAD_END.len()..];

        let mut lines = head.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l));

        self.parse_status_line(lines.next().unwrap_or(""))?;

        // Parse headers
        for line in lines.take_while(|l| !l.is_empty()) {
            if let Some((name, value)) = line.split_once(": ") {
                self.headers.insert(name.to_owned(), value.to_owned());
            }
        }

        // The body length is defined with content-length
        if let Some(length) = self.headers.get("Content-Length") {
            let length: usize = length
                .trim()
                .parse()
                .map_err(|_| ErrorKind::InvalidResponse)?;
            // A short region is truncated, as in a HEAD reply.
            self.body = region[..length.min(region.len())].to_vec();
        }
        // The body has been chunk encoded
        else if self.header("Transfer-Encoding") == Some("chunked") {
            self.body = chunked::decode(region)?;
        }

        Ok(())
    }

    fn parse_status_line(&mut self, line: &str) -> Result<(), ErrorKind> {
        self.statusline = line.to_owned();

        let rest = line.trim_start();
        let (protocol, rest) = split_token(rest);
        let (code, rest) = split_token(rest.trim_start());
        self.protocol = protocol.to_owned();
        self.status = code.parse().map_err(|_| ErrorKind::InvalidResponse)?;

        // A single separator follows the code; the rest is the message.
        let mut chars = rest.chars();
        chars.next();
        self.status_message = chars.as_str().to_owned();
        Ok(())
    }

    /// The error that occurred while sending, receiving or parsing.
    pub fn error(&self) -> ErrorKind {
        self.error
    }

    /// `true` if no error occurred and the status code is exactly 200.
    pub fn success(&self) -> bool {
        self.status == 200 && self.error == ErrorKind::None
    }

    /// The status line, for example `"HTTP/1.1 200 OK"`.
    pub fn statusline(&self) -> &str {
        &self.statusline
    }

    /// The protocol, for example `"HTTP/1.1"`.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// The status code, for example `200` or `404`.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The status message, for example `"OK"`.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Exact, case-sensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn body_str(&self) -> Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(&self.body)
    }

    /// Deserializes a JSON body.
    pub fn json<'a, T: Deserialize<'a>>(&'a self) -> Result<T, serde_json_core::de::Error> {
        serde_json_core::from_slice(&self.body).map(|(value, _)| value)
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

impl From<ErrorKind> for Response {
    fn from(error: ErrorKind) -> Self {
        Self::from_error(error)
    }
}

fn split_token(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(i) => s.split_at(i),
        None => (s, ""),
    }
}
