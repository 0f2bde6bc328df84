use core::fmt::Write;

use alloc::vec::Vec;
use heapless::String;

use super::Headers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl core::fmt::Display for Method {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the wire form of an HTTP/1.1 request.
///
/// Caller headers go out first, in map order. `Host`, `Connection: close` and
/// `Content-Length` (for a non-empty body) are added only when the caller did
/// not supply a header with that exact name.
pub fn serialize(
    method: Method,
    target: &str,
    host: &str,
    headers: &Headers,
    body: &[u8],
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(128 + body.len());

    // Request line
    push_all(&mut buf, &[method.as_str(), " ", target, " HTTP/1.1\r\n"]);

    // Headers
    for (name, value) in headers {
        push_all(&mut buf, &[name.as_str(), ": ", value.as_str(), "\r\n"]);
    }

    if !headers.contains_key("Host") {
        push_all(&mut buf, &["Host: ", host, "\r\n"]);
    }

    // The receive loop reads until the peer closes, so ask it to.
    if !headers.contains_key("Connection") {
        buf.extend_from_slice(b"Connection: close\r\n");
    }

    if !headers.contains_key("Content-Length") && !body.is_empty() {
        let mut len_str: String<20> = String::new();
        // u64::MAX has 20 digits, so this cannot overflow.
        let _ = write!(len_str, "{}", body.len());
        push_all(&mut buf, &["Content-Length: ", len_str.as_str(), "\r\n"]);
    }

    // Body
    buf.extend_from_slice(b"\r\n");
    buf.extend_from_slice(body);
    buf
}

fn push_all(buf: &mut Vec<u8>, parts: &[&str]) {
    for part in parts {
        buf.extend_from_slice(part.as_bytes());
    }
}
