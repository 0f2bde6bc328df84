//! HTTP/1.1 client protocol.
//!
//! This module turns a URL and a few request parameters into a structured
//! [`Response`]. It is split along the request pipeline:
//!
//! - [`url`]: scheme/host/port/path decomposition
//! - [`request`]: wire serialization of the request
//! - [`response`] and [`chunked`]: response parsing and chunked body reassembly
//! - [`client`]: the [`Request`] orchestrator that drives a
//!   [`Transport`](crate::network::Transport) through one exchange
//!
//! # Features
//!
//! - HTTP/1.1 with `Connection: close`: one request per connection, the body
//!   is read until the server closes the stream
//! - `Content-Length` and `Transfer-Encoding: chunked` bodies
//! - Every failure is reported as an [`ErrorKind`] inside the [`Response`]
//!
//! Header maps are exact: names are case-sensitive and a later duplicate
//! replaces an earlier one.

use alloc::collections::BTreeMap;
use alloc::string::String;

pub mod chunked;
pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod url;

pub use client::Request;
pub use error::ErrorKind;
pub use request::Method;
pub use response::Response;
pub use url::{ParsedUrl, Scheme};

/// Header map used for both requests and responses.
pub type Headers = BTreeMap<String, String>;

/// Finds the first occurrence of a slice in another slice and returns its starting position.
pub(crate) fn find_slice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
