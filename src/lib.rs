//! # libhttp - minimal synchronous HTTP client
//!
//! A small HTTP/1.1 client library: give it a URL, it resolves the host,
//! opens a secure transport, sends a request and parses the raw byte stream
//! back into a structured response, including chunked transfer encoding.
//!
//! ## Features
//!
//! ### Protocol Core
//! - **URL Parser**: scheme, host, default port and path
//! - **Request Serializer**: HTTP/1.1 request line, headers and body
//! - **Response Parser**: status line, headers, `Content-Length` and chunked bodies
//!
//! ### Transport Abstraction
//! - Resolve, connect and handshake steps behind one [`Transport`](network::Transport) trait
//! - Read/Write/Close traits for the established byte stream
//! - A `rustls` transport for hosted targets (feature `std`)
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libhttp = "0.1.0"
//! ```
//!
//! ### Basic GET Example
//!
//! ```rust,no_run
//! use libhttp::http::{Headers, Request};
//!
//! let mut req = Request::new("https://httpbin.org/get")?;
//! let resp = req.get(&Headers::new(), "");
//! if resp.success() {
//!     println!("{} {} {}", resp.protocol(), resp.status(), resp.status_message());
//!     for (name, value) in resp.headers() {
//!         println!("{name}: {value}");
//!     }
//!     println!("{}", String::from_utf8_lossy(resp.body()));
//! }
//! # Ok::<(), libhttp::http::ErrorKind>(())
//! ```
//!
//! ### POST with Headers
//!
//! ```rust,no_run
//! use libhttp::http::{Headers, Request};
//!
//! let mut headers = Headers::new();
//! headers.insert("User-Agent".into(), "Test User-Agent".into());
//!
//! let mut req = Request::new("https://httpbin.org/post")?;
//! let resp = req.post(&headers, "{\"test\": 69}");
//! println!("{}", resp.error());
//! # Ok::<(), libhttp::http::ErrorKind>(())
//! ```
//!
//! ## Platform Support
//!
//! The protocol core needs only `core` and `alloc`, so it runs on any target
//! with a heap and a [`Transport`](network::Transport) implementation.
//!
//! ## Optional Features
//!
//! - `std`: Hosted TLS transport over `std::net` and `rustls` (default: enabled)
//! - `log`: Emit diagnostics through the `log` facade
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_debug_implementations)]

extern crate alloc;

mod log;

/// Transport abstraction layer: stream traits, the [`Transport`](network::Transport)
/// trait, the network runtime and the hosted TLS transport.
pub mod network;

/// HTTP/1.1 request serialization, response parsing and the request orchestrator.
pub mod http;

pub use http::{ErrorKind, Headers, Method, Request, Response};
