//! A transport abstraction layer for the HTTP client
//!
//! This module provides the set of traits the protocol core drives to reach a
//! server: stream traits for a connected duplex byte stream, and a
//! [`Transport`] trait covering address resolution, connection establishment
//! and the security handshake. Each step fails independently with its own
//! [`Error`](error::Error) variant.
//!

#![deny(unsafe_code)]

use crate::http::url::Scheme;

/// Common error types for transport operations
pub mod error;

/// Reference-counted process-wide network stack initialization
pub mod runtime;

/// Hosted transport over `std::net` and `rustls`
#[cfg(feature = "std")]
pub mod tls;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Close, Connection, Read, Transport, Write};
}

// Core synchronous traits
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Read data from the connection. `Ok(0)` means end of stream.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection
    fn close(self) -> Result<(), Self::Error>;
}

/// A synchronous connection
pub trait Connection: Read + Write + Close {}

/// Everything needed to turn a host name into an established session.
///
/// An implementation owns whatever configuration the steps need (trust
/// anchors, address family). Sockets and sessions are owned values: dropping
/// one releases it, and a socket handed to [`Transport::handshake`] is
/// consumed whether or not the handshake succeeds.
pub trait Transport {
    /// Result of address resolution, kept by the client between calls
    type Addrs;
    /// A connected socket that has not been secured yet
    type Socket;
    /// An established session ready for request traffic
    type Session: Connection;

    /// Resolve `host` and `port` into one or more addresses.
    fn resolve(&mut self, host: &str, port: &str) -> Result<Self::Addrs, error::Error>;

    /// Open a socket to one of the resolved addresses.
    fn connect(&mut self, addrs: &Self::Addrs) -> Result<Self::Socket, error::Error>;

    /// Secure the socket for `host`. For [`Scheme::Http`] the socket is
    /// expected to be returned as a plain session.
    fn handshake(
        &mut self,
        socket: Self::Socket,
        host: &str,
        scheme: Scheme,
    ) -> Result<Self::Session, error::Error>;

    /// Size of the scratch buffer used by the receive loop
    fn read_buffer_size(&self) -> usize {
        1000
    }
}
