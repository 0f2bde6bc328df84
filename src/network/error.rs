//! Common error types for transport operations

use core::fmt;

/// A common error type for transport operations.
///
/// This enum defines the failures a [`Transport`](super::Transport) or a
/// connection can report. It is designed to be simple and portable for
/// `no_std` environments; the HTTP layer folds it into
/// [`ErrorKind`](crate::http::ErrorKind).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The host name could not be resolved to any address.
    AddressResolve,
    /// An invalid address or port was provided.
    InvalidAddress,
    /// A socket could not be created.
    SocketCreation,
    /// The socket could not connect to any resolved address.
    Connection,
    /// A connection attempt was refused.
    ConnectionRefused,
    /// The security handshake failed.
    Handshake,
    /// An operation was attempted on a connection that is not open.
    NotOpen,
    /// An error occurred during a write operation.
    WriteError,
    /// An error occurred during a read operation.
    ReadError,
    /// A timeout occurred.
    Timeout,
    /// The connection was closed.
    ConnectionClosed,
    /// A protocol-specific error occurred.
    ProtocolError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Error::AddressResolve => "address resolution failed",
            Error::InvalidAddress => "invalid address",
            Error::SocketCreation => "socket creation failed",
            Error::Connection => "connection failed",
            Error::ConnectionRefused => "connection refused",
            Error::Handshake => "handshake failed",
            Error::NotOpen => "connection not open",
            Error::WriteError => "write failed",
            Error::ReadError => "read failed",
            Error::Timeout => "timed out",
            Error::ConnectionClosed => "connection closed",
            Error::ProtocolError => "protocol error",
        };
        f.write_str(text)
    }
}

impl core::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::AddressResolve => defmt::write!(f, "AddressResolve"),
            Error::InvalidAddress => defmt::write!(f, "InvalidAddress"),
            Error::SocketCreation => defmt::write!(f, "SocketCreation"),
            Error::Connection => defmt::write!(f, "Connection"),
            Error::ConnectionRefused => defmt::write!(f, "ConnectionRefused"),
            Error::Handshake => defmt::write!(f, "Handshake"),
            Error::NotOpen => defmt::write!(f, "NotOpen"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::ConnectionClosed => defmt::write!(f, "ConnectionClosed"),
            Error::ProtocolError => defmt::write!(f, "ProtocolError"),
        }
    }
}
