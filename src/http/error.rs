//! The error taxonomy carried by every [`Response`](super::Response).

use core::fmt;

use serde::Serialize;

use crate::network::error::Error as NetworkError;

/// What went wrong while building, sending, receiving or parsing a request.
///
/// `None` is the value of a response that went through cleanly. The numeric
/// code of each variant is its declaration order and is part of the
/// [`Display`](fmt::Display) output, e.g. `"Invalid URL (1)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[repr(u8)]
pub enum ErrorKind {
    /// No error occurred.
    #[default]
    None = 0,
    /// The URL has no `://` separator.
    InvalidURL,
    /// The received bytes are not a well-framed HTTP/1.1 response.
    InvalidResponse,
    /// The host could not be resolved.
    FailedAddressResolve,
    /// A socket could not be created.
    FailedSocketCreation,
    /// The socket could not connect to the host.
    FailedConnection,
    /// The TLS handshake failed.
    FailedSSLConnection,
    /// The request could not be written.
    FailedSendRequest,
    /// The server closed the stream before sending anything.
    FailedReceiveResponse,
}

impl ErrorKind {
    /// Fixed human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::None => "None",
            ErrorKind::InvalidURL => "Invalid URL",
            ErrorKind::InvalidResponse => "Invalid Response",
            ErrorKind::FailedAddressResolve => "Failed to parse url",
            ErrorKind::FailedSocketCreation => "Failed to create socket",
            ErrorKind::FailedConnection => "Failed to connect to host",
            ErrorKind::FailedSSLConnection => "Failed to connect ssl",
            ErrorKind::FailedSendRequest => "Failed to send request",
            ErrorKind::FailedReceiveResponse => "Failed to receive response",
        }
    }

    /// Numeric code, `0` for [`ErrorKind::None`].
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// `true` unless this is [`ErrorKind::None`].
    pub fn is_error(&self) -> bool {
        *self != ErrorKind::None
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.code())
    }
}

impl core::error::Error for ErrorKind {}

impl From<NetworkError> for ErrorKind {
    fn from(err: NetworkError) -> Self {
        match err {
            NetworkError::AddressResolve | NetworkError::InvalidAddress => {
                ErrorKind::FailedAddressResolve
            }
            NetworkError::SocketCreation => ErrorKind::FailedSocketCreation,
            NetworkError::Connection | NetworkError::ConnectionRefused => {
                ErrorKind::FailedConnection
            }
            NetworkError::Handshake => ErrorKind::FailedSSLConnection,
            NetworkError::WriteError => ErrorKind::FailedSendRequest,
            NetworkError::NotOpen
            | NetworkError::ReadError
            | NetworkError::Timeout
            | NetworkError::ConnectionClosed => ErrorKind::FailedReceiveResponse,
            NetworkError::ProtocolError => ErrorKind::InvalidResponse,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ErrorKind {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str} ({=u8})", self.description(), self.code())
    }
}
