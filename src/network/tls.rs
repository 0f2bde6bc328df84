//! Hosted transport: DNS and TCP from `std::net`, TLS from `rustls`.

use std::io::{self, Read as _, Write as _};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::sync::Arc;

use rustls::pki_types::ServerName;
use rustls::{ClientConfig, ClientConnection, RootCertStore, StreamOwned};

use super::error::Error;
use super::{Close, Connection, Read, Transport, Write};
use crate::http::url::Scheme;
use crate::log::debug;

/// Which resolved addresses to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressFamily {
    /// IPv4 only
    #[default]
    V4,
    /// IPv6 only
    V6,
    /// Both, in resolver order
    Any,
}

impl AddressFamily {
    fn admits(&self, addr: &SocketAddr) -> bool {
        match self {
            AddressFamily::V4 => addr.is_ipv4(),
            AddressFamily::V6 => addr.is_ipv6(),
            AddressFamily::Any => true,
        }
    }
}

/// Options for [`TlsTransport`].
#[derive(Debug, Clone)]
pub struct TlsOptions {
    /// Address family filter applied after resolution.
    pub family: AddressFamily,
    /// Scratch buffer size for the receive loop.
    pub read_buffer_size: usize,
    /// TLS client configuration; `None` uses the webpki root store.
    pub config: Option<Arc<ClientConfig>>,
}

impl Default for TlsOptions {
    fn default() -> Self {
        Self {
            family: AddressFamily::V4,
            read_buffer_size: 1000,
            config: None,
        }
    }
}

/// [`Transport`] over `std::net` sockets with `rustls` sessions.
#[derive(Debug, Clone)]
pub struct TlsTransport {
    family: AddressFamily,
    read_buffer_size: usize,
    config: Arc<ClientConfig>,
}

impl TlsTransport {
    pub fn new(options: TlsOptions) -> Self {
        Self {
            family: options.family,
            read_buffer_size: options.read_buffer_size,
            config: options.config.unwrap_or_else(default_config),
        }
    }

    pub fn config(&self) -> &Arc<ClientConfig> {
        &self.config
    }
}

impl Default for TlsTransport {
    fn default() -> Self {
        Self::new(TlsOptions::default())
    }
}

/// Client configuration trusting the Mozilla roots shipped by `webpki-roots`.
pub fn default_config() -> Arc<ClientConfig> {
    let mut roots = RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder()
        .with_root_certificates(roots)
        .with_no_client_auth();
    Arc::new(config)
}

impl Transport for TlsTransport {
    type Addrs = Vec<SocketAddr>;
    type Socket = TcpStream;
    type Session = Session;

    fn resolve(&mut self, host: &str, port: &str) -> Result<Self::Addrs, Error> {
        let port: u16 = port.parse().map_err(|_| Error::InvalidAddress)?;
        let addrs: Vec<SocketAddr> = (host, port)
            .to_socket_addrs()
            .map_err(|_| Error::AddressResolve)?
            .filter(|addr| self.family.admits(addr))
            .collect();

        if addrs.is_empty() {
            return Err(Error::AddressResolve);
        }
        Ok(addrs)
    }

    fn connect(&mut self, addrs: &Self::Addrs) -> Result<Self::Socket, Error> {
        TcpStream::connect(&addrs[..]).map_err(|e| match e.kind() {
            io::ErrorKind::ConnectionRefused => Error::ConnectionRefused,
            _ => Error::Connection,
        })
    }

    fn handshake(
        &mut self,
        socket: Self::Socket,
        host: &str,
        scheme: Scheme,
    ) -> Result<Self::Session, Error> {
        if scheme == Scheme::Http {
            return Ok(Session::Plain(socket));
        }

        let server_name = ServerName::try_from(host.to_string()).map_err(|_| Error::Handshake)?;
        let conn = ClientConnection::new(self.config.clone(), server_name)
            .map_err(|_| Error::Handshake)?;

        let mut stream = StreamOwned::new(conn, socket);
        while stream.conn.is_handshaking() {
            stream
                .conn
                .complete_io(&mut stream.sock)
                .map_err(|_| Error::Handshake)?;
        }
        debug!("tls handshake complete");

        Ok(Session::Tls(Box::new(stream)))
    }

    fn read_buffer_size(&self) -> usize {
        self.read_buffer_size
    }
}

/// A connected stream, encrypted or not.
pub enum Session {
    Plain(TcpStream),
    Tls(Box<StreamOwned<ClientConnection, TcpStream>>),
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Session::Plain(sock) => f.debug_tuple("Plain").field(sock).finish(),
            Session::Tls(stream) => f.debug_tuple("Tls").field(&stream.sock).finish(),
        }
    }
}

impl Read for Session {
    type Error = Error;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let result = match self {
            Session::Plain(stream) => stream.read(buf),
            Session::Tls(stream) => stream.read(buf),
        };
        result.map_err(|e| {
            if e.kind() == io::ErrorKind::WouldBlock || e.kind() == io::ErrorKind::TimedOut {
                Error::Timeout
            } else {
                Error::ReadError
            }
        })
    }
}

impl Write for Session {
    type Error = Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        match self {
            Session::Plain(stream) => stream.write(buf),
            Session::Tls(stream) => stream.write(buf),
        }
        .map_err(|_| Error::WriteError)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        match self {
            Session::Plain(stream) => stream.flush(),
            Session::Tls(stream) => stream.flush(),
        }
        .map_err(|_| Error::WriteError)
    }
}

impl Close for Session {
    type Error = Error;
    fn close(self) -> Result<(), Self::Error> {
        let sock = match self {
            Session::Plain(sock) => sock,
            Session::Tls(mut stream) => {
                stream.conn.send_close_notify();
                // Best effort; the peer may already be gone.
                let _ = stream.conn.complete_io(&mut stream.sock);
                stream.sock
            }
        };
        // NotConnected after the peer hung up is expected.
        match sock.shutdown(Shutdown::Both) {
            Err(e) if e.kind() != io::ErrorKind::NotConnected => Err(Error::ConnectionClosed),
            _ => Ok(()),
        }
    }
}

impl Connection for Session {}
