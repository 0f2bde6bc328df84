use alloc::vec;
use alloc::vec::Vec;

use crate::log::{debug, warning};
use crate::network::runtime::{self, RuntimeGuard};
use crate::network::{Close, Connection, Transport};

use super::{ErrorKind, Headers, Method, ParsedUrl, Response, request};

/// A client bound to one URL.
///
/// Construction parses the URL and resolves the host; every [`send`] then
/// opens a fresh connection, performs one exchange and closes it again.
///
/// [`send`]: Request::send
pub struct Request<T: Transport> {
    url: ParsedUrl,
    transport: T,
    addrs: T::Addrs,
    _runtime: RuntimeGuard,
}

#[cfg(feature = "std")]
impl Request<crate::network::tls::TlsTransport> {
    /// Builds a client over the default TLS transport.
    pub fn new(url: &str) -> Result<Self, ErrorKind> {
        Self::with_transport(url, crate::network::tls::TlsTransport::default())
    }
}

impl<T: Transport> Request<T> {
    /// Parses `url` and resolves its host through `transport`.
    ///
    /// Fails with [`ErrorKind::InvalidURL`] or
    /// [`ErrorKind::FailedAddressResolve`]; no client exists afterwards.
    pub fn with_transport(url: &str, mut transport: T) -> Result<Self, ErrorKind> {
        let url = ParsedUrl::parse(url)?;
        let runtime = runtime::acquire();

        let addrs = transport.resolve(url.host(), url.port()).map_err(|_e| {
            warning!("failed to resolve {}: {}", url.host(), _e);
            ErrorKind::FailedAddressResolve
        })?;
        debug!("resolved {}:{}", url.host(), url.port());

        Ok(Self {
            url,
            transport,
            addrs,
            _runtime: runtime,
        })
    }

    pub fn url(&self) -> &ParsedUrl {
        &self.url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn get(&mut self, headers: &Headers, body: impl AsRef<[u8]>) -> Response {
        self.send(Method::Get, headers, body)
    }

    pub fn post(&mut self, headers: &Headers, body: impl AsRef<[u8]>) -> Response {
        self.send(Method::Post, headers, body)
    }

    /// Runs one request/response exchange on a new connection.
    ///
    /// Failures never panic: they come back as a [`Response`] whose
    /// [`error`](Response::error) names the failing stage. The connection is
    /// closed before this returns, whatever happened.
    pub fn send(
        &mut self,
        method: Method,
        headers: &Headers,
        body: impl AsRef<[u8]>,
    ) -> Response {
        match self.exchange(method, headers, body.as_ref()) {
            Ok(raw) => Response::parse(&raw),
            Err(kind) => {
                warning!("{} {} failed: {}", method.as_str(), self.url.host(), kind);
                Response::from_error(kind)
            }
        }
    }

    fn exchange(
        &mut self,
        method: Method,
        headers: &Headers,
        body: &[u8],
    ) -> Result<Vec<u8>, ErrorKind> {
        // Unknown schemes never get this far: their empty port fails resolution.
        let scheme = self.url.scheme_kind().ok_or(ErrorKind::FailedConnection)?;

        let socket = self.transport.connect(&self.addrs).map_err(ErrorKind::from)?;
        debug!("connected to {}", self.url.host());

        let session = self
            .transport
            .handshake(socket, self.url.host(), scheme)
            .map_err(|_| ErrorKind::FailedSSLConnection)?;
        debug!("session established with {}", self.url.host());

        // --- Build Request ---
        let wire = request::serialize(
            method,
            self.url.request_target(),
            self.url.host(),
            headers,
            body,
        );
        let chunk = self.transport.read_buffer_size();

        let raw = with_session(session, |session| {
            // --- Send Request ---
            write_all(session, &wire)?;
            debug!("sent {} bytes", wire.len());

            // --- Receive Response ---
            read_to_end(session, chunk)
        })?;
        debug!("received {} bytes", raw.len());

        Ok(raw)
    }
}

impl<T: Transport> core::fmt::Debug for Request<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Request").field("url", &self.url).finish_non_exhaustive()
    }
}

fn write_all<C: Connection>(conn: &mut C, mut buf: &[u8]) -> Result<(), ErrorKind> {
    while !buf.is_empty() {
        match conn.write(buf) {
            Ok(0) | Err(_) => return Err(ErrorKind::FailedSendRequest),
            Ok(n) => buf = &buf[n.min(buf.len())..],
        }
    }
    conn.flush().map_err(|_| ErrorKind::FailedSendRequest)
}

/// Reads until the peer closes the stream.
///
/// A read error after some data arrived is taken as the end of the stream:
/// many TLS servers drop the socket without a close_notify once a
/// `Connection: close` response is out.
fn read_to_end<C: Connection>(conn: &mut C, chunk: usize) -> Result<Vec<u8>, ErrorKind> {
    let mut scratch = vec![0u8; chunk.max(1)];
    let mut received = Vec::new();
    loop {
        match conn.read(&mut scratch) {
            Ok(0) if !received.is_empty() => break,
            Ok(0) => return Err(ErrorKind::FailedReceiveResponse),
            Ok(n) => received.extend_from_slice(&scratch[..n.min(scratch.len())]),
            Err(_) if !received.is_empty() => break,
            Err(_) => return Err(ErrorKind::FailedReceiveResponse),
        }
    }
    Ok(received)
}

/// Lends `session` to `f`, then closes it whatever `f` returned.
fn with_session<C: Close, R>(mut session: C, f: impl FnOnce(&mut C) -> R) -> R {
    let result = f(&mut session);
    if session.close().is_err() {
        debug!("session close reported an error");
    }
    result
}
