use crate::mock::{MockTransport, Stage};
use libhttp::http::{ErrorKind, Headers, Method, Request, Scheme};
use libhttp::network::error::Error;

const HELLO: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello";

fn client(url: &str, transport: MockTransport) -> Request<MockTransport> {
    Request::with_transport(url, transport).expect("mock resolution succeeds")
}

#[test]
fn test_get_round_trip() {
    let transport = MockTransport::responding(HELLO);
    let record = transport.record.clone();
    let mut req = client("https://httpbin.org/get", transport);

    let resp = req.get(&Headers::new(), "");

    assert_eq!(resp.error(), ErrorKind::None);
    assert!(resp.success());
    assert_eq!(resp.body(), b"hello");

    let record = record.borrow();
    assert_eq!(record.resolved, [("httpbin.org".to_string(), "443".to_string())]);
    assert_eq!(record.connects, 1);
    assert_eq!(record.handshakes, [("httpbin.org".to_string(), Scheme::Https)]);
    assert_eq!(
        record.written_text(),
        "GET /get HTTP/1.1\r\nHost: httpbin.org\r\nConnection: close\r\n\r\n"
    );
    assert_eq!(record.flushes, 1);
    assert_eq!(record.closes, 1);
}

#[test]
fn test_post_sends_headers_and_body() {
    let transport = MockTransport::responding(HELLO);
    let record = transport.record.clone();
    let mut req = client("https://httpbin.org/post", transport);

    let mut headers = Headers::new();
    headers.insert("User-Agent".to_string(), "Test User-Agent".to_string());
    let resp = req.post(&headers, "{\"test\": 69}");
    assert!(resp.success());

    let written = record.borrow().written_text();
    assert!(written.starts_with("POST /post HTTP/1.1\r\n"));
    assert!(written.contains("User-Agent: Test User-Agent\r\n"));
    assert!(written.contains("Content-Length: 12\r\n"));
    assert!(written.ends_with("\r\n\r\n{\"test\": 69}"));
}

#[test]
fn test_send_with_other_method() {
    let transport = MockTransport::responding(HELLO);
    let record = transport.record.clone();
    let mut req = client("https://example.com/item/7", transport);

    req.send(Method::Delete, &Headers::new(), b"");

    assert!(record.borrow().written_text().starts_with("DELETE /item/7 HTTP/1.1\r\n"));
}

#[test]
fn test_head_reply_is_success_without_body() {
    let transport = MockTransport::responding(
        b"HTTP/1.1 200 OK\r\nContent-Length: 1234\r\nContent-Type: text/html\r\n\r\n",
    );
    let record = transport.record.clone();
    let mut req = client("https://example.com/index.html", transport);

    let resp = req.send(Method::Head, &Headers::new(), b"");

    assert_eq!(resp.error(), ErrorKind::None);
    assert!(resp.success());
    assert!(resp.body().is_empty());
    assert!(record.borrow().written_text().starts_with("HEAD /index.html HTTP/1.1\r\n"));
}

#[test]
fn test_empty_path_requests_root() {
    let transport = MockTransport::responding(HELLO);
    let record = transport.record.clone();
    let mut req = client("https://example.com", transport);

    req.get(&Headers::new(), "");

    assert!(record.borrow().written_text().starts_with("GET / HTTP/1.1\r\n"));
}

#[test]
fn test_http_scheme_asks_for_plain_session() {
    let transport = MockTransport::responding(HELLO);
    let record = transport.record.clone();
    let mut req = client("http://example.com/", transport);

    assert!(req.get(&Headers::new(), "").success());

    let record = record.borrow();
    assert_eq!(record.resolved[0].1, "80");
    assert_eq!(record.handshakes[0].1, Scheme::Http);
}

#[test]
fn test_invalid_url_fails_construction() {
    let transport = MockTransport::new();
    let record = transport.record.clone();

    let err = Request::with_transport("httpbin.org/get", transport).unwrap_err();

    assert_eq!(err, ErrorKind::InvalidURL);
    assert!(record.borrow().resolved.is_empty());
}

#[test]
fn test_resolve_failure_fails_construction() {
    let transport = MockTransport::failing_at(Stage::Resolve, Error::AddressResolve);
    let err = Request::with_transport("https://nowhere.invalid/", transport).unwrap_err();
    assert_eq!(err, ErrorKind::FailedAddressResolve);
}

#[test]
fn test_unknown_scheme_fails_resolution() {
    let err = Request::with_transport("ftp://example.com/", MockTransport::new()).unwrap_err();
    assert_eq!(err, ErrorKind::FailedAddressResolve);
}

#[test]
fn test_socket_creation_failure() {
    let transport = MockTransport::failing_at(Stage::Connect, Error::SocketCreation);
    let record = transport.record.clone();
    let mut req = client("https://example.com/", transport);

    let resp = req.get(&Headers::new(), "");

    assert_eq!(resp.error(), ErrorKind::FailedSocketCreation);
    assert!(!resp.success());
    assert!(record.borrow().handshakes.is_empty());
}

#[test]
fn test_connection_failure() {
    let transport = MockTransport::failing_at(Stage::Connect, Error::ConnectionRefused);
    let record = transport.record.clone();
    let mut req = client("https://example.com/", transport);

    assert_eq!(req.get(&Headers::new(), "").error(), ErrorKind::FailedConnection);
    assert_eq!(record.borrow().closes, 0);
}

#[test]
fn test_handshake_failure() {
    let transport = MockTransport::failing_at(Stage::Handshake, Error::Handshake);
    let record = transport.record.clone();
    let mut req = client("https://example.com/", transport);

    let resp = req.get(&Headers::new(), "");

    assert_eq!(resp.error(), ErrorKind::FailedSSLConnection);
    assert!(record.borrow().written.is_empty());
}

#[test]
fn test_write_failure_closes_session() {
    let transport = MockTransport::failing_at(Stage::Write, Error::WriteError);
    let record = transport.record.clone();
    let mut req = client("https://example.com/", transport);

    let resp = req.get(&Headers::new(), "");

    assert_eq!(resp.error(), ErrorKind::FailedSendRequest);
    assert_eq!(record.borrow().closes, 1);
}

#[test]
fn test_zero_byte_write_is_a_send_failure() {
    let mut transport = MockTransport::responding(HELLO);
    transport.zero_write = true;
    let record = transport.record.clone();
    let mut req = client("https://example.com/", transport);

    assert_eq!(req.get(&Headers::new(), "").error(), ErrorKind::FailedSendRequest);
    assert_eq!(record.borrow().closes, 1);
}

#[test]
fn test_flush_failure_is_a_send_failure() {
    let transport = MockTransport::failing_at(Stage::Flush, Error::WriteError);
    let record = transport.record.clone();
    let mut req = client("https://example.com/", transport);

    assert_eq!(req.get(&Headers::new(), "x").error(), ErrorKind::FailedSendRequest);
    assert_eq!(record.borrow().closes, 1);
}

#[test]
fn test_partial_writes_are_completed() {
    let mut transport = MockTransport::responding(HELLO);
    transport.write_limit = 3;
    let record = transport.record.clone();
    let mut req = client("https://example.com/upload", transport);

    let body = "a body long enough to need many writes";
    assert!(req.post(&Headers::new(), body).success());
    assert!(record.borrow().written_text().ends_with(body));
}

#[test]
fn test_empty_stream_is_a_receive_failure() {
    let transport = MockTransport::new();
    let record = transport.record.clone();
    let mut req = client("https://example.com/", transport);

    let resp = req.get(&Headers::new(), "");

    assert_eq!(resp.error(), ErrorKind::FailedReceiveResponse);
    assert_eq!(record.borrow().closes, 1);
}

#[test]
fn test_read_error_before_data_is_a_receive_failure() {
    let mut transport = MockTransport::new();
    transport.reads.push(Err(Error::ReadError));
    let mut req = client("https://example.com/", transport);

    assert_eq!(req.get(&Headers::new(), "").error(), ErrorKind::FailedReceiveResponse);
}

#[test]
fn test_read_error_after_data_ends_the_stream() {
    let mut transport = MockTransport::new();
    transport.reads.push(Ok(HELLO.to_vec()));
    transport.reads.push(Err(Error::ReadError));
    let mut req = client("https://example.com/", transport);

    let resp = req.get(&Headers::new(), "");

    assert_eq!(resp.error(), ErrorKind::None);
    assert_eq!(resp.body(), b"hello");
}

#[test]
fn test_fragmented_chunked_response_is_reassembled() {
    let raw: &[u8] =
        b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n5\r\nhello\r\n6\r\n world\r\n0\r\n\r\n";
    let mut transport = MockTransport::new();
    for piece in raw.chunks(7) {
        transport.reads.push(Ok(piece.to_vec()));
    }
    transport.read_buffer_size = 4;
    let mut req = client("https://example.com/", transport);

    let resp = req.get(&Headers::new(), "");

    assert_eq!(resp.error(), ErrorKind::None);
    assert_eq!(resp.body_str(), Ok("hello world"));
}

#[test]
fn test_garbage_response_is_invalid() {
    let transport = MockTransport::responding(b"not http at all");
    let record = transport.record.clone();
    let mut req = client("https://example.com/", transport);

    let resp = req.get(&Headers::new(), "");

    assert_eq!(resp.error(), ErrorKind::InvalidResponse);
    assert_eq!(record.borrow().closes, 1);
}

#[test]
fn test_each_send_uses_a_new_connection() {
    let transport = MockTransport::responding(HELLO);
    let record = transport.record.clone();
    let mut req = client("https://example.com/", transport);

    assert!(req.get(&Headers::new(), "").success());
    assert!(req.get(&Headers::new(), "").success());

    let record = record.borrow();
    assert_eq!(record.resolved.len(), 1);
    assert_eq!(record.connects, 2);
    assert_eq!(record.closes, 2);
}

#[test]
fn test_not_found_response_is_not_success() {
    let transport = MockTransport::responding(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n");
    let mut req = client("https://example.com/missing", transport);

    let resp = req.get(&Headers::new(), "");

    assert_eq!(resp.error(), ErrorKind::None);
    assert_eq!(resp.status(), 404);
    assert!(!resp.success());
}

#[test]
fn test_url_accessor() {
    let req = client("https://example.com/a/b", MockTransport::new());
    assert_eq!(req.url().host(), "example.com");
    assert_eq!(req.url().path(), "/a/b");
    assert_eq!(req.transport().read_buffer_size, 1000);
}
