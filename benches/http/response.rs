use criterion::{Criterion, Throughput};
use libhttp::http::request::serialize;
use libhttp::http::{Headers, Method, Response};
use std::hint::black_box;

fn content_length_response(body_len: usize) -> Vec<u8> {
    let mut raw = format!(
        "HTTP/1.1 200 OK\r\nServer: bench\r\nContent-Type: application/octet-stream\r\nContent-Length: {body_len}\r\n\r\n"
    )
    .into_bytes();
    raw.resize(raw.len() + body_len, b'x');
    raw
}

fn chunked_response(chunks: usize, chunk_len: usize) -> Vec<u8> {
    let mut raw = b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n".to_vec();
    for _ in 0..chunks {
        raw.extend_from_slice(format!("{chunk_len:x}\r\n").as_bytes());
        raw.resize(raw.len() + chunk_len, b'y');
        raw.extend_from_slice(b"\r\n");
    }
    raw.extend_from_slice(b"0\r\n\r\n");
    raw
}

pub fn bench_parse_content_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_content_length");
    for body_len in [0usize, 1024, 64 * 1024] {
        let raw = content_length_response(body_len);
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_function(format!("{body_len}B"), |b| {
            b.iter(|| Response::parse(black_box(&raw)))
        });
    }
    group.finish();
}

pub fn bench_parse_chunked(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_chunked");
    for (chunks, chunk_len) in [(16usize, 64usize), (64, 1024), (1024, 64)] {
        let raw = chunked_response(chunks, chunk_len);
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_function(format!("{chunks}x{chunk_len}B"), |b| {
            b.iter(|| Response::parse(black_box(&raw)))
        });
    }
    group.finish();
}

pub fn bench_serialize_request(c: &mut Criterion) {
    let mut headers = Headers::new();
    headers.insert("User-Agent".to_string(), "bench".to_string());
    headers.insert("Accept".to_string(), "*/*".to_string());
    let body = vec![b'z'; 512];

    c.bench_function("serialize_post", |b| {
        b.iter(|| {
            serialize(
                Method::Post,
                black_box("/post"),
                "httpbin.org",
                black_box(&headers),
                black_box(&body),
            )
        })
    });
}
