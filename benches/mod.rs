use criterion::{criterion_group, criterion_main};

mod http;

criterion_group!(
    benches,
    http::response::bench_parse_content_length,
    http::response::bench_parse_chunked,
    http::response::bench_serialize_request
);
criterion_main!(benches);
