use std::collections::LinkedList;
use std::hint::black_box;
use std::io::Write;

use bytes::{Bytes, BytesMut};
use criterion::{criterion_group, criterion_main, Criterion};
use micro_message::body::{BytesBody, FileBody, ListBody, StringBody, VectorBody};
use micro_message::codec::{write, MessageEncoder};
use micro_message::protocol::{Request, Response};
use tokio_util::codec::Encoder;

fn bench_string_body(c: &mut Criterion) {
    let mut request: Request<StringBody> = Request::new("Hello World!".repeat(64));
    request.set_method("POST");
    request.set_target("/");

    c.bench_function("write_string_body", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(1024);
            write(&mut out, black_box(&request)).unwrap();
            black_box(out);
        });
    });
}

fn bench_sequence_bodies(c: &mut Criterion) {
    let vector: Response<VectorBody<u8>> = Response::new(vec![b'x'; 16 * 1024]);
    let list: Response<ListBody<u32>> = Response::new((0..1024).collect::<LinkedList<_>>());

    c.bench_function("write_vector_body", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(16 * 1024);
            write(&mut out, black_box(&vector)).unwrap();
            black_box(out);
        });
    });

    c.bench_function("write_list_body", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            write(&mut out, black_box(&list)).unwrap();
            black_box(out);
        });
    });
}

fn bench_file_body(c: &mut Criterion) {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&vec![b'f'; 64 * 1024]).unwrap();
    let response: Response<FileBody> = Response::new(file.path().to_path_buf());

    c.bench_function("write_file_body", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(64 * 1024);
            write(&mut out, black_box(&response)).unwrap();
            black_box(out);
        });
    });
}

fn bench_message_encoder(c: &mut Criterion) {
    let response: Response<BytesBody> = Response::new(Bytes::from_static(b"Hello World!"));

    c.bench_function("encode_bytes_body", |b| {
        b.iter(|| {
            let mut encoder = MessageEncoder::new();
            let mut bytes = BytesMut::new();
            encoder.encode(black_box(&response), &mut bytes).unwrap();
            black_box(bytes);
        });
    });
}

criterion_group!(benches, bench_string_body, bench_sequence_bodies, bench_file_body, bench_message_encoder);
criterion_main!(benches);
