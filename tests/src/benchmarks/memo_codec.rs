//! # Memo Codec Benchmarks
//!
//! Where the time goes when encoding and decoding memos:
//! - Key agreement (ECDH + SHA-512) dominates short memos
//! - AES-256-CBC dominates long memos
//! - Envelope parsing and base58 are measured on their own to keep them honest
//! - Batch decode shows how a history scan scales across threads

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use memo_crypto::PrivateKey;
use memo_envelope::domain::{envelope, framing, transport};
use memo_envelope::{MemoCodecApi, MemoPublicKey, MemoService, Secp256k1MemoCipher};
use rand::Rng;
use std::time::Duration;

/// Random printable memo body of `len` characters, already marked.
fn generate_memo(len: usize) -> String {
    let mut rng = rand::thread_rng();
    let body: String = (0..len)
        .map(|_| char::from(rng.gen_range(b' '..=b'~')))
        .collect();
    format!("#{}", body)
}

fn keypair() -> (PrivateKey, PrivateKey) {
    (PrivateKey::generate(), PrivateKey::generate())
}

pub fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("memo/encode");
    group.measurement_time(Duration::from_secs(5));

    let svc = MemoService::new(Secp256k1MemoCipher);
    let (sender, recipient) = keypair();
    let to: MemoPublicKey = recipient.public_key().into();

    for size in [16usize, 256, 2048] {
        let memo = generate_memo(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &memo, |b, memo| {
            b.iter(|| black_box(svc.encode(Some(&sender), Some(&to), memo, None).unwrap()))
        });
    }

    group.bench_function("passthrough", |b| {
        b.iter(|| black_box(svc.encode(None, None, "public note", None).unwrap()))
    });

    group.finish();
}

pub fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("memo/decode");
    group.measurement_time(Duration::from_secs(5));

    let svc = MemoService::new(Secp256k1MemoCipher);
    let (sender, recipient) = keypair();
    let to: MemoPublicKey = recipient.public_key().into();

    for size in [16usize, 256, 2048] {
        let token = svc
            .encode(Some(&sender), Some(&to), &generate_memo(size), None)
            .unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("recipient", size), &token, |b, token| {
            b.iter(|| black_box(svc.decode(Some(&recipient), token).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("sender", size), &token, |b, token| {
            b.iter(|| black_box(svc.decode(Some(&sender), token).unwrap()))
        });
    }

    let token = svc
        .encode(Some(&sender), Some(&to), &generate_memo(64), None)
        .unwrap();
    let stranger = PrivateKey::generate();
    group.bench_function("wrong_key", |b| {
        b.iter(|| black_box(svc.decode(Some(&stranger), &token).is_err()))
    });

    group.finish();
}

pub fn bench_wire_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("memo/wire");

    let svc = MemoService::new(Secp256k1MemoCipher);
    let (sender, recipient) = keypair();
    let to: MemoPublicKey = recipient.public_key().into();
    let token = svc
        .encode(Some(&sender), Some(&to), &generate_memo(256), None)
        .unwrap();
    let bytes = transport::decode_token(&token).unwrap();
    let parsed = envelope::parse(&bytes).unwrap();

    group.bench_function("base58_decode", |b| {
        b.iter(|| black_box(transport::decode_token(&token).unwrap()))
    });
    group.bench_function("base58_encode", |b| {
        b.iter(|| black_box(transport::encode_token(&bytes)))
    });
    group.bench_function("envelope_parse", |b| {
        b.iter(|| black_box(envelope::parse(&bytes).unwrap()))
    });
    group.bench_function("envelope_serialize", |b| {
        b.iter(|| black_box(envelope::serialize(&parsed)))
    });

    let text = generate_memo(256);
    let framed = framing::frame(&text).unwrap();
    group.bench_function("frame", |b| {
        b.iter(|| black_box(framing::frame(&text).unwrap()))
    });
    group.bench_function("unframe", |b| {
        b.iter(|| black_box(framing::unframe(&framed).unwrap()))
    });

    group.finish();
}

pub fn bench_batch_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("memo/batch_decode");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    let svc = MemoService::new(Secp256k1MemoCipher);
    let (sender, recipient) = keypair();
    let to: MemoPublicKey = recipient.public_key().into();

    for size in [10usize, 100, 1000] {
        let history: Vec<String> = (0..size)
            .map(|_| {
                svc.encode(Some(&sender), Some(&to), &generate_memo(64), None)
                    .unwrap()
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("parallel", size), &history, |b, history| {
            b.iter(|| black_box(svc.decode_batch(Some(&recipient), history)))
        });
        group.bench_with_input(
            BenchmarkId::new("sequential", size),
            &history,
            |b, history| {
                b.iter(|| {
                    let results: Vec<_> = history
                        .iter()
                        .map(|memo| svc.decode(Some(&recipient), memo))
                        .collect();
                    black_box(results)
                })
            },
        );
    }

    group.finish();
}
