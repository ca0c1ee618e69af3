use cobs_core::{decode, encode, encoder::encode_to_bytes, max_decoded_length, max_encoded_length};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Random payload where roughly one byte in `zero_every` is a marker
fn payload(size: usize, zero_every: u32) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(0xC0B5);
    (0..size)
        .map(|_| {
            if rng.gen_ratio(1, zero_every) {
                0
            } else {
                rng.gen_range(1..=255)
            }
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [256, 1024, 4096, 16384] {
        let data = payload(size, 64);
        let mut dst = vec![0u8; max_encoded_length(size)];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode(black_box(data), &mut dst).unwrap());
        });
    }

    group.finish();
}

fn bench_encode_no_markers(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_no_markers");

    for size in [256, 1024, 4096, 16384] {
        let data = vec![0x42u8; size];
        let mut dst = vec![0u8; max_encoded_length(size)];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode(black_box(data), &mut dst).unwrap());
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [256, 1024, 4096, 16384] {
        let encoded = encode_to_bytes(&payload(size, 64)).unwrap();
        let mut dst = vec![0u8; max_decoded_length(encoded.len())];

        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, data| {
            b.iter(|| decode(black_box(data), &mut dst).unwrap());
        });
    }

    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");

    for size in [256, 1024, 4096] {
        let data = payload(size, 16);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let encoded = encode_to_bytes(data).unwrap();
                let decoded = cobs_core::decode_to_bytes(&encoded).unwrap();
                black_box(decoded);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_encode_no_markers,
    bench_decode,
    bench_round_trip
);
criterion_main!(benches);
