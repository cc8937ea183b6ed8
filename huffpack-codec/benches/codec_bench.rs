use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use huffpack_codec::{decode, encode};
use std::hint::black_box;

#[cfg(feature = "parallel")]
use huffpack_codec::{decode_parallel, encode_parallel};

fn text_like(size: usize) -> Vec<u8> {
    let phrase = b"the quick brown fox jumps over the lazy dog 0123456789 ";
    (0..size).map(|i| phrase[i % phrase.len()]).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffpack_encode");

    for size in [10_000, 100_000, 1_000_000, 10_000_000] {
        let data = text_like(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("serial", size), &data, |b, data| {
            b.iter(|| {
                let container = encode(data).expect("encode failed");
                black_box(container);
            });
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", size), &data, |b, data| {
            b.iter(|| {
                let container = encode_parallel(data).expect("encode failed");
                black_box(container);
            });
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffpack_decode");

    for size in [10_000, 100_000, 1_000_000, 10_000_000] {
        let data = text_like(size);
        let container = encode(&data).expect("encode failed");
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::new("serial", size),
            &container,
            |b, container| {
                b.iter(|| {
                    let restored = decode(container).expect("decode failed");
                    black_box(restored);
                });
            },
        );

        #[cfg(feature = "parallel")]
        group.bench_with_input(
            BenchmarkId::new("parallel", size),
            &container,
            |b, container| {
                b.iter(|| {
                    let restored = decode_parallel(container).expect("decode failed");
                    black_box(restored);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
