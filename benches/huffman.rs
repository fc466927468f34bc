use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use huffcode::Huffman;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Printable ASCII text with a skewed symbol distribution.
fn generate_text(len: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len)
        .map(|_| {
            let skew: f64 = rng.gen();
            (b' ' + (skew * skew * 95.0) as u8) as char
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for size in [1_000, 10_000, 100_000] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| Huffman::build(black_box(text)))
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for size in [1_000, 10_000, 100_000] {
        let text = generate_text(size);
        let huffman = Huffman::build(&text);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("string", size), &text, |b, text| {
            b.iter(|| huffman.encode(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("bits", size), &text, |b, text| {
            b.iter(|| huffman.encode_bits(black_box(text)))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for size in [1_000, 10_000, 100_000] {
        let text = generate_text(size);
        let huffman = Huffman::build(&text);
        let encoded = huffman.encode(&text);
        let packed = huffman.encode_bits(&text).unwrap_or_default();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("string", size), &encoded, |b, encoded| {
            b.iter(|| huffman.decode(black_box(encoded)))
        });
        group.bench_with_input(BenchmarkId::new("bits", size), &packed, |b, packed| {
            b.iter(|| huffman.decode_bits(black_box(packed)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_encode, bench_decode);
criterion_main!(benches);
