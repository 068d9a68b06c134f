use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use unicode_engine::utf::{utf16, utf8};
use unicode_engine_benches::{read_dir, TEXTS};

/// декодирование UTF-8 в кодпоинты: собственный декодер и стандартная библиотека
fn decode(c: &mut Criterion)
{
    let mut group = c.benchmark_group("utf8_decode");

    for (name, text) in read_dir(TEXTS) {
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("engine", &name), text.as_bytes(), |b, bytes| {
            b.iter(|| utf8::decode(black_box(bytes)))
        });

        group.bench_with_input(BenchmarkId::new("std", &name), text.as_str(), |b, text| {
            b.iter(|| black_box(text).chars().map(u32::from).collect::<Vec<u32>>())
        });
    }

    group.finish();
}

/// кодирование кодпоинтов в UTF-16
fn encode(c: &mut Criterion)
{
    let mut group = c.benchmark_group("utf16_encode");

    for (name, text) in read_dir(TEXTS) {
        let codes = utf8::decode(text.as_bytes());

        group.throughput(Throughput::Elements(codes.len() as u64));
        group.bench_with_input(BenchmarkId::new("engine", &name), codes.as_slice(), |b, codes| {
            b.iter(|| utf16::encode(black_box(codes)))
        });
    }

    group.finish();
}

criterion_group!(benches, decode, encode);
criterion_main!(benches);
