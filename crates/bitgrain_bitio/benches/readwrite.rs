use std::hint::black_box;

use bitgrain_bitio::{BitReader, BitWriter};
use bitgrain_bytes::{MemoryByteSource, VecSink};
use criterion::{Criterion, criterion_group, criterion_main};
use criterion_cycles_per_byte::CyclesPerByte;

fn bench_read(c: &mut Criterion<CyclesPerByte>) {
    let mut group = c.benchmark_group("read");
    let source = MemoryByteSource::new(vec![0xFFu8; 1024]);

    group.bench_function("read 64 bits", |b| {
        b.iter(|| {
            let mut r = BitReader::new(source.clone()).unwrap();
            black_box(r.read::<u64>(64).unwrap());
        })
    });

    group.bench_function("read 32 bits", |b| {
        b.iter(|| {
            let mut r = BitReader::new(source.clone()).unwrap();
            black_box(r.read::<u32>(32).unwrap());
        })
    });

    group.bench_function("read 8 bits", |b| {
        b.iter(|| {
            let mut r = BitReader::new(source.clone()).unwrap();
            black_box(r.read::<u8>(8).unwrap());
        })
    });

    group.bench_function("read spanning refill", |b| {
        b.iter(|| {
            let mut r = BitReader::new(source.clone()).unwrap();
            black_box(r.read::<u64>(60).unwrap());
            black_box(r.read::<u8>(8).unwrap());
        })
    });

    group.finish();
}

fn bench_write(c: &mut Criterion<CyclesPerByte>) {
    let mut group = c.benchmark_group("write");

    group.bench_function("write 64 bits", |b| {
        b.iter(|| {
            let mut w = BitWriter::new(VecSink::new());
            w.write(black_box(0xDEADBEEFCAFEBABEu64), 64).unwrap();
        })
    });

    group.bench_function("write 8 bits", |b| {
        b.iter(|| {
            let mut w = BitWriter::new(VecSink::new());
            w.write(black_box(0xAAu8), 8).unwrap();
        })
    });

    group.bench_function("write spanning bytes", |b| {
        b.iter(|| {
            let mut w = BitWriter::new(VecSink::new());
            w.write(black_box(0xFFFFFFFFFFFFFFFu64), 60).unwrap();
            w.write(black_box(0xAAu8), 8).unwrap();
        })
    });

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().with_measurement(CyclesPerByte);
    targets = bench_read, bench_write
);
criterion_main!(benches);
