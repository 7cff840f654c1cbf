use criterion::{Criterion, black_box, criterion_group, criterion_main};
use veil::signatures::{JPEG_SIGNATURE, PNG_SIGNATURE};
use veil::{analyze, find_signature};

fn container(len: usize) -> Vec<u8> {
    let mut data: Vec<u8> = (0..len).map(|i| (i % 0x40) as u8).collect();
    data[..8].copy_from_slice(&PNG_SIGNATURE);
    let mid = len / 2;
    data[mid..mid + 3].copy_from_slice(&JPEG_SIGNATURE);
    data
}

fn bench_scan(c: &mut Criterion) {
    let data = container(8 * 1024 * 1024);

    c.bench_function("find_signature_8mb", |b| {
        b.iter(|| find_signature(black_box(&data), 1))
    });

    c.bench_function("analyze_8mb", |b| b.iter(|| analyze(black_box(&data))));
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
