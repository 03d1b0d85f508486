use std::io;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn bench_write_words_sink(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("write_words_sink_1m", |b| {
        b.iter(|| {
            let _ = mkwords_lib::generate::write_words(&mut io::sink(), 1 << 20, &mut rng);
        })
    });
}

fn bench_generate_file(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bench.bin");
    let mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("generate_file_64k", |b| {
        b.iter(|| {
            let _ = mkwords_lib::generate::generate_file(&path, 1 << 16, &mut rng);
        })
    });
}

criterion_group!(benches, bench_write_words_sink, bench_generate_file);
criterion_main!(benches);
