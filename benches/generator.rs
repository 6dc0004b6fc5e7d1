use criterion::{Criterion, criterion_group, criterion_main};
use passforge::models::GenerationRequest;
use passforge::services::{PasswordGenerator, RngSource, evaluate};
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut seeded = PasswordGenerator::with_source(RngSource::seeded(0));
    let mut os = PasswordGenerator::new();

    for length in [16usize, 64, 256] {
        let request = GenerationRequest::new(length);
        c.bench_function(&format!("generate_seeded_{}", length), |b| {
            b.iter(|| seeded.generate(black_box(&request)))
        });
        c.bench_function(&format!("generate_os_{}", length), |b| {
            b.iter(|| os.generate(black_box(&request)))
        });
    }
}

fn bench_evaluate(c: &mut Criterion) {
    c.bench_function("evaluate_18", |b| {
        b.iter(|| evaluate(black_box("Abcdefgh12345678!@")))
    });
}

criterion_group!(benches, bench_generate, bench_evaluate);
criterion_main!(benches);
