//! # Animation Benchmarks
//!
//! Measures the cost of generating rotation frames (Rodrigues + angles + rings).
//!
//! Run: `cargo bench --bench animation_bench`

use bloch_core::animation::rotate;
use bloch_core::{CartesianPoint, Gate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_rotate(c: &mut Criterion) {
    let axis = CartesianPoint::new(1.0, 0.0, 1.0).normalized();
    let point = CartesianPoint::new(0.0, 0.0, 100.0);

    c.bench_function("rotate_single", |b| {
        b.iter(|| black_box(rotate(black_box(&point), &axis, black_box(0.5))))
    });
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation_frames");
    let rotation = Gate::Hadamard.rotation();
    let start = CartesianPoint::new(0.0, 0.0, 100.0);

    for steps in [16usize, 128, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| {
                rotation
                    .map(|r| r.frames(start, steps, 100.0).last())
                    .map(black_box)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rotate, bench_frames);
criterion_main!(benches);
