//! # Gate Benchmarks
//!
//! Measures gate application on the qubit state and matrix products.
//! All operations are O(1) (2x2 complex matrices).
//!
//! Run: `cargo bench --bench gate_bench`

use bloch_core::{BlochController, Gate, QubitState, SphericalAngles, VisualizerConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark applying each library gate to a generic state
fn bench_apply_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_gate");
    let start = QubitState::from_angles(SphericalAngles::new(1.1, 0.4));

    for gate in Gate::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(gate.symbol()), &gate, |b, gate| {
            b.iter(|| {
                let mut state = start;
                state.apply_gate(black_box(gate));
                black_box(state)
            })
        });
    }

    group.finish();
}

/// Benchmark matrix composition (H·X·H)
fn bench_matrix_mul(c: &mut Criterion) {
    let h = Gate::Hadamard.unitary();
    let x = Gate::PauliX.unitary();

    c.bench_function("matrix_hxh", |b| {
        b.iter(|| black_box(h.mul(&black_box(x)).mul(&h)))
    });

    c.bench_function("matrix_is_unitary", |b| {
        b.iter(|| black_box(black_box(h).is_unitary()))
    });
}

/// Benchmark a full controller dispatch (matrix + marker rotation + angles)
fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    group.bench_function("gate_h", |b| {
        let mut controller = BlochController::new(VisualizerConfig::default());
        b.iter(|| black_box(controller.apply_gate(Gate::Hadamard).is_ok()))
    });

    group.bench_function("parse_and_dispatch", |b| {
        let mut controller = BlochController::new(VisualizerConfig::default());
        b.iter(|| black_box(controller.dispatch_str(black_box("theta=45")).is_ok()))
    });

    group.bench_function("labels", |b| {
        let controller = BlochController::new(VisualizerConfig::default());
        b.iter(|| black_box(controller.labels()))
    });

    group.finish();
}

criterion_group!(benches, bench_apply_gate, bench_matrix_mul, bench_dispatch);
criterion_main!(benches);
