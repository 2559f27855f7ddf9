// ============================================================================
// WAD Math Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Multiply-Divide - mul_div_down / mul_div_up per kernel
// 2. Square Root - isqrt across input magnitudes per kernel
// 3. Oracle - one quick randomized check and one exhaustive grid
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wad_math::prelude::*;

// ============================================================================
// Multiply-Divide Benchmarks
// ============================================================================

fn benchmark_mul_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul_div");

    let x = U256::from(123_456_789u64) * WAD;
    let y = U256::from(987_654_321_987_654_321u64);

    for kernel in all_kernels() {
        group.bench_with_input(
            BenchmarkId::new("down", kernel.name()),
            &(x, y),
            |b, &(x, y)| b.iter(|| black_box(kernel.mul_div_down(black_box(x), black_box(y)))),
        );

        group.bench_with_input(
            BenchmarkId::new("up", kernel.name()),
            &(x, y),
            |b, &(x, y)| b.iter(|| black_box(kernel.mul_div_up(black_box(x), black_box(y)))),
        );
    }

    // Rejection path: the overflow check alone
    group.bench_function("overflow", |b| {
        b.iter(|| black_box(mul_div_down(black_box(U256::MAX), black_box(x))))
    });

    group.finish();
}

// ============================================================================
// Square Root Benchmarks
// ============================================================================

fn benchmark_isqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("isqrt");

    let inputs = [
        ("u64", U256::from(u64::MAX)),
        ("u128", U256::from(u128::MAX)),
        ("u256", U256::MAX),
    ];

    for kernel in all_kernels() {
        for (label, x) in inputs.iter() {
            group.bench_with_input(BenchmarkId::new(kernel.name(), label), x, |b, &x| {
                b.iter(|| black_box(kernel.isqrt(black_box(x))))
            });
        }
    }

    group.finish();
}

// ============================================================================
// Oracle Benchmarks
// ============================================================================

fn benchmark_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("oracle");
    group.sample_size(10);

    let oracle = EquivalenceOracle::new(OracleConfig::quick().with_seed([9; 32]))
        .expect("quick config is valid")
        .with_observer(std::sync::Arc::new(NoOpObserver));
    let reference = CheckedKernel::new();
    let candidate = WideKernel::new();

    group.bench_function("randomized_mul_div_up", |b| {
        b.iter(|| black_box(oracle.check_operation(Operation::MulDivUp, &reference, &candidate)))
    });

    let grid = Operation::MulDivUp.boundary_inputs();
    group.bench_function("exhaustive_boundary_grid", |b| {
        b.iter(|| {
            black_box(oracle.check_operation_exhaustive(
                Operation::MulDivUp,
                &reference,
                &candidate,
                &grid,
            ))
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_mul_div, benchmark_isqrt, benchmark_oracle);
criterion_main!(benches);
