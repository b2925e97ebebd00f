//! Benchmark for the Funf calling convention.
//!
//! Compares wrapped calls against calling the native callable directly, and
//! measures the cost of capture, overflow and composition.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use funfist::{Funf, Value, funf};
use std::hint::black_box;

fn sum(arguments: &[Value]) -> funfist::Result<Value> {
    let mut total = 0;
    for argument in arguments {
        total += argument.as_int()?;
    }
    Ok(Value::Int(total))
}

fn arguments(count: i64) -> Vec<Value> {
    (0..count).map(Value::Int).collect()
}

// =============================================================================
// Exact Call Benchmark
// =============================================================================

fn benchmark_exact_call(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("exact_call");

    for arity in [0_usize, 2, 4, 8, 16] {
        let function = Funf::native(arity, sum);
        let supplied = arguments(i64::try_from(arity).unwrap_or(0));

        group.bench_with_input(BenchmarkId::new("direct", arity), &arity, |bencher, _| {
            bencher.iter(|| black_box(sum(black_box(&supplied))));
        });

        group.bench_with_input(BenchmarkId::new("Funf", arity), &arity, |bencher, _| {
            bencher.iter(|| black_box(function.call(black_box(&supplied))));
        });
    }

    group.finish();
}

// =============================================================================
// Partial Application Benchmark
// =============================================================================

fn benchmark_partial(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partial");
    let function = Funf::native(4, sum);
    let supplied = arguments(4);

    group.bench_function("capture", |bencher| {
        bencher.iter(|| black_box(function.capture(black_box(&supplied[..2]))));
    });

    group.bench_function("one_at_a_time", |bencher| {
        bencher.iter(|| {
            let mut current = Value::from(function.clone());
            for argument in &supplied {
                current = match &current {
                    Value::Fun(partial) => partial.call(std::slice::from_ref(argument)),
                    other => Ok(other.clone()),
                }
                .unwrap_or_default();
            }
            black_box(current)
        });
    });

    group.bench_function("overflow", |bencher| {
        let add = funf!(|left, right| left.as_int()? + right.as_int()?);
        bencher.iter(|| black_box(add.call(black_box(&supplied))));
    });

    group.finish();
}

// =============================================================================
// Composition Benchmark
// =============================================================================

fn benchmark_compose(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("compose");
    let increment = funf!(|value| value.as_int()? + 1);

    for depth in [1_usize, 4, 16] {
        let mut chained = increment.clone();
        for _ in 0..depth {
            chained = increment.compose(&chained);
        }
        let supplied: Vec<Value> = (0..=depth).map(|_| Value::Int(0)).collect();

        group.bench_with_input(BenchmarkId::new("chain", depth), &depth, |bencher, _| {
            bencher.iter(|| black_box(chained.call(black_box(&supplied))));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_exact_call, benchmark_partial, benchmark_compose);

criterion_main!(benches);
