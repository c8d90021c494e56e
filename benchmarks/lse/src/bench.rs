//! Log-sum-exp benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of the sequence form (10 to 100K values)
//! - The insertion-sort / quicksort switch-over
//! - Pre-sorted and adversarial inputs for the last-element pivot
//! - The pair form as a left fold versus the sequence form
//!
//! Run with `cargo bench -p lse-benchmarks`.

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lse::internals::primitives::sorting::INSERTION_SORT_MAX_SPAN;
use lse::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate log-likelihood-like values (Gaussian around -50).
fn generate_log_weights(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(-50.0, 20.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Generate uniformly spread values with a share of `-inf` (log-space zeros).
fn generate_sparse_log_weights(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(-10.0, 10.0).unwrap();
    (0..size)
        .map(|_| {
            if rng.random_bool(0.3) {
                f64::NEG_INFINITY
            } else {
                dist.sample(&mut rng)
            }
        })
        .collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(50);

    for size in [10, 100, 1_000, 10_000, 100_000] {
        let data = generate_log_weights(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("logsumexp", size), &data, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |values| logsumexp(black_box(values)).unwrap(),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("sort", size), &data, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |values| sort(black_box(values)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("threshold");

    let span = INSERTION_SORT_MAX_SPAN;
    for size in [span - 4, span, span + 1, span + 2, span + 8, 4 * span] {
        let data = generate_log_weights(size, 7);

        group.bench_with_input(BenchmarkId::new("sort", size), &data, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |values| sort(black_box(values)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20);

    let size = 5_000;
    let mut ascending = generate_log_weights(size, 3);
    ascending.sort_by(f64::total_cmp);
    let descending: Vec<f64> = ascending.iter().rev().copied().collect();
    let constant = vec![-1.0; size];
    let sparse = generate_sparse_log_weights(size, 5);

    for (name, data) in [
        ("ascending", &ascending),
        ("descending", &descending),
        ("constant", &constant),
        ("sparse_neg_inf", &sparse),
    ] {
        group.bench_with_input(BenchmarkId::new("logsumexp", name), data, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |values| logsumexp(black_box(values)).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }

    group.bench_function("logsumexp_sorted/ascending", |b| {
        b.iter(|| logsumexp_sorted(black_box(&ascending)).unwrap())
    });

    group.finish();
}

fn bench_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair");

    for size in [2, 16, 256] {
        let data = generate_log_weights(size, 11);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("pair_fold", size), &data, |b, data| {
            b.iter(|| {
                black_box(data)
                    .iter()
                    .fold(f64::NEG_INFINITY, |acc, &x| logsumexp_pair(acc, x))
            })
        });

        group.bench_with_input(BenchmarkId::new("sequence", size), &data, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |values| logsumexp(black_box(values)).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_threshold,
    bench_pathological,
    bench_pair,
);
criterion_main!(benches);
