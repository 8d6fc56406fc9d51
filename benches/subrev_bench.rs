//! Criterion benchmarks for u-subrev.
//!
//! Fixed iteration budgets keep the annealing benches independent of the
//! wall clock.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_subrev::mask::{apply_mask, Mask};
use u_subrev::objective::{compute_lis, compute_lis_quadratic};
use u_subrev::oracle::brute_force_solve;
use u_subrev::sa::{IterationBudget, Neighborhood, SaConfig, SaRunner};
use u_subrev::Sequence;

fn scrambled(n: usize) -> Vec<u32> {
    (0..n).map(|i| (i * 37 % 51) as u32).collect()
}

fn bench_lis(c: &mut Criterion) {
    let mut group = c.benchmark_group("lis");

    for &n in &[10usize, 30, 50] {
        let values = scrambled(n);
        group.bench_with_input(BenchmarkId::new("value_indexed", n), &values, |b, v| {
            b.iter(|| compute_lis(black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("quadratic", n), &values, |b, v| {
            b.iter(|| compute_lis_quadratic(black_box(v)))
        });
    }
    group.finish();
}

fn bench_apply_mask(c: &mut Criterion) {
    let values = scrambled(50);
    let mask = Mask::from_bits(0x2AAA_AAAA_AAAA);
    c.bench_function("apply_mask_50", |b| {
        b.iter(|| apply_mask(black_box(&values), black_box(mask)))
    });
}

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa");
    group.sample_size(10);

    for neighborhood in [Neighborhood::Scaled, Neighborhood::SingleBit] {
        let seq = Sequence::new(scrambled(50)).unwrap();
        let config = SaConfig::default()
            .with_neighborhood(neighborhood)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("{neighborhood:?}"), 50),
            &(seq, config),
            |b, (s, c)| {
                b.iter(|| {
                    let result = SaRunner::run_with_clock(
                        black_box(s),
                        black_box(c),
                        IterationBudget::new(10_000),
                    );
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("oracle");
    group.sample_size(10);

    for &n in &[10usize, 14] {
        let seq = Sequence::new(scrambled(n)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &seq, |b, s| {
            b.iter(|| brute_force_solve(black_box(s)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lis, bench_apply_mask, bench_sa, bench_oracle);
criterion_main!(benches);
