//! # Pi-Lab Benchmarks
//!
//! | Method | Parameter | Expectation |
//! |--------|-----------|-------------|
//! | Spigot | 100 / 1 000 / 5 000 digits | super-linear growth (BigInt sizes grow with digits) |
//! | BBP | 15 places | sub-microsecond |
//! | Monte Carlo | 10^6 samples | Rayon faster than serial on multi-core hosts |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use pi_digits::{bbp_pi, compute_pi_digits, create_engine, Backend};

fn bench_spigot(c: &mut Criterion) {
    let mut group = c.benchmark_group("spigot");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for digits in [100u32, 1_000, 5_000] {
        group.throughput(Throughput::Elements(u64::from(digits)));
        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |b, &d| {
            b.iter(|| compute_pi_digits(black_box(d)))
        });
    }

    group.finish();
}

fn bench_bbp(c: &mut Criterion) {
    c.bench_function("bbp/15", |b| b.iter(|| bbp_pi(black_box(15))));
}

fn bench_monte_carlo(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte-carlo");
    group.sample_size(10);
    let samples = 1_000_000u64;
    group.throughput(Throughput::Elements(samples));

    for backend in [Backend::Serial, Backend::Cpu] {
        let engine = match create_engine(backend, 10_000) {
            Ok(engine) => engine,
            Err(_) => continue,
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(backend),
            &samples,
            |b, &n| b.iter(|| engine.count_inside(black_box(n), 0)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_spigot, bench_bbp, bench_monte_carlo);
criterion_main!(benches);
