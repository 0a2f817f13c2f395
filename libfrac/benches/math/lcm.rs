#[macro_use]
extern crate criterion;
extern crate libfrac;

use criterion::{black_box, Criterion};
use libfrac::{_gcd_lowest_common_multiple, lowest_common_multiple};

const INPUT: [(u64, u64); 3] = [(288, 227), (9_398, 2_884), (48_812, 28_482)];

fn bench_brute_force_lcm(c: &mut Criterion) {
    c.bench_function("lcm_brute_force", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                lowest_common_multiple(black_box(*u), black_box(*v));
            }
        })
    });
}

fn bench_gcd_lcm(c: &mut Criterion) {
    c.bench_function("lcm_gcd", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                _gcd_lowest_common_multiple(black_box(*u), black_box(*v));
            }
        })
    });
}

criterion_group!(lcm_benches, bench_brute_force_lcm, bench_gcd_lcm);
criterion_main!(lcm_benches);
