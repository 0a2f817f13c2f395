#[macro_use]
extern crate criterion;
extern crate libfrac;

use criterion::{black_box, Criterion};
use libfrac::{Fraction, _compare};

const CASES: [&str; 5] = ["eq", "lte", "lt", "gte", "gt"];

macro_rules! bench_fraction_cmp {
    ($($name: ident: $den: expr)*)=> {
        $(
        fn $name(c: &mut Criterion) {
            for item in CASES.iter() {
                c.bench_function(&(concat!("Fraction_", $den, "_cmp_").to_string() + (*item)), |b| {
                    b.iter(|| {
                        let u = Fraction::new(black_box(7), $den);
                        let v = Fraction::new(black_box(5), $den - 1);
                        _compare(u, v, item);
                   })
                });
            }
        }
    )*
    }
}

bench_fraction_cmp! {
    den_16: 16
    den_256: 256
    den_4096: 4096
}

criterion_group!(fraction_cmp_benches, den_16, den_256, den_4096);
criterion_main!(fraction_cmp_benches);
