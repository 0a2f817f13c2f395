use num_traits::{PrimInt, Unsigned};

/// Calculates the GCD for (u, v) ∈ (N, N) with the [Euclidean GCD] algorithm.
///
/// [Euclidean GCD]: https://en.wikipedia.org/wiki/Euclidean_algorithm
pub(crate) fn gcd<N: Unsigned + PrimInt>(mut u: N, mut v: N) -> N {
    let mut t;
    while !v.is_zero() {
        t = v;
        v = u % v;
        u = t;
    }
    u
}

/// The least common multiple computed as `u * v / gcd(u, v)`. Used to benchmark
/// [lowest_common_multiple][super::lowest_common_multiple] against.
#[cfg(feature = "benchmark-internals")]
pub fn _gcd_lowest_common_multiple<N: Unsigned + PrimInt>(u: N, v: N) -> N {
    u / gcd(u, v) * v
}
