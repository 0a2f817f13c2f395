//! Integer algorithms backing [fraction][crate::fraction] comparisons.
//!
//! Only [lowest_common_multiple] is used by fractions. The Euclidean gcd is kept for tests and
//! benchmarks that cross-check it.

#[cfg(any(test, feature = "benchmark-internals"))]
mod gcd;
#[cfg(any(test, feature = "benchmark-internals"))]
pub(crate) use gcd::gcd;
#[cfg(feature = "benchmark-internals")]
pub use gcd::_gcd_lowest_common_multiple;

mod lcm;
pub use lcm::*;
