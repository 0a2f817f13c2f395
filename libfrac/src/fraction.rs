//! An unreduced fraction value type.
//!
//! A [Fraction] is never normalized: `2/4` stays `2/4`, and is still equal to `1/2`.
//! Comparisons scale both numerators onto a common denominator found with
//! [lowest_common_multiple][crate::math::lowest_common_multiple].
//!
//! Every operator is also available in a `checked_*` form that returns a [FractionError] instead
//! of panicking on zero denominators or integer overflow.

mod add;
mod compare;
mod errors;
mod mul;
mod negate;
mod parse;
mod sub;

pub use errors::{FractionError, ParseFractionError};

#[cfg(feature = "benchmark-internals")]
pub use compare::_compare;

use crate::scalar::Scalar;

/// A `numerator/denominator` pair.
///
/// The numerator is an integer unless the fraction was scaled by a floating-point
/// [Scalar]. The denominator is always an integer and is assumed, but not checked, to be
/// non-zero; see [Fraction::try_new] for a validating constructor.
#[derive(Copy, Clone, Debug)]
pub struct Fraction {
    numerator: Scalar,
    denominator: i64,
}

impl Fraction {
    pub fn new(numerator: impl Into<Scalar>, denominator: i64) -> Fraction {
        Fraction {
            numerator: numerator.into(),
            denominator,
        }
    }

    /// Like [Fraction::new], but fails on a zero denominator.
    pub fn try_new(numerator: impl Into<Scalar>, denominator: i64) -> Result<Fraction, FractionError> {
        if denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Fraction::new(numerator, denominator))
    }

    pub fn numerator(&self) -> Scalar {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }
}
