#![allow(clippy::suspicious_arithmetic_impl)]
use crate::fraction::{Fraction, FractionError};
use crate::scalar::Scalar;
use std::ops;

impl Fraction {
    /// Scales the numerator: `(n * scalar)/d`.
    pub fn multiply_by_scalar(self, scalar: impl Into<Scalar>) -> Fraction {
        Fraction {
            numerator: self.numerator * scalar.into(),
            denominator: self.denominator,
        }
    }

    /// `(n1 * n2)/(d1 * d2)`.
    pub fn multiply_by_fraction(self, other: Fraction) -> Fraction {
        Fraction {
            numerator: self.numerator * other.numerator,
            denominator: self.denominator * other.denominator,
        }
    }

    pub fn checked_mul_scalar(self, scalar: impl Into<Scalar>) -> Result<Fraction, FractionError> {
        Ok(Fraction {
            numerator: self
                .numerator
                .checked_mul(scalar.into())
                .ok_or(FractionError::Overflow)?,
            denominator: self.denominator,
        })
    }

    pub fn checked_mul(self, other: Fraction) -> Result<Fraction, FractionError> {
        Ok(Fraction {
            numerator: self
                .numerator
                .checked_mul(other.numerator)
                .ok_or(FractionError::Overflow)?,
            denominator: self
                .denominator
                .checked_mul(other.denominator)
                .ok_or(FractionError::Overflow)?,
        })
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        self.multiply_by_fraction(rhs)
    }
}

// Scalars multiply the same way from either side.
macro_rules! scalar_mul_impl {
    ($($scalar:ty)*) => {$(
        impl ops::Mul<$scalar> for Fraction {
            type Output = Fraction;

            fn mul(self, rhs: $scalar) -> Fraction {
                self.multiply_by_scalar(rhs)
            }
        }

        impl ops::Mul<Fraction> for $scalar {
            type Output = Fraction;

            fn mul(self, rhs: Fraction) -> Fraction {
                rhs.multiply_by_scalar(self)
            }
        }
    )*};
}

scalar_mul_impl! { Scalar i64 f64 }
