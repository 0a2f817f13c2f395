#![allow(clippy::suspicious_arithmetic_impl)]
use crate::fraction::{Fraction, FractionError};
use crate::scalar::Scalar;
use std::ops;

impl ops::Add for Fraction {
    type Output = Fraction;

    /// Cross-multiplies onto the product of both denominators. The result is not reduced.
    fn add(self, rhs: Fraction) -> Fraction {
        Fraction {
            numerator: self.numerator * Scalar::Int(rhs.denominator)
                + rhs.numerator * Scalar::Int(self.denominator),
            denominator: self.denominator * rhs.denominator,
        }
    }
}

impl Fraction {
    /// `self + rhs`, or [Overflow](FractionError::Overflow) if an integer part does not fit.
    pub fn checked_add(self, rhs: Fraction) -> Result<Fraction, FractionError> {
        let lhs_num = self
            .numerator
            .checked_mul(Scalar::Int(rhs.denominator))
            .ok_or(FractionError::Overflow)?;
        let rhs_num = rhs
            .numerator
            .checked_mul(Scalar::Int(self.denominator))
            .ok_or(FractionError::Overflow)?;

        Ok(Fraction {
            numerator: lhs_num
                .checked_add(rhs_num)
                .ok_or(FractionError::Overflow)?,
            denominator: self
                .denominator
                .checked_mul(rhs.denominator)
                .ok_or(FractionError::Overflow)?,
        })
    }
}
