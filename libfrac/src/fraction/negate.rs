use crate::fraction::{Fraction, FractionError};
use std::ops;

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Fraction {
    /// `-self`, or [Overflow](FractionError::Overflow) for a numerator of `i64::MIN`.
    pub fn checked_neg(self) -> Result<Fraction, FractionError> {
        Ok(Fraction {
            numerator: self.numerator.checked_neg().ok_or(FractionError::Overflow)?,
            denominator: self.denominator,
        })
    }
}
