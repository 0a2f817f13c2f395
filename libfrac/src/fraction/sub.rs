use crate::fraction::{Fraction, FractionError};
use std::ops;

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + (-rhs)
    }
}

impl Fraction {
    pub fn checked_sub(self, rhs: Fraction) -> Result<Fraction, FractionError> {
        self.checked_add(rhs.checked_neg()?)
    }
}
