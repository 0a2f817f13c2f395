use crate::fraction::{Fraction, FractionError};
use crate::math::{checked_lowest_common_multiple, lowest_common_multiple};
use crate::scalar::Scalar;
use std::cmp::Ordering;

impl Fraction {
    /// Scales both numerators onto the least common multiple of the two denominators.
    ///
    /// Panics on a zero denominator, like integer division does.
    fn scaled_numerators(&self, other: &Fraction) -> (Scalar, Scalar) {
        let lcm = lowest_common_multiple(self.denominator, other.denominator);
        let multiplier_a = lcm / self.denominator;
        let multiplier_b = lcm / other.denominator;

        (
            self.numerator * Scalar::Int(multiplier_a),
            other.numerator * Scalar::Int(multiplier_b),
        )
    }

    fn checked_scaled_numerators(&self, other: &Fraction) -> Result<(Scalar, Scalar), FractionError> {
        if self.denominator == 0 || other.denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        let lcm = checked_lowest_common_multiple(self.denominator, other.denominator)
            .ok_or(FractionError::Overflow)?;
        let multiplier_a = lcm
            .checked_div(self.denominator)
            .ok_or(FractionError::Overflow)?;
        let multiplier_b = lcm
            .checked_div(other.denominator)
            .ok_or(FractionError::Overflow)?;

        Ok((
            self.numerator
                .checked_mul(Scalar::Int(multiplier_a))
                .ok_or(FractionError::Overflow)?,
            other
                .numerator
                .checked_mul(Scalar::Int(multiplier_b))
                .ok_or(FractionError::Overflow)?,
        ))
    }

    /// Whether both fractions have the same value, regardless of representation.
    pub fn equals(&self, other: &Fraction) -> bool {
        let (a, b) = self.scaled_numerators(other);
        a == b
    }

    pub fn not_equals(&self, other: &Fraction) -> bool {
        !self.equals(other)
    }

    pub fn greater_than(&self, other: &Fraction) -> bool {
        let (a, b) = self.scaled_numerators(other);
        a > b
    }

    /// Strictly less: neither [greater](Fraction::greater_than) nor [equal](Fraction::equals).
    pub fn less_than(&self, other: &Fraction) -> bool {
        !self.greater_than(other) && !self.equals(other)
    }

    pub fn greater_or_equal(&self, other: &Fraction) -> bool {
        self.greater_than(other) || self.equals(other)
    }

    pub fn less_or_equal(&self, other: &Fraction) -> bool {
        self.less_than(other) || self.equals(other)
    }

    pub fn checked_eq(&self, other: &Fraction) -> Result<bool, FractionError> {
        let (a, b) = self.checked_scaled_numerators(other)?;
        Ok(a == b)
    }

    pub fn checked_ne(&self, other: &Fraction) -> Result<bool, FractionError> {
        Ok(!self.checked_eq(other)?)
    }

    pub fn checked_gt(&self, other: &Fraction) -> Result<bool, FractionError> {
        let (a, b) = self.checked_scaled_numerators(other)?;
        Ok(a > b)
    }

    pub fn checked_lt(&self, other: &Fraction) -> Result<bool, FractionError> {
        Ok(!self.checked_gt(other)? && !self.checked_eq(other)?)
    }

    pub fn checked_ge(&self, other: &Fraction) -> Result<bool, FractionError> {
        Ok(self.checked_gt(other)? || self.checked_eq(other)?)
    }

    pub fn checked_le(&self, other: &Fraction) -> Result<bool, FractionError> {
        Ok(self.checked_lt(other)? || self.checked_eq(other)?)
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Fraction) -> bool {
        self.equals(other)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        if self.greater_than(other) {
            Some(Ordering::Greater)
        } else if self.equals(other) {
            Some(Ordering::Equal)
        } else {
            Some(Ordering::Less)
        }
    }

    fn lt(&self, other: &Fraction) -> bool {
        self.less_than(other)
    }

    fn le(&self, other: &Fraction) -> bool {
        self.less_or_equal(other)
    }

    fn gt(&self, other: &Fraction) -> bool {
        self.greater_than(other)
    }

    fn ge(&self, other: &Fraction) -> bool {
        self.greater_or_equal(other)
    }
}

#[cfg(feature = "benchmark-internals")]
pub fn _compare(u: Fraction, v: Fraction, s: &str) -> bool {
    match s {
        "eq" => u == v,
        "lte" => u <= v,
        "lt" => u < v,
        "gte" => u >= v,
        "gt" => u > v,
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    macro_rules! fraction_test_cmp {
        ($($name: ident: $stmt:expr)*) => {
        $(
            #[test]
            fn $name() {
                use crate::Fraction;
                let v: Vec<&str> = $stmt.split(' ').collect();
                let lhs: Fraction = v[0].parse().unwrap();
                let rhs: Fraction = v[2].parse().unwrap();
                match v[1] {
                    "=" => {
                        assert!(lhs == rhs);
                        assert!(lhs.checked_eq(&rhs).unwrap());
                    }
                    "!=" => {
                        assert!(lhs != rhs);
                        assert!(lhs.checked_ne(&rhs).unwrap());
                    }
                    "<=" => {
                        assert!(lhs <= rhs);
                        assert!(lhs.checked_le(&rhs).unwrap());
                    }
                    ">=" => {
                        assert!(lhs >= rhs);
                        assert!(lhs.checked_ge(&rhs).unwrap());
                    }
                    ">" => {
                        assert!(lhs > rhs);
                        assert!(lhs.checked_gt(&rhs).unwrap());
                    }
                    "<" => {
                        assert!(lhs < rhs);
                        assert!(lhs.checked_lt(&rhs).unwrap());
                    }
                    _ => panic!("Test input invalid"),
                }
            }
        )*
        }
    }

    mod cmp {
        fraction_test_cmp! {
            equal1: "1/2 = 1/2"
            equal2: "1/2 = 2/4"
            equal3: "3/9 = 1/3"
            equal4: "0/3 = 0/7"
            equal5: "1.5/2 = 3/4"
            equal6: "-1/2 = -2/4"
            equal7: "1/-2 = -1/2"
            not_equal1: "1/4 != 2/4"
            not_equal2: "1/3 != 1/2"
            not_equal3: "-1/2 != 1/2"
            less_than1: "1/4 < 2/4"
            less_than2: "1/3 < 1/2"
            less_than3: "-1/2 < 1/4"
            less_than4: "1.5/2 < 1/1"
            less_than_equal1: "1/4 <= 1/2"
            less_than_equal2: "1/2 <= 2/4"
            less_than_equal3: "-3/4 <= -1/2"
            greater_than1: "1/2 > 1/4"
            greater_than2: "2/3 > 3/5"
            greater_than3: "1/4 > -1/2"
            greater_than4: "7/7 > 1.5/2"
            greater_than_equal1: "2/4 >= 1/2"
            greater_than_equal2: "1/2 >= 1/4"
            greater_than_equal3: "5/5 >= 99/100"
        }
    }

    use crate::{Fraction, FractionError};
    use proptest::prelude::*;
    use std::cmp::Ordering;

    #[test]
    fn demo_comparisons() {
        let f1 = Fraction::new(1, 2);
        let f2 = Fraction::new(1, 4);
        let f3 = Fraction::new(2, 4);

        assert!(f1 == f3);
        assert!(f2 != f3);
        assert!(!(f1 > f3));
        assert!(!(f2 > f3));
        assert!(f1 > f2);
        assert!(!(f1 < f3));
        assert!(f2 < f3);
        assert!(!(f1 < f2));
        assert!(f1 >= f3);
        assert!(!(f2 >= f3));
        assert!(f1 >= f2);
        assert!(f1 <= f3);
        assert!(f2 <= f3);
        assert!(!(f1 <= f2));
    }

    #[test]
    fn partial_cmp_agrees_with_operators() {
        assert_eq!(Fraction::new(1, 2).partial_cmp(&Fraction::new(2, 4)), Some(Ordering::Equal));
        assert_eq!(Fraction::new(1, 2).partial_cmp(&Fraction::new(1, 4)), Some(Ordering::Greater));
        assert_eq!(Fraction::new(1, 4).partial_cmp(&Fraction::new(1, 2)), Some(Ordering::Less));
    }

    #[test]
    fn nan_numerator_is_less_by_exclusion() {
        let nan = Fraction::new(f64::NAN, 2);
        let half = Fraction::new(1, 2);
        assert!(!nan.equals(&half));
        assert!(!nan.greater_than(&half));
        assert!(nan.less_than(&half));
    }

    #[test]
    #[should_panic]
    fn zero_denominator_panics() {
        let _ = Fraction::new(1, 0) == Fraction::new(1, 2);
    }

    #[test]
    fn checked_zero_denominator() {
        let zero = Fraction::new(1, 0);
        let half = Fraction::new(1, 2);
        assert_eq!(zero.checked_eq(&half).unwrap_err(), FractionError::ZeroDenominator);
        assert_eq!(half.checked_lt(&zero).unwrap_err(), FractionError::ZeroDenominator);
    }

    #[test]
    fn checked_overflow() {
        // i64::MAX is odd, so the common multiple falls back to i64::MAX * 2.
        let a = Fraction::new(1, i64::MAX);
        let b = Fraction::new(1, 2);
        assert_eq!(a.checked_gt(&b).unwrap_err(), FractionError::Overflow);
    }

    fn fraction() -> impl Strategy<Value = Fraction> {
        (-1_000i64..1_000, 1i64..200, any::<bool>())
            .prop_map(|(num, den, neg)| Fraction::new(num, if neg { -den } else { den }))
    }

    proptest! {
        #[test]
        fn trichotomy(a in fraction(), b in fraction()) {
            let holds = [a == b, a > b, a < b];
            prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);
        }

        #[test]
        fn checked_agrees_with_operators(a in fraction(), b in fraction()) {
            prop_assert_eq!(a.checked_eq(&b), Ok(a == b));
            prop_assert_eq!(a.checked_gt(&b), Ok(a > b));
            prop_assert_eq!(a.checked_lt(&b), Ok(a < b));
            prop_assert_eq!(a.checked_ge(&b), Ok(a >= b));
            prop_assert_eq!(a.checked_le(&b), Ok(a <= b));
        }

        #[test]
        fn scaling_numerator_and_denominator_preserves_value(num in -1_000i64..1_000, den in 1i64..100, k in 1i64..20) {
            prop_assert_eq!(Fraction::new(num * k, den * k), Fraction::new(num, den));
        }
    }
}
