//! Plain numbers that fractions are built from and scaled by.

use std::cmp::Ordering;
use std::ops;

/// An integer or floating-point number.
///
/// Arithmetic between two [Int](Scalar::Int)s stays integral. Anything involving a
/// [Float](Scalar::Float) is promoted to a float.
#[derive(Copy, Clone, Debug)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    /// Returns the scalar as a double, possibly losing precision.
    pub fn to_f64(self) -> f64 {
        match self {
            Scalar::Int(i) => i as f64,
            Scalar::Float(f) => f,
        }
    }

    pub fn is_int(self) -> bool {
        matches!(self, Scalar::Int(_))
    }

    pub(crate) fn checked_add(self, rhs: Scalar) -> Option<Scalar> {
        match (self, rhs) {
            (Scalar::Int(a), Scalar::Int(b)) => a.checked_add(b).map(Scalar::Int),
            (a, b) => Some(Scalar::Float(a.to_f64() + b.to_f64())),
        }
    }

    pub(crate) fn checked_mul(self, rhs: Scalar) -> Option<Scalar> {
        match (self, rhs) {
            (Scalar::Int(a), Scalar::Int(b)) => a.checked_mul(b).map(Scalar::Int),
            (a, b) => Some(Scalar::Float(a.to_f64() * b.to_f64())),
        }
    }

    pub(crate) fn checked_neg(self) -> Option<Scalar> {
        match self {
            Scalar::Int(a) => a.checked_neg().map(Scalar::Int),
            Scalar::Float(a) => Some(Scalar::Float(-a)),
        }
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Float(f)
    }
}

impl ops::Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        match (self, rhs) {
            (Scalar::Int(a), Scalar::Int(b)) => Scalar::Int(a + b),
            (a, b) => Scalar::Float(a.to_f64() + b.to_f64()),
        }
    }
}

impl ops::Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        match (self, rhs) {
            (Scalar::Int(a), Scalar::Int(b)) => Scalar::Int(a * b),
            (a, b) => Scalar::Float(a.to_f64() * b.to_f64()),
        }
    }
}

impl ops::Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        match self {
            Scalar::Int(a) => Scalar::Int(-a),
            Scalar::Float(a) => Scalar::Float(-a),
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Scalar) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Scalar) -> Option<Ordering> {
        match (*self, *other) {
            (Scalar::Int(a), Scalar::Int(b)) => Some(a.cmp(&b)),
            (Scalar::Float(a), Scalar::Float(b)) => a.partial_cmp(&b),
            (Scalar::Int(a), Scalar::Float(b)) => cmp_int_float(a, b),
            (Scalar::Float(a), Scalar::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

/// Compares an integer with a float exactly, without rounding the integer to a double.
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    // 2^63; every double in [-2^63, 2^63) has an integral part that fits in an i64.
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        None
    } else if float >= TWO_POW_63 {
        Some(Ordering::Less)
    } else if float < -TWO_POW_63 {
        Some(Ordering::Greater)
    } else {
        let floor = float.floor();
        match int.cmp(&(floor as i64)) {
            Ordering::Equal if floor != float => Some(Ordering::Less),
            Ordering::Less => Some(Ordering::Less),
            Ordering::Equal => Some(Ordering::Equal),
            Ordering::Greater => Some(Ordering::Greater),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn int_arithmetic_stays_int() {
        assert!(matches!(Scalar::Int(2) * Scalar::Int(3), Scalar::Int(6)));
        assert!(matches!(Scalar::Int(2) + Scalar::Int(3), Scalar::Int(5)));
        assert!(matches!(-Scalar::Int(2), Scalar::Int(-2)));
    }

    #[test]
    fn float_promotes() {
        assert!(matches!(Scalar::Int(2) * Scalar::Float(1.5), Scalar::Float(f) if f == 3.0));
        assert!(matches!(Scalar::Float(0.5) + Scalar::Int(1), Scalar::Float(f) if f == 1.5));
    }

    #[test]
    fn mixed_comparison() {
        assert_eq!(Scalar::Int(3), Scalar::Float(3.0));
        assert!(Scalar::Float(2.5) < Scalar::Int(3));
        assert!(Scalar::Int(3) > Scalar::Float(2.5));
        assert_ne!(Scalar::Float(f64::NAN), Scalar::Float(f64::NAN));
    }

    #[test]
    fn mixed_comparison_is_exact() {
        // 2^53 + 1 has no double representation and would round to 2^53.
        let int = Scalar::Int(9_007_199_254_740_993);
        let float = Scalar::Float(9_007_199_254_740_992.0);
        assert_ne!(int, float);
        assert!(int > float);
        assert!(float < int);
        assert_eq!(Scalar::Int(9_007_199_254_740_992), float);

        assert!(Scalar::Int(i64::MAX) < Scalar::Float(9_223_372_036_854_775_808.0));
        assert!(Scalar::Int(i64::MIN) == Scalar::Float(-9_223_372_036_854_775_808.0));
        assert!(Scalar::Int(i64::MIN) > Scalar::Float(f64::NEG_INFINITY));
        assert!(Scalar::Int(-3) < Scalar::Float(-2.5));
        assert!(Scalar::Int(-3) > Scalar::Float(-3.5));
        assert!(Scalar::Int(2) < Scalar::Float(2.5));
        assert_eq!(Scalar::Int(1).partial_cmp(&Scalar::Float(f64::NAN)), None);
    }

    #[test]
    fn checked() {
        assert!(Scalar::Int(i64::MAX).checked_mul(Scalar::Int(2)).is_none());
        assert!(Scalar::Int(i64::MAX).checked_add(Scalar::Int(1)).is_none());
        assert!(Scalar::Int(i64::MIN).checked_neg().is_none());
        assert!(Scalar::Float(f64::MAX).checked_mul(Scalar::Int(2)).is_some());
        assert!(matches!(
            Scalar::Int(-4).checked_mul(Scalar::Int(3)),
            Some(Scalar::Int(-12))
        ));
    }
}
