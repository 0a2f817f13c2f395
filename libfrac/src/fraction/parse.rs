use crate::fraction::{Fraction, ParseFractionError};
use crate::scalar::Scalar;
use std::str::FromStr;

impl FromStr for Scalar {
    type Err = ParseFractionError;

    fn from_str(s: &str) -> Result<Scalar, ParseFractionError> {
        let s = s.trim();
        if let Ok(int) = s.parse::<i64>() {
            return Ok(Scalar::Int(int));
        }
        match s.parse::<f64>() {
            Ok(float) if float.is_finite() => Ok(Scalar::Float(float)),
            _ => Err(ParseFractionError::InvalidNumerator(s.to_owned())),
        }
    }
}

/// Parses `numerator/denominator`, for example `1/2`, `-3/4`, `1.5 / 2`, or `1/-2`.
impl FromStr for Fraction {
    type Err = ParseFractionError;

    fn from_str(s: &str) -> Result<Fraction, ParseFractionError> {
        let mut parts = s.splitn(2, '/');
        let (num, den) = match (parts.next(), parts.next()) {
            (Some(num), Some(den)) => (num, den.trim()),
            _ => return Err(ParseFractionError::MissingSlash),
        };

        let numerator: Scalar = num.parse()?;
        let denominator = den
            .parse::<i64>()
            .map_err(|_| ParseFractionError::InvalidDenominator(den.to_owned()))?;

        Ok(Fraction::new(numerator, denominator))
    }
}
