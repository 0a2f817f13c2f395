use core::fmt;

/// Errors produced by the checked fraction operations.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum FractionError {
    /// A fraction with a zero denominator was constructed or compared.
    ZeroDenominator,
    /// An integer numerator, denominator, or common multiple does not fit in an `i64`.
    Overflow,
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionError::ZeroDenominator => write!(f, "fraction has a zero denominator"),
            FractionError::Overflow => write!(f, "fraction arithmetic overflowed a 64-bit integer"),
        }
    }
}

impl std::error::Error for FractionError {}

/// An error returned when parsing a [Fraction][super::Fraction] from a string.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum ParseFractionError {
    /// The string has no `/` separating numerator and denominator.
    MissingSlash,
    /// The numerator is not an integer or a decimal number.
    InvalidNumerator(String),
    /// The denominator is not an integer.
    InvalidDenominator(String),
}

impl fmt::Display for ParseFractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFractionError::MissingSlash => {
                write!(f, "expected a fraction of the form \"numerator/denominator\"")
            }
            ParseFractionError::InvalidNumerator(num) => {
                write!(f, "\"{}\" is not a valid numerator", num)
            }
            ParseFractionError::InvalidDenominator(den) => {
                write!(f, "\"{}\" is not a valid integer denominator", den)
            }
        }
    }
}

impl std::error::Error for ParseFractionError {}
