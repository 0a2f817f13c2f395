//! Diagnostic errors produced by the scanner.

define_errors! {
    ScanErrors

    ///A frac program may only contain numbers and the symbols
    ///
    ///  - "/", separating a numerator from its denominator,
    ///  - "+", "-", and "*" for arithmetic, and
    ///  - "==", "!=", ">", "<", ">=", and "<=" for comparisons.
    ///
    ///This error is fired on any other character, and on a "." with no digits around it.
    S0001: InvalidToken

    ///Numerators and denominators are 64-bit signed integers. This error is fired on an integer
    ///literal larger than 9223372036854775807.
    ///
    ///Decimal numerators are not subject to this limit, but lose precision as they grow.
    S0002: IntegerOutOfRange
}
