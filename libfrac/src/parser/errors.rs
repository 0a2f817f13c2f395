//! Diagnostic errors produced by the parser.

define_errors! {
    ParseErrors

    ///Every operation needs an operand on both sides, and a program needs at least one operand.
    ///An operand is a number like "2" or "1.5", a fraction like "1/2", or a negated operand like
    ///"-1/2".
    P0001: ExpectedOperand

    ///Fractions are written "numerator/denominator". The numerator may be a decimal number, but
    ///the denominator must be an integer, optionally negative:
    ///
    ///  1/2     ok
    ///  1.5/2   ok
    ///  1/-2    ok
    ///  1/2.5   error
    P0002: ExpectedIntegerDenominator

    ///A frac program is a single operand, or a single operation between two operands, like
    ///"1/2 + 1/4". Chained operations such as "1/2 + 1/4 + 1/8" are not supported.
    P0003: ExpectedEnd

    ///An operand may be prefixed with at most 256 "-" signs, like "--1/2". Longer runs are
    ///rejected before evaluation. An even number of negations can be dropped, and an odd number
    ///can be replaced by a single "-".
    P0004: TooManyNegations
}
