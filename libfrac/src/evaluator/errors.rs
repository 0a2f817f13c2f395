//! Diagnostic errors produced during evaluation.

define_errors! {
    EvaluationErrors

    ///Fractions support addition, subtraction, and comparison with other fractions, and
    ///multiplication with fractions or plain numbers on either side. Plain numbers cannot be
    ///added to, subtracted from, or compared with anything, and two plain numbers cannot be
    ///multiplied.
    ///
    ///To use a number where a fraction is expected, write it over 1: "1/2 + 2/1".
    E0001: UnsupportedOperands

    ///Comparing fractions scales both numerators onto a common multiple of the denominators,
    ///which is impossible when a denominator is zero.
    ///
    ///Fractions with a zero denominator can still be written, added, and multiplied; the result
    ///will also have a zero denominator.
    E0002: ZeroDenominator

    ///Numerators and denominators are 64-bit signed integers, and fractions are never reduced.
    ///This error is fired when an operation produces an integer that does not fit.
    E0003: Overflow
}
