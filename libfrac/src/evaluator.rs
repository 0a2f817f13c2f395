//! Evaluates a parsed frac program.
//!
//! Evaluation uses the checked fraction operations, so a zero denominator or an overflow becomes a
//! [Diagnostic] instead of a panic.

pub mod errors;

use crate::common::Span;
use crate::diagnostics::{Diagnostic, DiagnosticRecord};
use crate::fraction::{Fraction, FractionError};
use crate::grammar::*;
use crate::scalar::Scalar;
use errors::*;

/// The result of evaluating a frac program.
#[derive(Copy, Clone, Debug)]
pub enum Value {
    Fraction(Fraction),
    Scalar(Scalar),
    /// The outcome of a comparison.
    Bool(bool),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Fraction(_) => "a fraction",
            Value::Scalar(_) => "a number",
            Value::Bool(_) => "a boolean",
        }
    }
}

pub fn evaluate(expr: &Expr) -> Result<Value, Diagnostic> {
    tracing::debug!(?expr, "evaluating");
    let value = eval_expr(expr)?;
    tracing::debug!(?value, "evaluated");
    Ok(value)
}

fn eval_expr(expr: &Expr) -> Result<Value, Diagnostic> {
    match expr {
        Expr::Fraction(frac, _) => Ok(Value::Fraction(*frac)),
        Expr::Scalar(scalar, _) => Ok(Value::Scalar(*scalar)),
        Expr::Negate(inner, span) => match eval_expr(inner)? {
            Value::Fraction(frac) => frac
                .checked_neg()
                .map(Value::Fraction)
                .map_err(|err| fraction_error(err, *span)),
            Value::Scalar(scalar) => scalar
                .checked_neg()
                .map(Value::Scalar)
                .ok_or_else(|| fraction_error(FractionError::Overflow, *span)),
            value => Err(unsupported_operand(value, *span)),
        },
        Expr::BinaryExpr(binary_expr) => eval_binary_expr(binary_expr),
    }
}

fn eval_binary_expr(binary_expr: &BinaryExpr) -> Result<Value, Diagnostic> {
    use BinaryOperator::*;
    let BinaryExpr {
        op,
        op_span,
        lhs,
        rhs,
    } = binary_expr;
    let span = lhs.span().to(rhs.span());
    let lhs_val = eval_expr(lhs)?;
    let rhs_val = eval_expr(rhs)?;

    let (a, b) = match (lhs_val, rhs_val) {
        (Value::Fraction(a), Value::Fraction(b)) => (a, b),
        (Value::Fraction(frac), Value::Scalar(scalar))
        | (Value::Scalar(scalar), Value::Fraction(frac))
            if *op == Mult =>
        {
            return frac
                .checked_mul_scalar(scalar)
                .map(Value::Fraction)
                .map_err(|err| fraction_error(err, span));
        }
        (lhs_val, rhs_val) => {
            return Err(unsupported_operands(
                *op, *op_span, lhs_val, lhs.span(), rhs_val, rhs.span(),
            ))
        }
    };

    let result = match op {
        Plus => a.checked_add(b).map(Value::Fraction),
        Minus => a.checked_sub(b).map(Value::Fraction),
        Mult => a.checked_mul(b).map(Value::Fraction),
        Equal => a.checked_eq(&b).map(Value::Bool),
        NotEqual => a.checked_ne(&b).map(Value::Bool),
        Greater => a.checked_gt(&b).map(Value::Bool),
        Less => a.checked_lt(&b).map(Value::Bool),
        GreaterEqual => a.checked_ge(&b).map(Value::Bool),
        LessEqual => a.checked_le(&b).map(Value::Bool),
    };

    result.map_err(|err| fraction_error(err, span))
}

fn fraction_error(err: FractionError, span: Span) -> Diagnostic {
    match err {
        FractionError::ZeroDenominator => Diagnostic::span_err(
            span,
            "Comparison with a zero denominator",
            ZeroDenominator::CODE,
            err.to_string(),
        )
        .with_note("fractions with a zero denominator can be added and multiplied, but not compared"),
        FractionError::Overflow => Diagnostic::span_err(
            span,
            "Arithmetic overflow",
            Overflow::CODE,
            err.to_string(),
        )
        .with_note("fractions are never reduced, so denominators grow with every operation"),
    }
}

fn unsupported_operand(value: Value, span: Span) -> Diagnostic {
    Diagnostic::span_err(
        span,
        "Unsupported operand",
        UnsupportedOperands::CODE,
        format!("cannot negate {}", value.kind()),
    )
}

fn unsupported_operands(
    op: BinaryOperator,
    op_span: Span,
    lhs: Value,
    lhs_span: Span,
    rhs: Value,
    rhs_span: Span,
) -> Diagnostic {
    let verb = match op {
        BinaryOperator::Plus => "add",
        BinaryOperator::Minus => "subtract",
        BinaryOperator::Mult => "multiply",
        _ => "compare",
    };
    let mut diag = Diagnostic::span_err(
        op_span,
        "Unsupported operands",
        UnsupportedOperands::CODE,
        format!("cannot {} {} and {}", verb, lhs.kind(), rhs.kind()),
    );
    for (value, span) in [(lhs, lhs_span), (rhs, rhs_span)].iter() {
        if let Value::Scalar(scalar) = value {
            diag = diag.with_spanned_help(
                *span,
                format!("write this number as a fraction, like \"{}/1\"", scalar),
            );
        }
    }
    if op == BinaryOperator::Mult {
        diag = diag.with_note("at least one side of \"*\" must be a fraction");
    } else {
        diag = diag.with_note(format!(
            "{} is only defined between two fractions",
            if op.is_comparison() { "comparison" } else { "this operation" }
        ));
    }
    diag
}

#[cfg(test)]
mod tests {
    // Evaluates programs and checks the pretty emit of the result.
    macro_rules! evaluator_tests {
        ($($name:ident: $program:expr, $result:expr)*) => {
        $(
            #[test]
            fn $name() {
                use crate::{evaluate, parse, scan};

                let (expr, diagnostics) = parse(scan($program).tokens);
                assert!(diagnostics.is_empty(), "{:?}", diagnostics);
                let value = evaluate(&expr.unwrap()).unwrap();
                assert_eq!(value.to_string(), $result);
            }
        )*
        }
    }

    macro_rules! evaluator_error_tests {
        ($($name:ident: $program:expr, $code:expr, $span:expr)*) => {
        $(
            #[test]
            fn $name() {
                use crate::{evaluate, parse, scan};

                let (expr, diagnostics) = parse(scan($program).tokens);
                assert!(diagnostics.is_empty(), "{:?}", diagnostics);
                let diag = evaluate(&expr.unwrap()).unwrap_err();
                assert_eq!(diag.code, Some($code));
                assert_eq!((diag.span.lo, diag.span.hi), $span);
            }
        )*
        }
    }

    mod eval {
        evaluator_tests! {
            fraction: "1/2", "1/2"
            unreduced: "2/4", "2/4"
            scalar: "1.5", "1.5"
            negate: "-1/2", "-1/2"
            negate_scalar: "-2", "-2"
            add: "1/2 + 1/4", "6/8"
            sub: "1/2 - 1/4", "2/8"
            mul: "1/2 * 1/4", "1/8"
            mul_int: "1/2 * 2", "2/2"
            mul_float: "1/2 * 1.5", "1.5/2"
            int_mul: "2 * 1/2", "2/2"
            float_mul: "1.5 * 1/2", "1.5/2"
            equal: "1/2 == 2/4", "true"
            equal_false: "1/4 == 2/4", "false"
            not_equal: "1/2 != 2/4", "false"
            greater: "1/2 > 1/4", "true"
            less: "1/4 < 2/4", "true"
            greater_equal: "2/4 >= 1/2", "true"
            less_equal: "1/2 <= 1/4", "false"
            zero_denominator_literal: "1/0", "1/0"
            zero_denominator_add: "1/0 + 1/2", "2/0"
        }
    }

    mod eval_errors {
        evaluator_error_tests! {
            add_scalar: "1/2 + 2", "E0001", (4, 5)
            compare_scalar: "2 == 1/2", "E0001", (2, 4)
            mul_scalars: "2 * 3", "E0001", (2, 3)
            compare_zero_denominator: "1/0 < 1/2", "E0002", (0, 9)
            overflow_add: "1/9223372036854775807 + 1/9223372036854775807", "E0003", (0, 45)
            overflow_compare: "1/9223372036854775807 > 1/2", "E0003", (0, 27)
        }
    }
}
