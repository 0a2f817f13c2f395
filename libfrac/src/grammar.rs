//! The frac program grammar: a single operand, or one binary operation on two operands.

use crate::common::Span;
use crate::fraction::Fraction;
use crate::scalar::Scalar;

#[derive(Clone, Debug)]
pub enum Expr {
    /// A fraction literal, like `1/2`.
    Fraction(Fraction, Span),
    /// A plain number, like `2` or `1.5`.
    Scalar(Scalar, Span),
    /// A negated operand, like `-1/2`.
    Negate(Box<Expr>, Span),
    BinaryExpr(BinaryExpr),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Fraction(_, span) | Expr::Scalar(_, span) | Expr::Negate(_, span) => *span,
            Expr::BinaryExpr(binary_expr) => binary_expr.lhs.span().to(binary_expr.rhs.span()),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Mult,
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
}

impl BinaryOperator {
    pub fn is_comparison(self) -> bool {
        !matches!(
            self,
            BinaryOperator::Plus | BinaryOperator::Minus | BinaryOperator::Mult
        )
    }
}

#[derive(Clone, Debug)]
pub struct BinaryExpr {
    pub op: BinaryOperator,
    pub op_span: Span,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}
