//! Emit strategies for frac values and programs.

use crate::evaluator::Value;
use crate::fraction::Fraction;
use crate::grammar::*;
use crate::scalar::Scalar;

use core::fmt;

/// The format in which a frac value or program should be emitted.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EmitFormat {
    /// Canonical, human-readable form.
    /// For example, one half is output as `1/2`.
    Pretty,
    /// S-expression form.
    /// For example, one half is output as `(/ 1 2)`.
    SExpression,
    /// LaTeX output form.
    /// For example, one half is output as `\frac{1}{2}`.
    Latex,
    /// Internal debug form.
    /// NB: this form is not stable, and no assumptions should be made about it.
    Debug,
}

/// Converts an `--output-form` name. Unknown names fall back to [Pretty](EmitFormat::Pretty).
impl From<String> for EmitFormat {
    fn from(form: String) -> Self {
        match form.as_ref() {
            "s-expression" => EmitFormat::SExpression,
            "latex" => EmitFormat::Latex,
            "debug" => EmitFormat::Debug,
            _ => EmitFormat::Pretty,
        }
    }
}

/// Implements the emission of a type in an [EmitFormat][EmitFormat].
pub trait Emit
where
    Self: fmt::Display + fmt::Debug,
{
    /// Emit `self` with the given [EmitFormat][EmitFormat].
    fn emit(&self, form: EmitFormat) -> String {
        match form {
            EmitFormat::Pretty => self.emit_pretty(),
            EmitFormat::SExpression => self.emit_s_expression(),
            EmitFormat::Latex => self.emit_latex(),
            EmitFormat::Debug => self.emit_debug(),
        }
    }

    /// Emit `self` with the [pretty emit format][EmitFormat::Pretty]
    fn emit_pretty(&self) -> String;

    /// Emit `self` with the [debug emit format][EmitFormat::Debug]
    fn emit_debug(&self) -> String {
        format!("{:#?}", self)
    }

    /// Emit `self` with the [s_expression emit format][EmitFormat::SExpression]
    fn emit_s_expression(&self) -> String {
        self.emit_pretty()
    }

    /// Emit `self` with the [LaTeX emit format][EmitFormat::Latex]
    fn emit_latex(&self) -> String {
        self.emit_pretty()
    }
}

/// Implements `core::fmt::Display` for a type implementing `Emit`.
#[doc(hidden)]
macro_rules! fmt_emit_impl {
    ($S:path) => {
        impl core::fmt::Display for $S {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.emit_pretty(),)
            }
        }
    };
}

fmt_emit_impl!(Scalar);
impl Emit for Scalar {
    fn emit_pretty(&self) -> String {
        match self {
            Self::Int(i) => i.to_string(),
            // Debug formatting always keeps a decimal point or exponent, so 3.0 stays "3.0".
            Self::Float(f) => format!("{:?}", f),
        }
    }
}

fmt_emit_impl!(Fraction);
impl Emit for Fraction {
    fn emit_pretty(&self) -> String {
        format!("{}/{}", self.numerator(), self.denominator())
    }

    fn emit_s_expression(&self) -> String {
        format!("(/ {} {})", self.numerator(), self.denominator())
    }

    fn emit_latex(&self) -> String {
        format!("\\frac{{{}}}{{{}}}", self.numerator(), self.denominator())
    }
}

fmt_emit_impl!(Value);
impl Emit for Value {
    fn emit_pretty(&self) -> String {
        match self {
            Self::Fraction(frac) => frac.emit_pretty(),
            Self::Scalar(scalar) => scalar.emit_pretty(),
            Self::Bool(b) => b.to_string(),
        }
    }

    fn emit_s_expression(&self) -> String {
        match self {
            Self::Fraction(frac) => frac.emit_s_expression(),
            Self::Scalar(scalar) => scalar.emit_s_expression(),
            Self::Bool(b) => b.to_string(),
        }
    }

    fn emit_latex(&self) -> String {
        match self {
            Self::Fraction(frac) => frac.emit_latex(),
            Self::Scalar(scalar) => scalar.emit_latex(),
            Self::Bool(b) => format!("\\mathrm{{{}}}", b),
        }
    }
}

fmt_emit_impl!(BinaryOperator);
impl Emit for BinaryOperator {
    fn emit_pretty(&self) -> String {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mult => "*",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
        }
        .to_owned()
    }

    fn emit_latex(&self) -> String {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mult => "\\times",
            Self::Equal => "=",
            Self::NotEqual => "\\neq",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => "\\geq",
            Self::LessEqual => "\\leq",
        }
        .to_owned()
    }
}

fmt_emit_impl!(Expr);
impl Emit for Expr {
    fn emit_pretty(&self) -> String {
        match self {
            Self::Fraction(frac, _) => frac.emit_pretty(),
            Self::Scalar(scalar, _) => scalar.emit_pretty(),
            Self::Negate(inner, _) => match inner.as_ref() {
                // "-1/2" would read as a negative numerator.
                Self::Fraction(..) => format!("-({})", inner.emit_pretty()),
                _ => format!("-{}", inner.emit_pretty()),
            },
            Self::BinaryExpr(binary_expr) => binary_expr.emit_pretty(),
        }
    }

    fn emit_s_expression(&self) -> String {
        match self {
            Self::Fraction(frac, _) => frac.emit_s_expression(),
            Self::Scalar(scalar, _) => scalar.emit_s_expression(),
            Self::Negate(inner, _) => format!("(- {})", inner.emit_s_expression()),
            Self::BinaryExpr(binary_expr) => binary_expr.emit_s_expression(),
        }
    }

    fn emit_latex(&self) -> String {
        match self {
            Self::Fraction(frac, _) => frac.emit_latex(),
            Self::Scalar(scalar, _) => scalar.emit_latex(),
            Self::Negate(inner, _) => format!("-{}", inner.emit_latex()),
            Self::BinaryExpr(binary_expr) => binary_expr.emit_latex(),
        }
    }
}

fmt_emit_impl!(BinaryExpr);
impl Emit for BinaryExpr {
    fn emit_pretty(&self) -> String {
        format!(
            "{} {} {}",
            self.lhs.emit_pretty(),
            self.op.emit_pretty(),
            self.rhs.emit_pretty()
        )
    }

    fn emit_s_expression(&self) -> String {
        format!(
            "({} {} {})",
            self.op.emit_pretty(),
            self.lhs.emit_s_expression(),
            self.rhs.emit_s_expression()
        )
    }

    fn emit_latex(&self) -> String {
        format!(
            "{} {} {}",
            self.lhs.emit_latex(),
            self.op.emit_latex(),
            self.rhs.emit_latex()
        )
    }
}
