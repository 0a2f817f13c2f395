//! libfrac: an unreduced fraction value type with overloaded operators.
//!
//! ```
//! use libfrac::Fraction;
//!
//! let half = Fraction::new(1, 2);
//! let quarter = Fraction::new(1, 4);
//!
//! assert_eq!((half + quarter).to_string(), "6/8");
//! assert_eq!((half * 1.5).to_string(), "1.5/2");
//! assert!(half == Fraction::new(2, 4));
//! assert!(quarter < half);
//! ```
//!
//! Fractions are never reduced; equality and ordering are computed by scaling both numerators
//! onto a [common multiple](lowest_common_multiple) of the denominators.
//!
//! Besides the value type, libfrac evaluates one-operation programs like `1/2 + 1/4`:
//! [scan] produces tokens, [parse] produces an [Expr], and [evaluate] produces a [Value] that can
//! be [emitted](Emit) in several formats. Each stage reports problems as
//! [Diagnostic](diagnostics::Diagnostic)s.

#[macro_use]
pub mod diagnostics;

pub mod common;

mod emit;
pub use emit::{Emit, EmitFormat};

mod fraction;
pub use fraction::{Fraction, FractionError, ParseFractionError};

mod scalar;
pub use scalar::Scalar;

mod math;
pub use math::{checked_lowest_common_multiple, lowest_common_multiple};

#[cfg(feature = "benchmark-internals")]
pub use math::_gcd_lowest_common_multiple;

#[cfg(feature = "benchmark-internals")]
pub use fraction::_compare;

pub mod scanner;
pub use scanner::scan;
pub use scanner::types::{Token, TokenType};

mod grammar;
pub use grammar::{BinaryExpr, BinaryOperator, Expr};

mod parser;
pub use parser::{parse, MAX_NEGATIONS};

mod evaluator;
pub use evaluator::{evaluate, Value};
