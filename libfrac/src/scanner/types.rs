//! Definitions of types used in the libfrac scanner.

use crate::common::Span;
use core::fmt;

/// The type of a [Token][Token].
#[derive(PartialEq, Clone, Debug)]
pub enum TokenType {
    /// An integer literal.
    Int(i64),

    /// A decimal literal.
    Float(f64),

    /// + symbol
    Plus,

    /// - symbol
    Minus,

    /// * symbol
    Mult,

    /// / symbol
    Div,

    /// == symbol
    Equal,

    /// != symbol
    NotEqual,

    /// > symbol
    Greater,

    /// < symbol
    Less,

    /// >= symbol
    GreaterEqual,

    /// <= symbol
    LessEqual,

    /// An invalid token.
    Invalid(String),

    /// End of file.
    EOF,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenType::*;
        write!(
            f,
            "{}",
            match self {
                Int(num) => num.to_string(),
                Float(num) => num.to_string(),
                Plus => "+".into(),
                Minus => "-".into(),
                Mult => "*".into(),
                Div => "/".into(),
                Equal => "==".into(),
                NotEqual => "!=".into(),
                Greater => ">".into(),
                Less => "<".into(),
                GreaterEqual => ">=".into(),
                LessEqual => "<=".into(),
                Invalid(s) => format!("Invalid({})", s),
                EOF => "end of file".into(),
            }
        )
    }
}

#[derive(PartialEq, Clone, Debug)]
pub struct Token {
    pub ty: TokenType,
    pub span: Span,
}

impl Token {
    pub fn new<S: Into<Span>>(ty: TokenType, span: S) -> Self {
        Self {
            ty,
            span: span.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty)
    }
}
