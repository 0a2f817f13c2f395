//! Parses scanned tokens into a frac [Expr].
//!
//! ```text
//! program  := operand (binop operand)? EOF
//! operand  := '-' operand | number ('/' '-'? integer)?
//! binop    := '+' | '-' | '*' | '==' | '!=' | '>' | '<' | '>=' | '<='
//! ```

pub mod errors;

use crate::common::Span;
use crate::diagnostics::{Diagnostic, DiagnosticRecord};
use crate::fraction::Fraction;
use crate::grammar::*;
use crate::scalar::Scalar;
use crate::scanner::types::{Token, TokenType};
use errors::*;

/// Deepest chain of leading "-" an operand may carry. Evaluation and emit recurse once per
/// negation.
pub const MAX_NEGATIONS: usize = 256;

/// Parses a program, returning its expression if it is well-formed and any diagnostics found.
pub fn parse(tokens: Vec<Token>) -> (Option<Expr>, Vec<Diagnostic>) {
    let mut parser = Parser::new(tokens);
    match parser.parse_program() {
        Ok(expr) => (Some(expr), Vec::new()),
        Err(diagnostic) => (None, vec![diagnostic]),
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last(), Some(Token { ty: TokenType::EOF, .. })) {
            let end = tokens.last().map(|tok| tok.span.hi).unwrap_or(0);
            tokens.push(Token::new(TokenType::EOF, (end, end)));
        }
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn next(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        tok
    }

    fn parse_program(&mut self) -> Result<Expr, Diagnostic> {
        let lhs = self.parse_operand()?;
        let op = match binary_operator(&self.peek().ty) {
            Some(op) => op,
            None => {
                self.expect_eof()?;
                return Ok(lhs);
            }
        };
        let op_span = self.next().span;
        let rhs = self.parse_operand()?;
        self.expect_eof()?;

        Ok(Expr::BinaryExpr(BinaryExpr {
            op,
            op_span,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }))
    }

    fn parse_operand(&mut self) -> Result<Expr, Diagnostic> {
        let mut negations = Vec::new();
        while self.peek().ty == TokenType::Minus {
            negations.push(self.next().span);
        }
        if negations.len() > MAX_NEGATIONS {
            let run = negations[0].to(negations[negations.len() - 1]);
            return Err(Diagnostic::span_err(
                run,
                "Too many negations",
                TooManyNegations::CODE,
                format!("{} negations in a row", negations.len()),
            )
            .with_note(format!("an operand may be negated at most {} times", MAX_NEGATIONS)));
        }

        let mut operand = self.parse_unsigned_operand()?;
        // Innermost negation first, so each span covers its own "-" and everything after it.
        for minus_span in negations.into_iter().rev() {
            let span = minus_span.to(operand.span());
            operand = Expr::Negate(Box::new(operand), span);
        }
        Ok(operand)
    }

    fn parse_unsigned_operand(&mut self) -> Result<Expr, Diagnostic> {
        let tok = self.next();
        let numerator = match tok.ty {
            TokenType::Int(i) => Scalar::Int(i),
            TokenType::Float(f) => Scalar::Float(f),
            _ => {
                return Err(Diagnostic::span_err(
                    tok.span,
                    "Expected an operand",
                    ExpectedOperand::CODE,
                    format!("expected a number or fraction, found {}", tok.ty),
                ))
            }
        };

        if self.peek().ty != TokenType::Div {
            return Ok(Expr::Scalar(numerator, tok.span));
        }
        let div_span = self.next().span;
        let (denominator, den_span) = self.parse_denominator(div_span)?;

        Ok(Expr::Fraction(
            Fraction::new(numerator, denominator),
            tok.span.to(den_span),
        ))
    }

    fn parse_denominator(&mut self, div_span: Span) -> Result<(i64, Span), Diagnostic> {
        let sign = if self.peek().ty == TokenType::Minus {
            Some(self.next().span)
        } else {
            None
        };

        let tok = self.next();
        match tok.ty {
            TokenType::Int(i) => match sign {
                Some(sign_span) => Ok((-i, sign_span.to(tok.span))),
                None => Ok((i, tok.span)),
            },
            TokenType::Float(_) => Err(Diagnostic::span_err(
                tok.span,
                "Expected an integer denominator",
                ExpectedIntegerDenominator::CODE,
                String::from("denominators cannot be decimal numbers"),
            )
            .with_help("scale the numerator instead, like \"1/2 * 1.5\"")),
            _ => Err(Diagnostic::span_err(
                tok.span,
                "Expected an integer denominator",
                ExpectedIntegerDenominator::CODE,
                format!("expected an integer, found {}", tok.ty),
            )
            .with_spanned_help(div_span, "this \"/\" must be followed by a denominator")),
        }
    }

    fn expect_eof(&mut self) -> Result<(), Diagnostic> {
        let tok = self.peek();
        if tok.ty == TokenType::EOF {
            return Ok(());
        }
        Err(Diagnostic::span_err(
            tok.span,
            "Expected end of program",
            ExpectedEnd::CODE,
            format!("unexpected {}", tok.ty),
        )
        .with_note("programs contain at most one operation"))
    }
}

fn binary_operator(ty: &TokenType) -> Option<BinaryOperator> {
    use BinaryOperator::*;
    Some(match ty {
        TokenType::Plus => Plus,
        TokenType::Minus => Minus,
        TokenType::Mult => Mult,
        TokenType::Equal => Equal,
        TokenType::NotEqual => NotEqual,
        TokenType::Greater => Greater,
        TokenType::Less => Less,
        TokenType::GreaterEqual => GreaterEqual,
        TokenType::LessEqual => LessEqual,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    // Tests parsed programs against their s-expression emit.
    macro_rules! parser_tests {
        ($($name:ident: $program:expr, $s_expr:expr)*) => {
        $(
            #[test]
            fn $name() {
                use crate::{parse, scan, Emit};

                let (expr, diagnostics) = parse(scan($program).tokens);
                assert!(diagnostics.is_empty(), "{:?}", diagnostics);
                assert_eq!(expr.unwrap().emit_s_expression(), $s_expr);
            }
        )*
        }
    }

    macro_rules! parser_error_tests {
        ($($name:ident: $program:expr, $code:expr, $span:expr)*) => {
        $(
            #[test]
            fn $name() {
                use crate::{parse, scan};

                let (expr, diagnostics) = parse(scan($program).tokens);
                assert!(expr.is_none());
                assert_eq!(diagnostics.len(), 1);
                assert_eq!(diagnostics[0].code, Some($code));
                assert_eq!((diagnostics[0].span.lo, diagnostics[0].span.hi), $span);
            }
        )*
        }
    }

    mod parse {
        parser_tests! {
            fraction: "1/2", "(/ 1 2)"
            scalar: "2", "2"
            float_scalar: "1.5", "1.5"
            float_numerator: "1.5/2", "(/ 1.5 2)"
            negative_denominator: "1/-2", "(/ 1 -2)"
            negated: "-1/2", "(- (/ 1 2))"
            double_negated: "--1/2", "(- (- (/ 1 2)))"
            add: "1/2 + 1/4", "(+ (/ 1 2) (/ 1 4))"
            sub: "1/2 - 1/4", "(- (/ 1 2) (/ 1 4))"
            sub_negated: "1/2 - -1/4", "(- (/ 1 2) (- (/ 1 4)))"
            mul_scalar: "1/2 * 2", "(* (/ 1 2) 2)"
            scalar_mul: "1.5 * 1/2", "(* 1.5 (/ 1 2))"
            equal: "1/2 == 2/4", "(== (/ 1 2) (/ 2 4))"
            not_equal: "1/2 != 2/4", "(!= (/ 1 2) (/ 2 4))"
            greater: "1/2 > 1/4", "(> (/ 1 2) (/ 1 4))"
            less: "1/2 < 1/4", "(< (/ 1 2) (/ 1 4))"
            greater_equal: "1/2>=1/4", "(>= (/ 1 2) (/ 1 4))"
            less_equal: "1/2<=1/4", "(<= (/ 1 2) (/ 1 4))"
        }
    }

    mod parse_errors {
        parser_error_tests! {
            empty: "", "P0001", (0, 0)
            missing_rhs: "1/2 +", "P0001", (5, 5)
            operator_first: "* 1/2", "P0001", (0, 1)
            float_denominator: "1/2.5", "P0002", (2, 5)
            missing_denominator: "1/", "P0002", (2, 2)
            slash_slash: "1//2", "P0002", (2, 3)
            two_operations: "1/2 + 1/4 + 1/8", "P0003", (10, 11)
            trailing_number: "1/2 3", "P0003", (4, 5)
            too_many_negations: &("-".repeat(257) + "1/2"), "P0004", (0, 257)
            too_many_negations_rhs: &(String::from("1/2 + ") + &"-".repeat(300) + "1"), "P0004", (6, 306)
        }
    }

    #[test]
    fn negation_chain_at_limit() {
        use super::MAX_NEGATIONS;
        use crate::{parse, scan, Emit, Expr};

        let program = "-".repeat(MAX_NEGATIONS) + "1/2";
        let (expr, diagnostics) = parse(scan(program.as_str()).tokens);
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        let mut expr = expr.unwrap();
        assert_eq!(expr.emit_s_expression().matches("(-").count(), MAX_NEGATIONS);

        let mut depth = 0;
        while let Expr::Negate(inner, span) = expr {
            assert_eq!((span.lo, span.hi), (depth, MAX_NEGATIONS + 3));
            depth += 1;
            expr = *inner;
        }
        assert_eq!(depth, MAX_NEGATIONS);
    }

    #[test]
    fn spans() {
        use crate::{parse, scan, Expr};

        let (expr, _) = parse(scan("1/2 + -3/-4").tokens);
        match expr.unwrap() {
            Expr::BinaryExpr(binary) => {
                assert_eq!((binary.op_span.lo, binary.op_span.hi), (4, 5));
                assert_eq!((binary.lhs.span().lo, binary.lhs.span().hi), (0, 3));
                assert_eq!((binary.rhs.span().lo, binary.rhs.span().hi), (6, 11));
            }
            expr => panic!("expected a binary expression, found {:?}", expr),
        }
    }
}
