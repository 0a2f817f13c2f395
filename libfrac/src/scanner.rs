pub mod errors;
pub mod types;

use crate::common::Span;
use crate::diagnostics::{Diagnostic, DiagnosticRecord};
use errors::*;
use std::iter::Peekable;
use std::str::CharIndices;
use types::*;

/// The result of scanning a frac program.
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn scan<T: Into<String>>(input: T) -> ScanResult {
    let input = input.into();
    let mut scanner = Scanner::new(&input);
    scanner.scan();
    ScanResult {
        tokens: scanner.output,
        diagnostics: scanner.diagnostics,
    }
}

struct Scanner<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    output: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Scanner<'a> {
        Scanner {
            input,
            chars: input.char_indices().peekable(),
            output: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn scan(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            match c {
                _ if c.is_whitespace() => {
                    self.chars.next();
                }
                _ if c.is_ascii_digit() || c == '.' => self.scan_num(),
                _ => self.scan_symbol(),
            }
        }

        let end = self.input.len();
        self.output.push(Token::new(TokenType::EOF, (end, end)));
    }

    /// Consumes the next char if it is `expected`, returning its end position.
    fn eat(&mut self, expected: char) -> Option<usize> {
        match self.chars.peek() {
            Some(&(i, c)) if c == expected => {
                self.chars.next();
                Some(i + c.len_utf8())
            }
            _ => None,
        }
    }

    fn scan_symbol(&mut self) {
        use TokenType::*;
        let (start, c) = match self.chars.next() {
            Some(next) => next,
            None => return,
        };
        let mut end = start + c.len_utf8();
        let ty = match c {
            '+' => Plus,
            '-' => Minus,
            '*' => Mult,
            '/' => Div,
            '>' => match self.eat('=') {
                Some(e) => {
                    end = e;
                    GreaterEqual
                }
                None => Greater,
            },
            '<' => match self.eat('=') {
                Some(e) => {
                    end = e;
                    LessEqual
                }
                None => Less,
            },
            '=' => match self.eat('=') {
                Some(e) => {
                    end = e;
                    Equal
                }
                None => {
                    self.invalid_token(c, (start, end), Some("=="));
                    Invalid(c.to_string())
                }
            },
            '!' => match self.eat('=') {
                Some(e) => {
                    end = e;
                    NotEqual
                }
                None => {
                    self.invalid_token(c, (start, end), Some("!="));
                    Invalid(c.to_string())
                }
            },
            c => {
                self.invalid_token(c, (start, end), None);
                Invalid(c.to_string())
            }
        };
        self.output.push(Token::new(ty, (start, end)));
    }

    fn invalid_token(&mut self, c: char, span: (usize, usize), did_you_mean: Option<&str>) {
        let mut diag = Diagnostic::span_err(
            span,
            format!("Invalid token \"{}\"", c),
            InvalidToken::CODE,
            String::from("not part of the frac language"),
        )
        .with_note("programs may only contain numbers, \"/\", and the operators + - * == != > < >= <=");
        if let Some(did_you_mean) = did_you_mean {
            diag = diag.with_spanned_help(span, format!(r#"did you mean "{}"?"#, did_you_mean));
        }
        self.diagnostics.push(diag);
    }

    /// Scans an integer, or a decimal number if a `.` is present.
    fn scan_num(&mut self) {
        let start = match self.chars.peek() {
            Some(&(i, _)) => i,
            None => return,
        };
        let mut end = start;
        let mut seen_dot = false;
        while let Some(&(i, c)) = self.chars.peek() {
            if c.is_ascii_digit() || (c == '.' && !seen_dot) {
                seen_dot |= c == '.';
                end = i + c.len_utf8();
                self.chars.next();
            } else {
                break;
            }
        }

        let span = Span::from((start, end));
        let num_str = &self.input[start..end];
        let ty = if seen_dot {
            match num_str.parse::<f64>() {
                Ok(f) => TokenType::Float(f),
                Err(_) => {
                    self.diagnostics.push(
                        Diagnostic::span_err(
                            span,
                            "Invalid number",
                            InvalidToken::CODE,
                            String::from("no digits"),
                        )
                        .with_help("decimal numbers need at least one digit, like \"0.5\""),
                    );
                    TokenType::Invalid(num_str.to_owned())
                }
            }
        } else {
            match num_str.parse::<i64>() {
                Ok(i) => TokenType::Int(i),
                Err(_) => {
                    self.diagnostics.push(
                        Diagnostic::span_err(
                            span,
                            "Integer out of range",
                            IntegerOutOfRange::CODE,
                            String::from("this does not fit in a 64-bit integer"),
                        )
                        .with_note(format!("the largest integer is {}", i64::MAX)),
                    );
                    TokenType::Invalid(num_str.to_owned())
                }
            }
        };
        self.output.push(Token::new(ty, span));
    }
}
