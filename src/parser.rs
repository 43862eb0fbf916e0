use std::fmt;

use crate::lexer::{HeaderToken, HeaderTokenKind, split_suffix};
use crate::token::Span;

/// One `NAME = CODE` entry of a header `enum`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub code: i32,
    /// Where `name` appears.
    pub span: Span,
}

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No `enum` keyword anywhere in the header.
    MissingEnum,
    /// Expected one thing, found another token or EOF.
    Expected {
        expected: &'static str,
        found: Option<String>,
    },
    /// Literal does not fit in an `i32`.
    NumberOutOfRange(String),
    /// Entry without an initializer following `i32::MAX`.
    ImplicitOverflow { name: String },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEnum => write!(f, "no enum declaration found"),
            Self::Expected {
                expected,
                found: None,
            } => write!(f, "expected {expected}, reached end of input"),
            Self::Expected {
                expected,
                found: Some(t),
            } => write!(f, "expected {expected}, got '{t}'"),
            Self::NumberOutOfRange(text) => {
                write!(f, "integer literal out of range: {text}")
            }
            Self::ImplicitOverflow { name } => {
                write!(f, "implicit value of {name} overflows")
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Parse the first `enum` declaration in a header token stream.
///
/// Entries without an initializer take the previous value plus one,
/// starting from zero. A declarator between `}` and `;` (as in
/// `typedef enum { ... } tok_t;`) is skipped. Tokens after the closing
/// `;` are ignored.
///
/// # Errors
///
/// Returns `ParseError` when no `enum` is present, the declaration is
/// malformed, or a value does not fit in an `i32`.
pub fn parse(tokens: &[HeaderToken]) -> Result<Vec<Declaration>, ParseError> {
    Parser::new(tokens).parse()
}

struct Parser<'a> {
    tokens: &'a [HeaderToken],
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [HeaderToken]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse(mut self) -> Result<Vec<Declaration>, ParseError> {
        self.skip_to_enum()?;

        // Optional tag: `enum yytokentype { ... }`
        if self.peek().is_some_and(|t| t.kind == HeaderTokenKind::Ident) {
            self.pos += 1;
        }
        self.expect_punct('{', "'{'")?;

        let mut declarations = Vec::new();
        let mut next_code = Some(0_i32);

        loop {
            if self.eat_punct('}') {
                break;
            }
            let (name, span) = self.expect_ident()?;
            let code = if self.eat_punct('=') {
                self.parse_value()?
            } else {
                next_code.ok_or_else(|| ParseError {
                    kind: ParseErrorKind::ImplicitOverflow { name: name.clone() },
                    span,
                })?
            };
            next_code = code.checked_add(1);
            declarations.push(Declaration { name, code, span });

            if !self.eat_punct(',') {
                self.expect_punct('}', "',' or '}'")?;
                break;
            }
        }

        // Declarator: `typedef enum { ... } tok_t;`
        if self.peek().is_some_and(|t| t.kind == HeaderTokenKind::Ident) {
            self.pos += 1;
        }
        self.expect_punct(';', "';'")?;
        Ok(declarations)
    }

    fn peek(&self) -> Option<&'a HeaderToken> {
        self.tokens.get(self.pos)
    }

    fn current_span(&self) -> Span {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or(Span { line: 1, column: 1 }, |t| t.span)
    }

    fn error_expected(&self, expected: &'static str) -> ParseError {
        ParseError {
            kind: ParseErrorKind::Expected {
                expected,
                found: self.peek().map(|t| t.text.clone()),
            },
            span: self.current_span(),
        }
    }

    fn skip_to_enum(&mut self) -> Result<(), ParseError> {
        while let Some(token) = self.peek() {
            self.pos += 1;
            if token.kind == HeaderTokenKind::Ident && token.text == "enum" {
                return Ok(());
            }
        }
        Err(ParseError {
            kind: ParseErrorKind::MissingEnum,
            span: self.current_span(),
        })
    }

    fn eat_punct(&mut self, ch: char) -> bool {
        if self
            .peek()
            .is_some_and(|t| t.kind == HeaderTokenKind::Punct(ch))
        {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_punct(&mut self, ch: char, expected: &'static str) -> Result<(), ParseError> {
        if self.eat_punct(ch) {
            Ok(())
        } else {
            Err(self.error_expected(expected))
        }
    }

    fn expect_ident(&mut self) -> Result<(String, Span), ParseError> {
        match self.peek() {
            Some(token) if token.kind == HeaderTokenKind::Ident => {
                self.pos += 1;
                Ok((token.text.clone(), token.span))
            }
            _ => Err(self.error_expected("enumerator name")),
        }
    }

    /// `[+|-] INTEGER`
    fn parse_value(&mut self) -> Result<i32, ParseError> {
        let negative = if self.eat_punct('-') {
            true
        } else {
            self.eat_punct('+');
            false
        };

        let token = match self.peek() {
            Some(token) if token.kind == HeaderTokenKind::Integer => token,
            _ => return Err(self.error_expected("integer literal")),
        };
        self.pos += 1;

        let out_of_range = || ParseError {
            kind: ParseErrorKind::NumberOutOfRange(if negative {
                format!("-{}", token.text)
            } else {
                token.text.clone()
            }),
            span: token.span,
        };

        let magnitude = integer_value(&token.text).ok_or_else(out_of_range)?;
        let value = if negative { -magnitude } else { magnitude };
        i32::try_from(value).map_err(|_| out_of_range())
    }
}

/// Value of an already validated C integer literal, if it fits an `i64`.
/// Any `u`/`l` suffix is ignored.
fn integer_value(text: &str) -> Option<i64> {
    let (text, _) = split_suffix(text);
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()
    } else if text.len() > 1 && text.starts_with('0') {
        i64::from_str_radix(&text[1..], 8).ok()
    } else {
        text.parse().ok()
    }
}
