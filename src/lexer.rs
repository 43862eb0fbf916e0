//! Scanner for C headers that declare token codes.
//!
//! Only as much of C is understood as an `enum` declaration needs:
//! identifiers, integer literals, and single punctuation characters.
//! Comments and preprocessor lines are skipped.

use std::fmt;

use crate::token::Span;

/// Kinds of header tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTokenKind {
    /// C identifier or keyword.
    Ident,
    /// Integer literal (decimal, octal, or hex) with optional `u`/`l`
    /// suffix, without sign.
    Integer,
    /// Any other single ASCII character.
    Punct(char),
}

/// A single header token with its kind, text, and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderToken {
    pub kind: HeaderTokenKind,
    pub text: String,
    pub span: Span,
}

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// `/*` without a closing `*/`.
    UnterminatedComment,
    /// Non-ASCII character outside a comment.
    UnexpectedCharacter(char),
    /// Literal starting with a digit that is not a valid C integer.
    InvalidNumber(String),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedComment => write!(f, "unterminated block comment"),
            Self::UnexpectedCharacter(ch) => write!(f, "unexpected character: {ch}"),
            Self::InvalidNumber(text) => write!(f, "invalid integer literal: {text}"),
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Tokenize header source text.
///
/// # Errors
///
/// Returns `LexError` on unterminated block comments, malformed
/// integer literals, or non-ASCII characters outside comments.
pub fn tokenize(input: &str) -> Result<Vec<HeaderToken>, LexError> {
    Lexer::new(input).tokenize()
}

/// Split a literal into its digits and its `u`/`l` suffix.
pub(crate) fn split_suffix(text: &str) -> (&str, &str) {
    let digits = text.trim_end_matches(['u', 'U', 'l', 'L']);
    (digits, &text[digits.len()..])
}

/// Whether `text` is a C integer literal, suffix included.
fn is_integer_literal(text: &str) -> bool {
    let (digits, suffix) = split_suffix(text);
    let suffix = suffix.to_ascii_lowercase();
    matches!(
        suffix.as_str(),
        "" | "u" | "l" | "ul" | "lu" | "ll" | "ull" | "llu"
    ) && is_integer_digits(digits)
}

fn is_integer_digits(text: &str) -> bool {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit())
    } else if text.len() > 1 && text.starts_with('0') {
        text.bytes().all(|b| (b'0'..=b'7').contains(&b))
    } else {
        !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
    }
}

struct Lexer<'a> {
    src: &'a str,
    input: &'a [u8],
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        let bytes = src.as_bytes();
        let start = if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
            3
        } else {
            0
        };
        Self {
            src,
            input: bytes,
            pos: start,
            line: 1,
            col: 1,
        }
    }

    fn tokenize(mut self) -> Result<Vec<HeaderToken>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            match ch {
                b' ' | b'\t' | b'\r' | b'\n' | 0x0b | 0x0c => self.advance(),
                b'/' if self.peek_at(1) == Some(b'/') => self.skip_line(),
                b'/' if self.peek_at(1) == Some(b'*') => self.skip_block_comment()?,
                b'#' => self.skip_directive(),
                b'a'..=b'z' | b'A'..=b'Z' | b'_' => tokens.push(self.read_ident()),
                b'0'..=b'9' => tokens.push(self.read_integer()?),
                _ if ch.is_ascii() => {
                    let span = self.span();
                    self.advance();
                    tokens.push(HeaderToken {
                        kind: HeaderTokenKind::Punct(char::from(ch)),
                        text: char::from(ch).to_string(),
                        span,
                    });
                }
                _ => {
                    let found = self.src[self.pos..].chars().next().unwrap_or('\u{FFFD}');
                    return Err(LexError {
                        kind: LexErrorKind::UnexpectedCharacter(found),
                        span: self.span(),
                    });
                }
            }
        }

        Ok(tokens)
    }

    const fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.col,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        if let Some(b) = self.peek() {
            if b == b'\n' {
                self.line += 1;
                self.col = 1;
            } else if b & 0xC0 != 0x80 {
                // UTF-8 continuation bytes share the column of their lead byte
                self.col += 1;
            }
            self.pos += 1;
        }
    }

    fn skip_line(&mut self) {
        while let Some(b) = self.peek() {
            if b == b'\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start = self.span();
        self.advance(); // '/'
        self.advance(); // '*'
        loop {
            match self.peek() {
                None => {
                    return Err(LexError {
                        kind: LexErrorKind::UnterminatedComment,
                        span: start,
                    });
                }
                Some(b'*') if self.peek_at(1) == Some(b'/') => {
                    self.advance();
                    self.advance();
                    return Ok(());
                }
                Some(_) => self.advance(),
            }
        }
    }

    /// Skip a preprocessor line, following backslash continuations.
    fn skip_directive(&mut self) {
        while let Some(b) = self.peek() {
            match b {
                b'\n' => break,
                b'\\' if self.peek_at(1) == Some(b'\n') => {
                    self.advance();
                    self.advance();
                }
                b'\\' if self.peek_at(1) == Some(b'\r') && self.peek_at(2) == Some(b'\n') => {
                    self.advance();
                    self.advance();
                    self.advance();
                }
                _ => self.advance(),
            }
        }
    }

    fn read_ident(&mut self) -> HeaderToken {
        let span = self.span();
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !(b.is_ascii_alphanumeric() || b == b'_') {
                break;
            }
            self.advance();
        }
        HeaderToken {
            kind: HeaderTokenKind::Ident,
            text: self.src[start..self.pos].to_string(),
            span,
        }
    }

    fn read_integer(&mut self) -> Result<HeaderToken, LexError> {
        let span = self.span();
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !(b.is_ascii_alphanumeric() || b == b'_') {
                break;
            }
            self.advance();
        }
        let text = &self.src[start..self.pos];
        if !is_integer_literal(text) {
            return Err(LexError {
                kind: LexErrorKind::InvalidNumber(text.to_string()),
                span,
            });
        }
        Ok(HeaderToken {
            kind: HeaderTokenKind::Integer,
            text: text.to_string(),
            span,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_entry() {
        let tokens = tokenize("ADD = 260,").expect("should tokenize");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                HeaderTokenKind::Ident,
                HeaderTokenKind::Punct('='),
                HeaderTokenKind::Integer,
                HeaderTokenKind::Punct(','),
            ]
        );
        assert_eq!(tokens[2].text, "260");
    }

    #[test]
    fn comments_and_directives_skipped() {
        let input = "#include \"calc.lex.h\"\n// line\n/* block\n comment */ ID";
        let tokens = tokenize(input).expect("should tokenize");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "ID");
        assert_eq!(tokens[0].span, Span { line: 4, column: 13 });
    }

    #[test]
    fn directive_continuation() {
        let tokens = tokenize("#define X \\\n  1\nY").expect("should tokenize");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "Y");
    }

    #[test]
    fn non_ascii_in_comment_counts_one_column() {
        let tokens = tokenize("/* é */ ID").expect("should tokenize");
        assert_eq!(tokens[0].span.column, 9);
    }

    #[test]
    fn integer_literal_forms() {
        assert!(is_integer_literal("0"));
        assert!(is_integer_literal("10000"));
        assert!(is_integer_literal("0x2710"));
        assert!(is_integer_literal("017"));
        assert!(!is_integer_literal("09"));
        assert!(!is_integer_literal("0x"));
        assert!(!is_integer_literal("12ab"));
    }

    #[test]
    fn integer_suffixes() {
        assert!(is_integer_literal("258U"));
        assert!(is_integer_literal("258ul"));
        assert!(is_integer_literal("0x102LLU"));
        assert!(!is_integer_literal("258uu"));
        assert!(!is_integer_literal("258lul"));
        assert!(!is_integer_literal("0xL"));
        let tokens = tokenize("258U").expect("should tokenize");
        assert_eq!(tokens[0].kind, HeaderTokenKind::Integer);
        assert_eq!(tokens[0].text, "258U");
    }

    #[test]
    fn unterminated_comment() {
        let err = tokenize("ID /* open").expect_err("should fail");
        assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
        assert_eq!(err.span, Span { line: 1, column: 4 });
    }
}
