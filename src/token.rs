use std::fmt;
use std::str::FromStr;

/// Source location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// First code a yacc-family parser generator assigns to a named token.
///
/// Codes below this are end-of-input (0) and single-byte literal tokens.
pub const FIRST_GRAMMAR_CODE: i32 = 258;

/// First code of the sentinel band.
pub const FIRST_SENTINEL_CODE: i32 = 10_000;

/// Numeric band a token code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// Non-grammar conditions (`ILLEGAL`, `EOL`), numbered from 10000.
    Sentinel,
    /// Tokens the grammar refers to, numbered from 258.
    Grammar,
}

/// Token kinds shared by the calculator lexer and parser.
///
/// Discriminants are the integer codes and must stay in agreement with
/// the parser tables, so they are spelled out rather than derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum TokenKind {
    /// Input the lexer could not recognize.
    Illegal = 10_000,
    /// End of an input line.
    EndOfLine = 10_001,

    /// Variable name.
    Identifier = 258,
    /// Integer literal.
    Number = 259,

    /// `+`
    Add = 260,
    /// `-`
    Subtract = 261,
    /// `*`
    Multiply = 262,
    /// `/`
    Divide = 263,
    /// `|`, delimits an absolute value.
    AbsoluteValue = 264,

    /// `(`
    LeftParen = 265,
    /// `)`
    RightParen = 266,
    /// `=`
    Assign = 267,
}

/// Error returned when a code, name, or lexeme names no token kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Integer that is not a registered code.
    #[error("unknown token code: {0}")]
    UnknownCode(i32),
    /// Text that is neither a header name nor a variant name.
    #[error("unknown token name: {0:?}")]
    UnknownName(String),
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Illegal,
        Self::EndOfLine,
        Self::Identifier,
        Self::Number,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::AbsoluteValue,
        Self::LeftParen,
        Self::RightParen,
        Self::Assign,
    ];

    /// Integer code of this kind.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Kind registered under `code`, if any.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        let mut i = 0;
        while i < Self::ALL.len() {
            if Self::ALL[i] as i32 == code {
                return Some(Self::ALL[i]);
            }
            i += 1;
        }
        None
    }

    /// Name used in the C header (`ILLEGAL`, `EOL`, `ID`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::EndOfLine => "EOL",
            Self::Identifier => "ID",
            Self::Number => "NUMBER",
            Self::Add => "ADD",
            Self::Subtract => "SUB",
            Self::Multiply => "MUL",
            Self::Divide => "DIV",
            Self::AbsoluteValue => "ABS",
            Self::LeftParen => "LPAREN",
            Self::RightParen => "RPAREN",
            Self::Assign => "ASSIGN",
        }
    }

    /// Rust variant name (`Illegal`, `EndOfLine`, ...).
    #[must_use]
    pub const fn variant_name(self) -> &'static str {
        match self {
            Self::Illegal => "Illegal",
            Self::EndOfLine => "EndOfLine",
            Self::Identifier => "Identifier",
            Self::Number => "Number",
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::AbsoluteValue => "AbsoluteValue",
            Self::LeftParen => "LeftParen",
            Self::RightParen => "RightParen",
            Self::Assign => "Assign",
        }
    }

    /// Kind whose header name is exactly `name`. Case-sensitive, as in C.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Source text of an operator or punctuation token.
    ///
    /// Identifiers, numbers, and sentinels have no fixed lexeme.
    #[must_use]
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Add => Some("+"),
            Self::Subtract => Some("-"),
            Self::Multiply => Some("*"),
            Self::Divide => Some("/"),
            Self::AbsoluteValue => Some("|"),
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::Assign => Some("="),
            Self::Illegal | Self::EndOfLine | Self::Identifier | Self::Number => None,
        }
    }

    /// Kind whose lexeme is the single character `ch`.
    #[must_use]
    pub const fn from_lexeme(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '|' => Some(Self::AbsoluteValue),
            '(' => Some(Self::LeftParen),
            ')' => Some(Self::RightParen),
            '=' => Some(Self::Assign),
            _ => None,
        }
    }

    #[must_use]
    pub const fn band(self) -> Band {
        if self.code() >= FIRST_SENTINEL_CODE {
            Band::Sentinel
        } else {
            Band::Grammar
        }
    }

    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        matches!(self.band(), Band::Sentinel)
    }

    /// True for the arithmetic operators, `Add` through `AbsoluteValue`.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::AbsoluteValue
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<TokenKind> for i32 {
    fn from(kind: TokenKind) -> Self {
        kind.code()
    }
}

impl TryFrom<i32> for TokenKind {
    type Error = LookupError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(LookupError::UnknownCode(code))
    }
}

/// Accepts the header name or the variant name, ignoring ASCII case.
impl FromStr for TokenKind {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(s) || kind.variant_name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| LookupError::UnknownName(s.to_string()))
    }
}

/// Resolve a user-supplied key: an integer code, a one-character
/// lexeme, or a name.
///
/// # Errors
///
/// Returns `LookupError::UnknownCode` for integers outside the registry
/// and `LookupError::UnknownName` for anything else that does not match.
pub fn lookup(key: &str) -> Result<TokenKind, LookupError> {
    if let Ok(code) = key.parse::<i32>() {
        return TokenKind::try_from(code);
    }
    let mut chars = key.chars();
    let single = match (chars.next(), chars.next()) {
        (Some(ch), None) => TokenKind::from_lexeme(ch),
        _ => None,
    };
    single.map_or_else(|| key.parse(), Ok)
}
