//! Token-kind registry for a toy calculator's lexer and parser.
//!
//! Every kind carries a fixed integer code. Sentinels (`ILLEGAL`, `EOL`)
//! sit at 10000 and up; grammar tokens start at 258, the first code a
//! yacc-family parser generator hands out. The crate can also render the
//! registry as a C header and check an existing header against it.
//!
//! # Quick start
//!
//! ## Look up codes
//!
//! ```
//! use calc_tokens::TokenKind;
//!
//! assert_eq!(TokenKind::Add.code(), 260);
//! assert_eq!(TokenKind::from_code(10_001), Some(TokenKind::EndOfLine));
//! assert_eq!("LPAREN".parse::<TokenKind>().unwrap(), TokenKind::LeftParen);
//! assert_eq!(TokenKind::from_lexeme('|'), Some(TokenKind::AbsoluteValue));
//! ```
//!
//! ## Check a header
//!
//! ```
//! use calc_tokens::{check_header, render_header};
//!
//! check_header(&render_header()).unwrap();
//! assert!(check_header("enum { ID = 300 };").is_err());
//! ```

#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod verify;

pub use formatter::render_header;
pub use lexer::{HeaderToken, HeaderTokenKind, LexError, LexErrorKind, tokenize};
pub use parser::{Declaration, ParseError, ParseErrorKind, parse};
pub use token::{
    Band, FIRST_GRAMMAR_CODE, FIRST_SENTINEL_CODE, LookupError, Span, TokenKind, lookup,
};
pub use verify::{Mismatch, verify};

/// Unified error type covering lookups, header lexing and parsing,
/// and disagreement with the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A code, name, or lexeme that names no token kind.
    #[error("{0}")]
    Lookup(#[from] LookupError),
    /// A header lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A header parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// The header parsed but disagrees with the registry.
    #[error("{}", describe_mismatches(.0))]
    Disagreement(Vec<Mismatch>),
}

fn describe_mismatches(mismatches: &[Mismatch]) -> String {
    let details: Vec<String> = mismatches.iter().map(ToString::to_string).collect();
    format!(
        "header disagrees with registry ({} mismatch(es)): {}",
        mismatches.len(),
        details.join("; ")
    )
}

/// Tokenize and parse a header's `enum` in one step.
pub fn parse_header(input: &str) -> Result<Vec<Declaration>, Error> {
    let tokens = tokenize(input)?;
    Ok(parse(&tokens)?)
}

/// Parse a header and require it to agree with the registry.
///
/// Returns the declarations on success so callers can report on them.
pub fn check_header(input: &str) -> Result<Vec<Declaration>, Error> {
    let declarations = parse_header(input)?;
    let mismatches = verify(&declarations);
    if mismatches.is_empty() {
        Ok(declarations)
    } else {
        Err(Error::Disagreement(mismatches))
    }
}
