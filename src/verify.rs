//! Cross-checks header declarations against the registry.

use std::fmt;

use crate::parser::Declaration;
use crate::token::TokenKind;

/// A disagreement between a header and the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// Name the registry does not define.
    UnknownName { name: String, code: i32 },
    /// Registered name declared with a different code.
    WrongCode { kind: TokenKind, found: i32 },
    /// Registered name declared more than once.
    DuplicateName { name: String },
    /// Registered name the header never declares.
    Missing(TokenKind),
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownName { name, code } => {
                write!(f, "unknown token {name} = {code}")
            }
            Self::WrongCode { kind, found } => {
                write!(f, "{kind} = {found}, expected {}", kind.code())
            }
            Self::DuplicateName { name } => write!(f, "{name} declared more than once"),
            Self::Missing(kind) => write!(f, "{kind} not declared"),
        }
    }
}

/// Compare header declarations with the registry.
///
/// Returns an empty list when every registered name is declared exactly
/// once with its registered code and nothing else is declared.
/// Mismatches follow header order, then missing kinds in registry order.
#[must_use]
pub fn verify(declarations: &[Declaration]) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    let mut seen: Vec<TokenKind> = Vec::with_capacity(TokenKind::ALL.len());

    for decl in declarations {
        let Some(kind) = TokenKind::from_name(&decl.name) else {
            mismatches.push(Mismatch::UnknownName {
                name: decl.name.clone(),
                code: decl.code,
            });
            continue;
        };

        if seen.contains(&kind) {
            mismatches.push(Mismatch::DuplicateName {
                name: decl.name.clone(),
            });
            continue;
        }
        seen.push(kind);

        if kind.code() != decl.code {
            mismatches.push(Mismatch::WrongCode {
                kind,
                found: decl.code,
            });
        }
    }

    mismatches.extend(
        TokenKind::ALL
            .into_iter()
            .filter(|kind| !seen.contains(kind))
            .map(Mismatch::Missing),
    );

    mismatches
}
