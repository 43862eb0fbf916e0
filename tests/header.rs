//! Rendering, parsing, and verifying C token headers.

mod common;

use calc_tokens::{
    Error, LexErrorKind, LookupError, Mismatch, ParseErrorKind, TokenKind, check_header,
    parse_header, render_header,
};
use common::{TOK_H, mismatches};

// -----------------------------------------------------------
// Rendering.
// -----------------------------------------------------------

#[test]
fn rendered_header_verifies() {
    assert!(mismatches(&render_header()).is_empty());
}

#[test]
fn rendered_header_layout() {
    let output = render_header();
    assert!(output.starts_with("// "));
    assert!(output.contains("enum {\n\tILLEGAL = 10000,\n\tEOL = 10001,\n\n\tID = 258,"));
    assert!(output.contains("\tABS = 264, // |\n\n\tLPAREN = 265, // (\n"));
    assert!(output.ends_with("\tASSIGN = 267, // =\n};\n"));
}

#[test]
fn rendered_header_matches_shipped_entries() {
    // Same entries, in the same order, as the header the calculator ships.
    let rendered = parse_header(&render_header()).expect("parse rendered");
    let shipped = parse_header(TOK_H).expect("parse shipped");
    let pairs = |decls: &[calc_tokens::Declaration]| {
        decls
            .iter()
            .map(|d| (d.name.clone(), d.code))
            .collect::<Vec<_>>()
    };
    assert_eq!(pairs(&rendered), pairs(&shipped));
}

// -----------------------------------------------------------
// The shipped header.
// -----------------------------------------------------------

#[test]
fn shipped_header_checks_clean() {
    let declarations = check_header(TOK_H).expect("check");
    assert_eq!(declarations.len(), TokenKind::ALL.len());
    assert_eq!(declarations[0].name, "ILLEGAL");
    assert_eq!(declarations[0].span.line, 6);
    assert_eq!(declarations[0].span.column, 2);
}

// -----------------------------------------------------------
// Mismatches.
// -----------------------------------------------------------

#[test]
fn wrong_code_reported() {
    let header = TOK_H.replace("MUL = 262", "MUL = 42");
    assert_eq!(
        mismatches(&header),
        [Mismatch::WrongCode {
            kind: TokenKind::Multiply,
            found: 42
        }]
    );
}

#[test]
fn unknown_and_missing_reported_in_order() {
    let header = "enum { MOD = 268, ID = 258, NUMBER = 259, ID = 258 };";
    let found = mismatches(header);
    assert_eq!(
        found[..2],
        [
            Mismatch::UnknownName {
                name: "MOD".to_string(),
                code: 268
            },
            Mismatch::DuplicateName {
                name: "ID".to_string()
            },
        ]
    );
    let missing: Vec<TokenKind> = found[2..]
        .iter()
        .map(|m| match m {
            Mismatch::Missing(kind) => *kind,
            other => panic!("unexpected mismatch: {other}"),
        })
        .collect();
    assert_eq!(
        missing,
        [
            TokenKind::Illegal,
            TokenKind::EndOfLine,
            TokenKind::Add,
            TokenKind::Subtract,
            TokenKind::Multiply,
            TokenKind::Divide,
            TokenKind::AbsoluteValue,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::Assign,
        ]
    );
}

#[test]
fn implicit_numbering_can_match_registry() {
    let header = "enum { ID = 258, NUMBER, ADD, SUB, MUL, DIV, ABS, LPAREN, RPAREN, ASSIGN,\n\
                  ILLEGAL = 10000, EOL };";
    assert!(mismatches(header).is_empty());
}

#[test]
fn mismatch_messages() {
    assert_eq!(
        Mismatch::WrongCode {
            kind: TokenKind::Divide,
            found: 1
        }
        .to_string(),
        "DIV = 1, expected 263"
    );
    assert_eq!(
        Mismatch::Missing(TokenKind::EndOfLine).to_string(),
        "EOL not declared"
    );
}

// -----------------------------------------------------------
// Errors through the unified type.
// -----------------------------------------------------------

#[test]
fn disagreement_error() {
    let err = check_header("enum { ID = 300 };").expect_err("should fail");
    let Error::Disagreement(found) = &err else {
        panic!("expected disagreement, got {err:?}");
    };
    assert_eq!(
        found[0],
        Mismatch::WrongCode {
            kind: TokenKind::Identifier,
            found: 300
        }
    );
    let prefix = "header disagrees with registry (12 mismatch(es)): ID = 300, expected 258; ";
    assert!(err.to_string().starts_with(prefix));
}

#[test]
fn lex_error_surfaces() {
    let err = parse_header("enum { ID = 12ab };").expect_err("should fail");
    let Error::Lex(lex) = err else {
        panic!("expected lex error, got {err:?}");
    };
    assert_eq!(lex.kind, LexErrorKind::InvalidNumber("12ab".to_string()));
    assert_eq!(
        lex.to_string(),
        "invalid integer literal: 12ab at line 1, column 13"
    );
}

#[test]
fn non_ascii_outside_comment() {
    let err = parse_header("enum { É = 1 };").expect_err("should fail");
    assert!(matches!(
        err,
        Error::Lex(ref e) if e.kind == LexErrorKind::UnexpectedCharacter('É')
    ));
}

#[test]
fn parse_error_surfaces() {
    let err = parse_header("// nothing here\n").expect_err("should fail");
    assert!(matches!(
        err,
        Error::Parse(ref e) if e.kind == ParseErrorKind::MissingEnum
    ));
    assert_eq!(err.to_string(), "no enum declaration found at line 1, column 1");
}

#[test]
fn typedef_header_with_suffixes_checks_clean() {
    let header = TOK_H
        .replace("enum {", "typedef enum {")
        .replace("};", "} tok_t;")
        .replace("ID = 258", "ID = 258U")
        .replace("EOL = 10001", "EOL = 10001L");
    assert!(mismatches(&header).is_empty());
}

#[test]
fn lookup_error_converts() {
    let err = Error::from(LookupError::UnknownCode(7));
    assert_eq!(err.to_string(), "unknown token code: 7");
}
