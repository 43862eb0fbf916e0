//! Renders the registry as a C header for flex/yacc-style tooling.

use crate::token::TokenKind;

/// Header groups, separated by blank lines in the rendered output.
const GROUPS: [&[TokenKind]; 4] = [
    &[TokenKind::Illegal, TokenKind::EndOfLine],
    &[TokenKind::Identifier, TokenKind::Number],
    &[
        TokenKind::Add,
        TokenKind::Subtract,
        TokenKind::Multiply,
        TokenKind::Divide,
        TokenKind::AbsoluteValue,
    ],
    &[
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::Assign,
    ],
];

/// Render every token kind as an anonymous C `enum`.
///
/// Uses tab indentation and trails operator and punctuation entries
/// with a `// <lexeme>` comment.
#[must_use]
pub fn render_header() -> String {
    let mut out = String::new();
    out.push_str("// Calculator token codes shared by the lexer and the parser.\n");
    out.push_str("// Generated by calctok; do not edit.\n");
    out.push('\n');
    out.push_str("enum {\n");

    for (i, group) in GROUPS.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for kind in *group {
            format_entry(&mut out, *kind);
        }
    }

    out.push_str("};\n");
    out
}

fn format_entry(out: &mut String, kind: TokenKind) {
    out.push('\t');
    out.push_str(kind.name());
    out.push_str(" = ");
    out.push_str(&kind.code().to_string());
    out.push(',');
    if let Some(lexeme) = kind.lexeme() {
        out.push_str(" // ");
        out.push_str(lexeme);
    }
    out.push('\n');
}
