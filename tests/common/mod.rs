#![allow(dead_code)]

use calc_tokens::{Mismatch, parse_header, verify};

/// Header shipped with the flex/goyacc calculator.
pub const TOK_H: &str = "\
// Copyright 2019 <chaishushan{AT}gmail.com>. All rights reserved.
// Use of this source code is governed by a Apache
// license that can be found in the LICENSE file.

enum {
\tILLEGAL = 10000,
\tEOL = 10001,

\tID = 258,
\tNUMBER = 259,

\tADD = 260, // +
\tSUB = 261, // -
\tMUL = 262, // *
\tDIV = 263, // /
\tABS = 264, // |

\tLPAREN = 265, // (
\tRPAREN = 266, // )
\tASSIGN = 267, // =
};
";

/// Helper: parse a header and return its mismatches against the registry.
pub fn mismatches(input: &str) -> Vec<Mismatch> {
    let declarations = parse_header(input)
        .unwrap_or_else(|e| panic!("failed to parse header: {e}\n--- input ---\n{input}"));
    verify(&declarations)
}
