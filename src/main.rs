//! CLI tool to list calculator token codes and check C headers against them.

use std::fs;
use std::process::ExitCode;

use calc_tokens::TokenKind;

fn usage() {
    eprintln!("Usage: calctok <command> [args...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  list            Print every token kind and its code");
    eprintln!("  header          Print the registry as a C header");
    eprintln!("  check FILE...   Check C header(s) against the registry");
    eprintln!("  lookup KEY...   Resolve a code, name, or lexeme");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  calctok header > tok.h");
    eprintln!("  calctok check tok.h");
    eprintln!("  calctok lookup 260 LPAREN '|'");
}

fn row(kind: TokenKind) -> String {
    let mut line = format!("{:>5} {:<7} {}", kind.code(), kind.name(), kind.variant_name());
    if let Some(lexeme) = kind.lexeme() {
        line.push(' ');
        line.push_str(lexeme);
    }
    line
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        usage();
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let operands = &args[2..];

    match command {
        "list" => {
            for kind in TokenKind::ALL {
                println!("{}", row(kind));
            }
            ExitCode::SUCCESS
        }
        "header" => {
            print!("{}", calc_tokens::render_header());
            ExitCode::SUCCESS
        }
        "check" => {
            if operands.is_empty() {
                eprintln!("Error: no files specified");
                return ExitCode::from(2);
            }
            check_files(operands)
        }
        "lookup" => {
            if operands.is_empty() {
                eprintln!("Error: no keys specified");
                return ExitCode::from(2);
            }
            lookup_keys(operands)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            ExitCode::from(2)
        }
    }
}

fn check_files(files: &[String]) -> ExitCode {
    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match calc_tokens::check_header(&content) {
            Ok(declarations) => {
                eprintln!("{path}: ok ({} token(s))", declarations.len());
            }
            Err(calc_tokens::Error::Disagreement(mismatches)) => {
                for mismatch in mismatches {
                    eprintln!("{path}: {mismatch}");
                }
                had_error = true;
            }
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn lookup_keys(keys: &[String]) -> ExitCode {
    let mut had_error = false;

    for key in keys {
        match calc_tokens::lookup(key) {
            Ok(kind) => println!("{}", row(kind)),
            Err(e) => {
                eprintln!("{key}: {e}");
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
