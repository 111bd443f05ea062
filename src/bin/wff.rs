//! Command-line interface for wff
//! This binary checks batches of propositional logic expressions for
//! syntactic validity and prints one verdict per expression.
//!
//! Usage:
//!   wff check `<path>` [--format `<format>`]  - Validate every expression in a file
//!   wff tokens `<expression>`               - Print the token stream for one expression

use clap::{Arg, Command};
use std::path::Path;

use wff::wff::lexer::tokenize;
use wff::wff::processor::{process_file, serialize_verdicts, OutputFormat};

fn main() {
    let matches = Command::new("wff")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A syntax checker for LaTeX-style propositional logic formulas")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("check")
                .about("Validate every expression in an input file")
                .arg(
                    Arg::new("path")
                        .help("Path to the expression file (first line is the expression count)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream for a single expression")
                .arg(
                    Arg::new("expression")
                        .help("The expression to tokenize")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            let format = check_matches.get_one::<String>("format").unwrap();
            handle_check_command(path, format);
        }
        Some(("tokens", tokens_matches)) => {
            let expression = tokens_matches.get_one::<String>("expression").unwrap();
            handle_tokens_command(expression);
        }
        _ => unreachable!(),
    }
}

/// Handle the check command
fn handle_check_command(path: &str, format: &str) {
    let format = OutputFormat::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let verdicts = process_file(Path::new(path)).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = serialize_verdicts(&verdicts, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the tokens command
fn handle_tokens_command(expression: &str) {
    for token in tokenize(expression) {
        match token.lexeme {
            Some(lexeme) => println!("{:?} {:?}", token.kind, lexeme),
            None => println!("{:?}", token.kind),
        }
    }
}
