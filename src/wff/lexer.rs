//! Lexer module for the formula notation
//!
//! This module contains the tokenization logic for the parenthesized,
//! LaTeX-operator formula notation, including token definitions and the
//! lexer implementation.
//!
//! The lexer is a hand-rolled finite-state scan over a character cursor.
//! No regex engine is involved: keyword and operator spellings are
//! recognized by exact sequence comparison at the cursor, and proposition
//! lexemes by character-class predicates during consumption.
//!
//! Lexing never fails. Text that matches no rule is captured as an
//! [`Invalid`](tokens::TokenKind::Invalid) token and left for the parser
//! to reject structurally; this keeps the whole error surface in one
//! place instead of splitting it between two stages.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::Lexer;
pub use tokens::{Token, TokenKind};

/// Drains a lexer over `source` into a vector, up to (not including) the
/// end-of-input token. Used by the token-dump CLI subcommand and tests;
/// the parser pulls tokens lazily and never goes through this.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::EndOfInput {
            break;
        }
        tokens.push(token);
    }
    tokens
}
