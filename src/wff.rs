//! Core modules for the wff formula validator
//!
//! The pipeline runs in two stages: the [lexer](lexer) turns a line of
//! text into a stream of classified tokens, and the [parser](parser)
//! drives an LL(1) recursive descent over that stream. The
//! [validator](validator) wraps both behind a total, two-valued API,
//! and the [processor](processor) applies it to whole expression files.

pub mod lexer;
pub mod parser;
pub mod processor;
pub mod validator;
