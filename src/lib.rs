//! # wff
//!
//! A syntax validator for propositional logic formulas written in a
//! parenthesized, LaTeX-operator prefix notation.
//!
//! The crate is organized as a small lexing/parsing pipeline: token
//! definitions and the cursor-based lexer live in [`wff::lexer`], the
//! recursive-descent grammar check in [`wff::parser`], the two-valued
//! verdict API in [`wff::validator`], and the batch file-processing API
//! in [`wff::processor`].

pub mod wff;
