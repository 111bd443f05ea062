//! Snapshot tests for the lexer over sample expressions
//!
//! Each snapshot records the full token stream (kind plus consumed
//! lexeme) for one expression, pinning down the tokenization of the
//! operator spellings and the invalid-lexeme recovery.

use insta::assert_snapshot;
use wff::wff::lexer::tokenize;

/// Render one line per token: the kind, then the lexeme in quotes.
fn dump(source: &str) -> String {
    tokenize(source)
        .iter()
        .map(|token| match &token.lexeme {
            Some(lexeme) => format!("{:?} {:?}", token.kind, lexeme),
            None => format!("{:?}", token.kind),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_nested_formula_tokenization() {
    assert_snapshot!(dump("(\\wedge (\\neg 1a) false)"), @r###"
    OpenParen "("
    Wedge "\\wedge"
    OpenParen "("
    Neg "\\neg"
    Proposition "1a"
    CloseParen ")"
    False "false"
    CloseParen ")"
    "###);
}

#[test]
fn test_all_operator_spellings() {
    assert_snapshot!(dump("\\neg \\wedge \\vee \\rightarrow \\leftrightarrow"), @r###"
    Neg "\\neg"
    Wedge "\\wedge"
    Vee "\\vee"
    RightArrow "\\rightarrow"
    LeftRightArrow "\\leftrightarrow"
    "###);
}

#[test]
fn test_invalid_operator_recovery() {
    assert_snapshot!(dump("\\foo true"), @r###"
    Invalid "\\foo"
    True "true"
    "###);
}

#[test]
fn test_proposition_against_parentheses() {
    assert_snapshot!(dump("12a(0)"), @r###"
    Proposition "12a"
    OpenParen "("
    Proposition "0"
    CloseParen ")"
    "###);
}
