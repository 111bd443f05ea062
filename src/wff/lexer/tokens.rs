//! Token definitions for the formula notation
//!
//! This module defines all the tokens that can be produced by the formula
//! lexer. The set is closed: every piece of input text, valid or not,
//! maps to exactly one of these kinds.

/// All token classes the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// The boolean constant `true`
    True,
    /// The boolean constant `false`
    False,
    /// An atomic proposition: a digit followed by digits or lowercase letters
    Proposition,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// The negation operator `\neg`
    Neg,
    /// The conjunction operator `\wedge`
    Wedge,
    /// The disjunction operator `\vee`
    Vee,
    /// The implication operator `\rightarrow`
    RightArrow,
    /// The biconditional operator `\leftrightarrow`
    LeftRightArrow,
    /// End of the input line; produced indefinitely once reached
    EndOfInput,
    /// Text that matches no lexical rule
    Invalid,
}

impl TokenKind {
    /// Check if this token is a boolean constant
    pub fn is_constant(&self) -> bool {
        matches!(self, TokenKind::True | TokenKind::False)
    }

    /// Check if this token is one of the four binary operators
    pub fn is_binary_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Wedge | TokenKind::Vee | TokenKind::RightArrow | TokenKind::LeftRightArrow
        )
    }
}

/// A classified lexical unit together with the exact source text that
/// produced it.
///
/// The lexeme is always the contiguous substring consumed between the
/// cursor positions before and after recognition. Only the end-of-input
/// token carries no lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Option<String>,
}

impl Token {
    /// Create a token of `kind` with the consumed source text
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: Some(lexeme.into()),
        }
    }

    /// Create the end-of-input marker token
    pub fn end_of_input() -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            lexeme: None,
        }
    }
}
