//! Parser module for the formula notation
//!
//! A predictive recursive-descent parser over the lexer's token stream.
//! The grammar has a single nonterminal and is LL(1): one token of
//! lookahead always determines the applicable alternative, so there is no
//! backtracking and no local recovery anywhere.
//!
//! ```text
//! FORMULA := "true" | "false"
//!          | PROPOSITION
//!          | "(" "\neg" FORMULA ")"
//!          | "(" BINOP FORMULA FORMULA ")"
//! BINOP   := "\wedge" | "\vee" | "\rightarrow" | "\leftrightarrow"
//! ```
//!
//! The parser builds no tree; it only accepts or rejects. Rejection is a
//! tagged [`ParseError`] carrying the first mismatch, which unwinds
//! through every recursion level via `?`. Every recursive call consumes
//! at least one token before recursing again, so recursion depth is
//! bounded by the input length and parsing always terminates.

use std::fmt;

use crate::wff::lexer::{Lexer, Token, TokenKind};

/// The enumerable ways the parser can reject an input.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A required token was missing at the current position
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    /// An opening parenthesis was not followed by an operator
    ExpectedOperator(TokenKind),
    /// The current token cannot start a formula
    ExpectedFormula(TokenKind),
    /// Input remained after a complete formula
    TrailingTokens(TokenKind),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { expected, found } => {
                write!(f, "expected {:?}, found {:?}", expected, found)
            }
            ParseError::ExpectedOperator(found) => {
                write!(f, "expected an operator after '(', found {:?}", found)
            }
            ParseError::ExpectedFormula(found) => {
                write!(f, "expected a formula, found {:?}", found)
            }
            ParseError::TrailingTokens(found) => {
                write!(f, "trailing {:?} after a complete formula", found)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A recursive-descent parser holding exactly one buffered lookahead
/// token at all times. Created fresh per input line, together with its
/// lexer.
pub struct Parser {
    lexer: Lexer,
    current: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        Parser { lexer, current }
    }

    /// Parse one formula and require it to consume the entire input.
    pub fn parse(mut self) -> Result<(), ParseError> {
        self.formula()?;
        if self.current.kind != TokenKind::EndOfInput {
            return Err(ParseError::TrailingTokens(self.current.kind));
        }
        Ok(())
    }

    /// Consume the current token if it is of `expected` kind, pulling the
    /// next one from the lexer; otherwise fail without further scanning.
    fn eat(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        if self.current.kind == expected {
            self.current = self.lexer.next_token();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                expected,
                found: self.current.kind,
            })
        }
    }

    /// Derive one FORMULA, dispatching on the single lookahead token.
    fn formula(&mut self) -> Result<(), ParseError> {
        match self.current.kind {
            kind if kind.is_constant() => self.eat(kind),
            TokenKind::Proposition => self.eat(TokenKind::Proposition),
            TokenKind::OpenParen => {
                self.eat(TokenKind::OpenParen)?;
                match self.current.kind {
                    TokenKind::Neg => {
                        self.eat(TokenKind::Neg)?;
                        self.formula()?;
                        self.eat(TokenKind::CloseParen)
                    }
                    kind if kind.is_binary_operator() => {
                        self.eat(kind)?;
                        self.formula()?;
                        self.formula()?;
                        self.eat(TokenKind::CloseParen)
                    }
                    found => Err(ParseError::ExpectedOperator(found)),
                }
            }
            found => Err(ParseError::ExpectedFormula(found)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<(), ParseError> {
        Parser::new(Lexer::new(source)).parse()
    }

    #[test]
    fn test_accepts_constants() {
        assert_eq!(parse("true"), Ok(()));
        assert_eq!(parse("false"), Ok(()));
    }

    #[test]
    fn test_accepts_propositions() {
        assert_eq!(parse("1"), Ok(()));
        assert_eq!(parse("12a"), Ok(()));
    }

    #[test]
    fn test_accepts_negation() {
        assert_eq!(parse("(\\neg true)"), Ok(()));
        assert_eq!(parse("(\\neg (\\neg 1))"), Ok(()));
    }

    #[test]
    fn test_accepts_all_binary_operators() {
        assert_eq!(parse("(\\wedge true false)"), Ok(()));
        assert_eq!(parse("(\\vee 1 2)"), Ok(()));
        assert_eq!(parse("(\\rightarrow 1 false)"), Ok(()));
        assert_eq!(parse("(\\leftrightarrow true 2b)"), Ok(()));
    }

    #[test]
    fn test_accepts_nested_formulas() {
        assert_eq!(parse("(\\vee 1 (\\neg 2))"), Ok(()));
        assert_eq!(
            parse("(\\rightarrow true (\\leftrightarrow 1 false))"),
            Ok(())
        );
    }

    #[test]
    fn test_rejects_empty_input() {
        assert_eq!(
            parse(""),
            Err(ParseError::ExpectedFormula(TokenKind::EndOfInput))
        );
    }

    #[test]
    fn test_rejects_missing_second_operand() {
        assert_eq!(
            parse("(\\wedge true)"),
            Err(ParseError::ExpectedFormula(TokenKind::CloseParen))
        );
    }

    #[test]
    fn test_rejects_missing_close_paren() {
        assert_eq!(
            parse("(\\neg true"),
            Err(ParseError::UnexpectedToken {
                expected: TokenKind::CloseParen,
                found: TokenKind::EndOfInput,
            })
        );
    }

    #[test]
    fn test_rejects_missing_operator_after_open_paren() {
        assert_eq!(
            parse("(true)"),
            Err(ParseError::ExpectedOperator(TokenKind::True))
        );
    }

    #[test]
    fn test_rejects_trailing_tokens() {
        assert_eq!(
            parse("true false"),
            Err(ParseError::TrailingTokens(TokenKind::False))
        );
        assert_eq!(
            parse("(\\neg 1) )"),
            Err(ParseError::TrailingTokens(TokenKind::CloseParen))
        );
    }

    #[test]
    fn test_rejects_bare_operator() {
        assert_eq!(
            parse("\\neg true"),
            Err(ParseError::ExpectedFormula(TokenKind::Neg))
        );
    }

    #[test]
    fn test_rejects_extra_operand() {
        assert_eq!(
            parse("(\\wedge true false true)"),
            Err(ParseError::UnexpectedToken {
                expected: TokenKind::CloseParen,
                found: TokenKind::True,
            })
        );
    }

    #[test]
    fn test_rejects_invalid_tokens_structurally() {
        assert_eq!(
            parse("(\\wedge \\bad 1)"),
            Err(ParseError::ExpectedFormula(TokenKind::Invalid))
        );
        assert_eq!(parse("A"), Err(ParseError::ExpectedFormula(TokenKind::Invalid)));
    }
}
