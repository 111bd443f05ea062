//! Lexer implementation for the formula notation
//!
//! The lexer is a character cursor over a single input line. Each call to
//! [`Lexer::next_token`] skips whitespace, then tries the lexical rules
//! in a fixed priority order: end of input, the `true`/`false` keywords,
//! parentheses, backslash operators, propositions, and finally a
//! one-character invalid fallback.
//!
//! Keyword and operator matching is length-exact with no boundary test:
//! `true123` lexes as a `True` token followed by a proposition `123`.
//! Propositions start with a digit, so the keyword priority cannot shadow
//! one; the order is kept anyway in case the notation ever grows
//! letter-initial atoms.

use super::tokens::{Token, TokenKind};

/// Operator spellings, tried in order when a backslash is at the cursor.
/// Matches are exact-sequence, so `\leftrightarrow` is never clipped to a
/// prefix even though it contains `\rightarrow` as a substring.
const OPERATORS: &[(&str, TokenKind)] = &[
    ("\\neg", TokenKind::Neg),
    ("\\wedge", TokenKind::Wedge),
    ("\\vee", TokenKind::Vee),
    ("\\rightarrow", TokenKind::RightArrow),
    ("\\leftrightarrow", TokenKind::LeftRightArrow),
];

/// A cursor-based lexer over one line of input.
///
/// The cursor position only ever moves forward; once the end of the input
/// is reached, every further call yields the end-of-input token.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            input: source.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_char(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    /// If `sequence` starts at the cursor, consume it and return true.
    /// The cursor does not move on a failed match.
    fn match_sequence(&mut self, sequence: &str) -> bool {
        let chars: Vec<char> = sequence.chars().collect();
        let end = self.position + chars.len();
        if end <= self.input.len() && self.input[self.position..end] == chars[..] {
            self.position = end;
            true
        } else {
            false
        }
    }

    /// Produce the next token, advancing the cursor past it.
    ///
    /// This never fails: unrecognized text becomes an `Invalid` token and
    /// the decision to reject is deferred to the parser.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let ch = match self.current_char() {
            Some(ch) => ch,
            None => return Token::end_of_input(),
        };

        if self.match_sequence("true") {
            return Token::new(TokenKind::True, "true");
        }
        if self.match_sequence("false") {
            return Token::new(TokenKind::False, "false");
        }

        if ch == '(' {
            self.advance();
            return Token::new(TokenKind::OpenParen, "(");
        }
        if ch == ')' {
            self.advance();
            return Token::new(TokenKind::CloseParen, ")");
        }

        if ch == '\\' {
            for (spelling, kind) in OPERATORS {
                if self.match_sequence(spelling) {
                    return Token::new(*kind, *spelling);
                }
            }
            return self.recover_invalid_operator();
        }

        if ch.is_ascii_digit() {
            return self.proposition();
        }

        self.advance();
        Token::new(TokenKind::Invalid, ch)
    }

    /// Greedy recovery after a backslash that matches no operator: consume
    /// everything up to whitespace, a parenthesis, or end of input, and
    /// capture it (backslash included) as a single invalid lexeme.
    fn recover_invalid_operator(&mut self) -> Token {
        let start = self.position;
        while let Some(c) = self.current_char() {
            if c.is_whitespace() || c == '(' || c == ')' {
                break;
            }
            self.advance();
        }
        let lexeme: String = self.input[start..self.position].iter().collect();
        Token::new(TokenKind::Invalid, lexeme)
    }

    /// Consume a proposition: one digit, then a run of digits or lowercase
    /// letters. The caller has already checked the leading digit.
    fn proposition(&mut self) -> Token {
        let start = self.position;
        self.advance();
        while matches!(self.current_char(), Some(c) if c.is_ascii_digit() || c.is_ascii_lowercase())
        {
            self.advance();
        }
        let lexeme: String = self.input[start..self.position].iter().collect();

        // The consumption rule above already guarantees the shape; the
        // check guards against the two ever drifting apart.
        if is_proposition_lexeme(&lexeme) {
            Token::new(TokenKind::Proposition, lexeme)
        } else {
            Token::new(TokenKind::Invalid, lexeme)
        }
    }
}

/// Shape check for proposition lexemes: `[0-9][0-9a-z]*`.
fn is_proposition_lexeme(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_digit())
        && chars.all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
}
