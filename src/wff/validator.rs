//! Two-valued validation API
//!
//! The only interface the surrounding I/O layer consumes: one expression
//! line in, one [`Verdict`] out. Everything the lexer or parser can
//! report is folded into the two verdict values here; no error detail
//! crosses this boundary.

use std::fmt;

use serde::Serialize;

use crate::wff::lexer::Lexer;
use crate::wff::parser::Parser;

/// The verdict for a single expression line.
///
/// Serializes (and displays) as the fixed verdict strings `valida` and
/// `invalida`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "valida")]
    Valid,
    #[serde(rename = "invalida")]
    Invalid,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Valid => "valida",
            Verdict::Invalid => "invalida",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a single expression line.
///
/// Total over arbitrary input: a fresh lexer/parser pair is built for
/// this line, and any structural failure collapses to
/// [`Verdict::Invalid`]. No state survives between calls, so validating
/// the same line twice always yields the same verdict.
pub fn validate(line: &str) -> Verdict {
    match Parser::new(Lexer::new(line)).parse() {
        Ok(()) => Verdict::Valid,
        Err(_) => Verdict::Invalid,
    }
}
