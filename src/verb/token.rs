//! Token types produced by the verb lexer

use std::fmt;

/// A single unit of a lexed format string
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum Token {
    /// A non-empty run of literal characters, copied verbatim to the output
    Literal(String),
    /// A verb character (without its prefix), substituted by a formatter
    Verb(char),
}

impl Token {
    pub fn is_verb(&self) -> bool {
        matches!(self, Token::Verb(_))
    }

    /// The verb character, if this is a verb token
    pub fn verb(&self) -> Option<char> {
        match self {
            Token::Verb(c) => Some(*c),
            Token::Literal(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(text) => write!(f, "literal({text:?})"),
            Token::Verb(c) => write!(f, "verb({c:?})"),
        }
    }
}
