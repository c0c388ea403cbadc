//! Errors raised while lexing or rendering a format string

use crate::verb::formatter::FormatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The lexer found `prefix + verb` where `verb` is not an allowed verb
    #[error("flag \"{prefix}{verb}\" is not supported")]
    UnsupportedVerb { prefix: char, verb: char },

    /// A verb token was rendered without a formatter
    #[error("verb \"{verb}\" is not supported")]
    NoFormatter { verb: char, partial: String },

    /// The formatter failed for a verb. Displays as the formatter's own error.
    #[error("{source}")]
    Format {
        verb: char,
        partial: String,
        #[source]
        source: FormatError,
    },
}

impl Error {
    /// Output rendered before the failure, if rendering had started.
    ///
    /// Partial output is never a complete rendering; it is only useful as context.
    pub fn partial(&self) -> Option<&str> {
        match self {
            Error::UnsupportedVerb { .. } => None,
            Error::NoFormatter { partial, .. } | Error::Format { partial, .. } => Some(partial),
        }
    }

    pub fn is_unsupported_verb(&self) -> bool {
        matches!(self, Error::UnsupportedVerb { .. } | Error::NoFormatter { .. })
    }
}
