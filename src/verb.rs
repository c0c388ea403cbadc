//! Verb-processing pipeline
//!
//!     A format string is made of literal text and verbs. A verb is a single character that
//!     follows the prefix character (`%` unless configured otherwise), so with the verbs `s`
//!     and `d` registered, `"%d-%s"` holds two verbs separated by the literal `-`.
//!
//! Pipeline
//!
//!     Builder -> FormatFn -> Lexer -> [Token] -> apply -> String
//!
//!     - [Builder](builder::Builder) collects the prefix and the allowed verbs.
//!     - [FormatFn](builder::FormatFn) is the compiled, reusable render function. It owns one
//!       [Lexer](lexing::Lexer) and resets it after every call.
//!     - [apply](formatter::apply) concatenates literal tokens and asks a
//!       [Formatter](formatter::Formatter) for every verb.
//!
//! Escaping
//!
//!     A doubled prefix at the very end of the input renders as one prefix character, so
//!     `"100%%"` becomes `"100%"`. A doubled prefix anywhere else is read as the prefix
//!     followed by the verb `%`, which is never allowed, and lexing fails.

pub mod builder;
pub mod error;
pub mod formatter;
pub mod lexing;
pub mod token;

pub use builder::{Builder, FormatFn, DEFAULT_PREFIX};
pub use error::Error;
pub use formatter::{apply, FormatError, Formatter};
pub use lexing::Lexer;
pub use token::Token;
