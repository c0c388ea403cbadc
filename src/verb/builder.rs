//! Builder for render functions
//!
//!     [Builder] collects a prefix and a set of allowed verbs. [Builder::build] compiles them
//!     into a [FormatFn], which owns its own lexer and can render any number of format strings.
//!     The two are separate types so a compiled function can't be reconfigured.
//!
//!     ```rust,ignore
//!     let mut format_fn = Builder::new().with_prefix('$').with_verb('n').build();
//!     let out = format_fn.format("count: $n", Some(&counter))?;
//!     ```

use std::ops::{Deref, DerefMut};

use crate::verb::error::Error;
use crate::verb::formatter::{apply, Formatter};
use crate::verb::lexing::Lexer;
use crate::verb::token::Token;

/// Prefix used when none is set
pub const DEFAULT_PREFIX: char = '%';

/// Accumulates the configuration of a render function
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Builder {
    prefix: Option<char>,
    allowed_verbs: Vec<char>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix. The last call wins; `'\0'` unsets it.
    pub fn set_prefix(&mut self, prefix: char) {
        self.prefix = (prefix != '\0').then_some(prefix);
    }

    /// Allow `verb`. Registering a verb twice has no effect.
    pub fn register(&mut self, verb: char) {
        if let Err(pos) = self.allowed_verbs.binary_search(&verb) {
            self.allowed_verbs.insert(pos, verb);
        }
    }

    pub fn with_prefix(mut self, prefix: char) -> Self {
        self.set_prefix(prefix);
        self
    }

    pub fn with_verb(mut self, verb: char) -> Self {
        self.register(verb);
        self
    }

    pub fn with_verbs(mut self, verbs: impl IntoIterator<Item = char>) -> Self {
        for verb in verbs {
            self.register(verb);
        }
        self
    }

    /// The prefix the compiled function will use
    pub fn effective_prefix(&self) -> char {
        self.prefix.unwrap_or(DEFAULT_PREFIX)
    }

    /// Registered verbs, sorted
    pub fn verbs(&self) -> &[char] {
        &self.allowed_verbs
    }

    /// Compile the current configuration.
    ///
    /// The prefix is dropped from the verb set, since a doubled prefix already has its own
    /// meaning. The builder is left untouched and can keep being configured.
    pub fn build(&self) -> FormatFn {
        let prefix = self.effective_prefix();
        let lexer = Lexer::new(prefix, self.allowed_verbs.iter().copied());

        tracing::debug!(
            %prefix,
            verbs = %lexer.allowed_verbs().iter().collect::<String>(),
            "compiled format function"
        );

        FormatFn { lexer }
    }

    /// Clear the prefix and all verbs.
    pub fn reset(&mut self) {
        self.prefix = None;
        self.allowed_verbs.clear();
    }
}

/// A compiled, reusable render function
///
/// Rendering takes `&mut self` because the lexer is scratch state. Share one instance
/// behind a lock, or build one per user.
#[derive(Debug, Clone)]
pub struct FormatFn {
    lexer: Lexer,
}

impl FormatFn {
    pub fn prefix(&self) -> char {
        self.lexer.prefix()
    }

    pub fn verbs(&self) -> &[char] {
        self.lexer.allowed_verbs()
    }

    /// Render `format`, asking `data` for every verb.
    ///
    /// An empty format renders to an empty string without touching the lexer.
    pub fn format(&mut self, format: &str, data: Option<&dyn Formatter>) -> Result<String, Error> {
        if format.is_empty() {
            return Ok(String::new());
        }

        let mut lexer = ResetGuard::new(&mut self.lexer);
        lexer.set_input_stream(format);
        lexer.lex()?;

        let rendered = apply(lexer.tokens(), data);
        if let Err(err) = &rendered {
            tracing::debug!(%err, partial = err.partial(), "render failed");
        }

        rendered
    }

    /// Lex `format` and return its tokens.
    pub fn tokenize(&mut self, format: &str) -> Result<Vec<Token>, Error> {
        if format.is_empty() {
            return Ok(Vec::new());
        }

        let mut lexer = ResetGuard::new(&mut self.lexer);
        lexer.set_input_stream(format);
        lexer.lex()?;

        Ok(lexer.tokens().to_vec())
    }
}

/// Resets the borrowed lexer when dropped, whatever the outcome of the call
struct ResetGuard<'a> {
    lexer: &'a mut Lexer,
}

impl<'a> ResetGuard<'a> {
    fn new(lexer: &'a mut Lexer) -> Self {
        ResetGuard { lexer }
    }
}

impl Deref for ResetGuard<'_> {
    type Target = Lexer;

    fn deref(&self) -> &Lexer {
        self.lexer
    }
}

impl DerefMut for ResetGuard<'_> {
    fn deref_mut(&mut self) -> &mut Lexer {
        self.lexer
    }
}

impl Drop for ResetGuard<'_> {
    fn drop(&mut self) {
        self.lexer.reset();
    }
}
