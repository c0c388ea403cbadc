//! Format string lexer
//!
//!     The lexer turns a format string into a flat sequence of [Token]s. It is configured once
//!     with a prefix character and a sorted set of allowed verbs, and can then be fed any
//!     number of inputs, one at a time:
//!
//!         set_input_stream -> lex -> tokens -> reset
//!
//!     Scanning is a single pass with one character of lookahead. A literal run stops right
//!     before the next prefix character, which is left in the cursor to start the next token.
//!
//!     The verb set is searched with a binary search, so it must stay sorted and free of
//!     duplicates. [Lexer::new] takes care of that for any input.

use crate::verb::error::Error;
use crate::verb::token::Token;

/// Peekable cursor over an owned copy of the input
#[derive(Debug, Clone)]
struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn new(input: &str) -> Self {
        Cursor {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

/// Lexer for format strings
#[derive(Debug, Clone)]
pub struct Lexer {
    prefix: char,
    allowed_verbs: Vec<char>,
    input: Option<Cursor>,
    tokens: Vec<Token>,
}

impl Lexer {
    /// Create a lexer for `prefix` that accepts the given verbs.
    ///
    /// The verbs are sorted and deduplicated, and the prefix is removed from them.
    pub fn new(prefix: char, allowed_verbs: impl IntoIterator<Item = char>) -> Self {
        let mut allowed_verbs: Vec<char> = allowed_verbs.into_iter().collect();
        allowed_verbs.sort_unstable();
        allowed_verbs.dedup();
        allowed_verbs.retain(|&v| v != prefix);

        Lexer {
            prefix,
            allowed_verbs,
            input: None,
            tokens: Vec::new(),
        }
    }

    pub fn prefix(&self) -> char {
        self.prefix
    }

    pub fn allowed_verbs(&self) -> &[char] {
        &self.allowed_verbs
    }

    pub fn is_allowed(&self, verb: char) -> bool {
        self.allowed_verbs.binary_search(&verb).is_ok()
    }

    /// Set the text to lex. Replaces any previous input.
    pub fn set_input_stream(&mut self, input: &str) {
        self.input = Some(Cursor::new(input));
    }

    /// Lex the whole input, appending to the token list.
    ///
    /// Does nothing if no input was set. Call [Lexer::reset] afterwards so the tokens of this
    /// input don't leak into the next one.
    pub fn lex(&mut self) -> Result<(), Error> {
        let Some(mut cursor) = self.input.take() else {
            return Ok(());
        };

        let result = self.lex_all(&mut cursor);
        self.input = Some(cursor);
        result
    }

    /// Tokens produced so far
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Clear the tokens and drop the input so the lexer can be reused.
    pub fn reset(&mut self) {
        self.tokens.clear();
        self.input = None;
    }

    fn lex_all(&mut self, cursor: &mut Cursor) -> Result<(), Error> {
        while let Some(token) = self.lex_one(cursor)? {
            tracing::trace!(%token, "lexed token");
            self.tokens.push(token);
        }

        Ok(())
    }

    /// Scan one token. `Ok(None)` means the input is exhausted.
    fn lex_one(&self, cursor: &mut Cursor) -> Result<Option<Token>, Error> {
        let Some(c) = cursor.bump() else {
            return Ok(None);
        };

        if c == self.prefix {
            return self.lex_verb(cursor);
        }

        let mut run = String::from(c);
        while let Some(next) = cursor.peek() {
            if next == self.prefix {
                break;
            }
            run.push(next);
            cursor.bump();
        }

        Ok(Some(Token::Literal(run)))
    }

    /// Scan what follows a prefix character.
    fn lex_verb(&self, cursor: &mut Cursor) -> Result<Option<Token>, Error> {
        // A lone prefix at the end of the input ends scanning without a token.
        let Some(next) = cursor.bump() else {
            return Ok(None);
        };

        if next == self.prefix && cursor.is_at_end() {
            return Ok(Some(Token::Literal(self.prefix.to_string())));
        }

        if !self.is_allowed(next) {
            return Err(Error::UnsupportedVerb {
                prefix: self.prefix,
                verb: next,
            });
        }

        Ok(Some(Token::Verb(next)))
    }
}
