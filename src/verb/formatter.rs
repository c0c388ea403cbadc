//! Formatter contract and token rendering

use crate::verb::error::Error;
use crate::verb::token::Token;

/// Error returned by a [Formatter]
pub type FormatError = Box<dyn std::error::Error + Send + Sync>;

/// Source of substitutions for verbs
///
/// Implementors decide what each verb means, e.g. mapping `s` to a name field and `d` to a
/// counter.
pub trait Formatter {
    /// Return the substitution for `verb`.
    fn format(&self, verb: char) -> Result<String, FormatError>;
}

impl<F: Formatter + ?Sized> Formatter for &F {
    fn format(&self, verb: char) -> Result<String, FormatError> {
        (**self).format(verb)
    }
}

/// Render `tokens` in order.
///
/// Without a formatter only literal tokens can be rendered and the first verb fails. With a
/// formatter every verb is substituted, and the first formatter failure stops rendering. In
/// both failure cases the error carries the output rendered so far.
pub fn apply(tokens: &[Token], data: Option<&dyn Formatter>) -> Result<String, Error> {
    let mut out = String::new();

    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Verb(verb) => {
                let Some(formatter) = data else {
                    return Err(Error::NoFormatter {
                        verb: *verb,
                        partial: out,
                    });
                };

                match formatter.format(*verb) {
                    Ok(text) => out.push_str(&text),
                    Err(source) => {
                        return Err(Error::Format {
                            verb: *verb,
                            partial: out,
                            source,
                        })
                    }
                }
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Fields;

    impl Formatter for Fields {
        fn format(&self, verb: char) -> Result<String, FormatError> {
            match verb {
                's' => Ok("X".to_string()),
                'd' => Ok("7".to_string()),
                other => Err(format!("no field for {other}").into()),
            }
        }
    }

    /// Records every verb it is asked for
    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<char>>,
    }

    impl Formatter for Recorder {
        fn format(&self, verb: char) -> Result<String, FormatError> {
            self.seen.borrow_mut().push(verb);
            Ok(String::new())
        }
    }

    fn lit(s: &str) -> Token {
        Token::Literal(s.to_string())
    }

    #[test]
    fn test_apply_empty() {
        assert_eq!(apply(&[], None).unwrap(), "");
        assert_eq!(apply(&[], Some(&Fields)).unwrap(), "");
    }

    #[test]
    fn test_apply_literals_without_formatter() {
        let tokens = vec![lit("a"), lit("%"), lit("b")];
        assert_eq!(apply(&tokens, None).unwrap(), "a%b");
    }

    #[test]
    fn test_apply_verb_without_formatter_fails_with_partial() {
        let tokens = vec![lit("val="), Token::Verb('s'), lit("!")];
        let err = apply(&tokens, None).unwrap_err();

        assert!(matches!(err, Error::NoFormatter { verb: 's', .. }));
        assert_eq!(err.partial(), Some("val="));
    }

    #[test]
    fn test_apply_substitutes_verbs() {
        let tokens = vec![Token::Verb('d'), lit("-"), Token::Verb('s')];
        assert_eq!(apply(&tokens, Some(&Fields)).unwrap(), "7-X");
    }

    #[test]
    fn test_apply_stops_at_first_formatter_failure() {
        let tokens = vec![lit("a"), Token::Verb('s'), Token::Verb('q'), Token::Verb('d')];
        let err = apply(&tokens, Some(&Fields)).unwrap_err();

        match &err {
            Error::Format {
                verb,
                partial,
                source,
            } => {
                assert_eq!(*verb, 'q');
                assert_eq!(partial, "aX");
                assert_eq!(source.to_string(), "no field for q");
            }
            other => panic!("expected a format error, got {other:?}"),
        }

        // The caller's message comes through unchanged
        assert_eq!(err.to_string(), "no field for q");
    }

    #[test]
    fn test_apply_calls_formatter_in_token_order() {
        let recorder = Recorder::default();
        let tokens = vec![Token::Verb('b'), lit("x"), Token::Verb('a'), Token::Verb('b')];
        apply(&tokens, Some(&recorder)).unwrap();

        assert_eq!(*recorder.seen.borrow(), vec!['b', 'a', 'b']);
    }

    #[test]
    fn test_formatter_by_reference() {
        let fields = &Fields;
        let by_ref: &dyn Formatter = &fields;
        assert_eq!(by_ref.format('s').unwrap(), "X");
    }
}
