//! # verbfmt
//!
//! A format-string engine built around single-character verbs.
//!
//! A format string such as `val=%s!` is split into literal runs and verbs by a lexer configured
//! with a prefix character and a set of allowed verbs. Rendering walks the tokens and asks a
//! caller-supplied [Formatter](verb::Formatter) for the substitution of each verb.
//!
//! Modules:
//!
//!     - [verb]: tokens, lexer, builder and renderer (the core pipeline)
//!     - [fstring]: indentation-aware line writer for rendered output
//!     - [config]: verb tables loaded from YAML or JSON files
//!
//! ## Usage
//!
//! ```rust,ignore
//! use verbfmt::verb::Builder;
//!
//! let mut format_fn = Builder::new().with_verb('s').with_verb('d').build();
//! let out = format_fn.format("%d-%s", Some(&my_formatter))?;
//! ```

pub mod config;
pub mod fstring;
pub mod verb;
