//! Indentation-aware line writer
//!
//!     A [Traverser] wraps any [std::io::Write] sink and writes whole lines to it, indenting
//!     each non-empty line by three spaces per nesting level. Nesting is expressed with
//!     [Traverser::indent_by], which hands out a traverser over the same sink:
//!
//!     ```rust,ignore
//!     let mut trav = Traverser::new(Vec::new());
//!     trav.write_line("root")?;
//!     trav.indent_by(1).write_line("child")?;
//!     // "root\n   child\n"
//!     ```
//!
//!     Rendered format strings are one typical input; the writer never looks inside them.

mod buffer;
mod traverser;

pub use buffer::{Buffer, WriteError};
pub use traverser::{FStringer, Traverser, INDENT};
