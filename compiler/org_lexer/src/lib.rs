//! Lossless tokenizer for lightweight plain-text markup.
//!
//! Turns a document into a flat stream of [`Item`]s: words, whitespace runs,
//! newlines, and the reserved markup punctuation `* # + / = ~ - _ : [ ] |`.
//! The stream carries no interpretation. Deciding that `***` at line start is
//! a level-3 header, or that `[[...]]` is a link, belongs to the parser that
//! consumes it.
//!
//! ```
//! use org_lexer::{ItemKind, Tokenizer};
//!
//! let kinds: Vec<_> = Tokenizer::new("** foo\n").map(|item| item.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         ItemKind::Asterisk,
//!         ItemKind::Asterisk,
//!         ItemKind::Space,
//!         ItemKind::Word,
//!         ItemKind::Newline,
//!         ItemKind::Eof,
//!     ]
//! );
//! ```
//!
//! Concatenating every item's `value` gives back the input byte for byte.
//!
//! # Pipeline
//!
//! [`SourceBuffer`] validates and borrows the input, [`Cursor`] walks its
//! bytes, and [`Tokenizer`] classifies one item per pull using the table in
//! [`tag`]. No stage allocates.

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, reason = "tests can panic")
)]

mod cursor;
mod error;
mod line_index;
mod source_buffer;
mod span;
pub mod tag;
mod tokenizer;

pub use cursor::Cursor;
pub use error::{tokenize, tokenize_bytes, TokenizeError};
pub use line_index::LineIndex;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use span::{Span, SpanError};
pub use tag::{ByteClass, ItemKind};
pub use tokenizer::{Item, Tokenizer};
