//! Document-level failure for callers that collect a whole stream.
//!
//! The tokenizer itself never returns `Result`: malformed input is reported
//! in-band as a terminal [`ItemKind::Error`] item. [`tokenize_bytes`] is the
//! boundary where that item becomes a [`TokenizeError`] the caller can
//! propagate with `?`.

use thiserror::Error;

use crate::line_index::LineIndex;
use crate::source_buffer::{EncodingIssueKind, SourceBuffer};
use crate::span::Span;
use crate::tag::ItemKind;
use crate::tokenizer::{Item, Tokenizer};

/// Why a document could not be tokenized to the end.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("{} at line {line}, column {column} (bytes {span})", .kind.description())]
    InvalidEncoding {
        kind: EncodingIssueKind,
        span: Span,
        /// 1-based.
        line: u32,
        /// 1-based, in characters.
        column: u32,
    },
}

impl TokenizeError {
    pub fn span(&self) -> Span {
        match self {
            TokenizeError::InvalidEncoding { span, .. } => *span,
        }
    }
}

/// Tokenize valid text into a vector ending with the `Eof` item.
pub fn tokenize(source: &str) -> Vec<Item<'_>> {
    Tokenizer::new(source).collect()
}

/// Tokenize raw bytes, failing on malformed UTF-8.
///
/// On success the vector ends with the `Eof` item.
pub fn tokenize_bytes(source: &[u8]) -> Result<Vec<Item<'_>>, TokenizeError> {
    let buffer = SourceBuffer::from_bytes(source);
    let items: Vec<Item<'_>> = Tokenizer::from_buffer(buffer).collect();

    match buffer.encoding_issue() {
        None => Ok(items),
        Some(issue) => {
            debug_assert_eq!(items.last().map(|i| i.kind), Some(ItemKind::Error));
            let text = buffer.text();
            let (line, column) = LineIndex::build(text).line_col(text, issue.pos);
            Err(TokenizeError::InvalidEncoding {
                kind: issue.kind,
                span: issue.span(),
                line,
                column,
            })
        }
    }
}
