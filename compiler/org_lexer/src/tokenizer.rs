//! Pull-based tokenizer producing positioned [`Item`]s.
//!
//! Each call to [`Tokenizer::next_item`] makes one classification decision
//! from the byte under the cursor and advances past what it consumed:
//!
//! - `\n` is always a single `Newline`.
//! - Non-newline whitespace is one `Space` per maximal run.
//! - Reserved punctuation is always one item per character, so `****` is four
//!   `Asterisk` items. Callers count them to tell header levels apart.
//! - Everything else is one `Word` per maximal run.
//!
//! Classification never looks at neighbouring items, column, or nesting.
//! The stream ends with exactly one terminal item, `Eof` or `Error`, which
//! every later call returns again.

use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::source_buffer::{EncodingIssue, SourceBuffer};
use crate::span::Span;
use crate::tag::{classify, ByteClass, ItemKind};

/// One classified, positioned slice of the input.
///
/// `value` borrows from the input. Concatenating the values of a complete
/// stream reproduces the input (up to an encoding error, if any).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item<'a> {
    pub kind: ItemKind,
    pub value: &'a str,
    pub span: Span,
}

impl<'a> Item<'a> {
    pub const fn new(kind: ItemKind, value: &'a str, span: Span) -> Self {
        Item { kind, value, span }
    }

    /// Byte offset of the first byte of `value`.
    #[inline]
    pub const fn start(&self) -> u32 {
        self.span.start
    }

    /// Byte offset one past the last byte of `value`.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.span.end
    }

    #[inline]
    pub const fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }
}

impl fmt::Display for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ItemKind::Word | ItemKind::Space => {
                write!(f, "{}({:?}) @ {}", self.kind, self.value, self.span)
            }
            _ => write!(f, "{} @ {}", self.kind, self.span),
        }
    }
}

/// Lazy, forward-only tokenizer over one document.
///
/// Drive it with [`next_item`](Self::next_item) until a terminal item comes
/// back, or use it as an [`Iterator`], which yields the terminal item once and
/// then stops.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    /// Reported as the terminal `Error` once the cursor runs out of text.
    encoding_issue: Option<EncodingIssue>,
    /// Set when the terminal item is first produced.
    terminal: Option<Item<'a>>,
    /// Items produced so far, terminal included.
    emitted: u32,
    /// Iterator side: the terminal item has been yielded.
    fused: bool,
}

impl<'a> Tokenizer<'a> {
    /// Tokenize already-valid text. Never fails; the stream ends in `Eof`.
    pub fn new(input: &'a str) -> Self {
        Self::from_buffer(SourceBuffer::new(input))
    }

    /// Tokenize raw bytes. Malformed UTF-8 ends the stream with `Error`
    /// at the first offending sequence.
    pub fn from_bytes(input: &'a [u8]) -> Self {
        Self::from_buffer(SourceBuffer::from_bytes(input))
    }

    pub fn from_buffer(buffer: SourceBuffer<'a>) -> Self {
        Self {
            cursor: buffer.cursor(),
            encoding_issue: buffer.encoding_issue(),
            terminal: None,
            emitted: 0,
            fused: false,
        }
    }

    /// Produce the next item.
    ///
    /// After the terminal item, keeps returning that same item.
    pub fn next_item(&mut self) -> Item<'a> {
        if let Some(item) = self.terminal {
            return item;
        }
        if self.cursor.is_eof() {
            return self.finish();
        }

        let start = self.cursor.pos();
        let item = match classify(self.cursor.current()) {
            ByteClass::Newline => self.single(start, ItemKind::Newline),
            ByteClass::Whitespace => self.space(start),
            ByteClass::Punctuation(kind) => self.single(start, kind),
            ByteClass::Word => self.word(start),
        };
        self.emitted += 1;
        trace!(
            kind = %item.kind,
            start = item.span.start,
            end = item.span.end,
            "item"
        );
        item
    }

    /// Returns `true` once the terminal item has been produced.
    pub fn is_exhausted(&self) -> bool {
        self.terminal.is_some()
    }

    /// Current byte offset.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// The text being tokenized (the valid prefix, for malformed input).
    pub fn source(&self) -> &'a str {
        self.cursor.slice(0, self.cursor.source_len())
    }

    // ─── Scan paths ─────────────────────────────────────────────────

    /// One-byte item: newline or reserved punctuation.
    fn single(&mut self, start: u32, kind: ItemKind) -> Item<'a> {
        self.cursor.advance();
        self.make(kind, start)
    }

    fn space(&mut self, start: u32) -> Item<'a> {
        self.cursor.eat_whitespace();
        self.make(ItemKind::Space, start)
    }

    fn word(&mut self, start: u32) -> Item<'a> {
        self.cursor.eat_word();
        self.make(ItemKind::Word, start)
    }

    #[inline]
    fn make(&self, kind: ItemKind, start: u32) -> Item<'a> {
        let end = self.cursor.pos();
        Item::new(kind, self.cursor.slice(start, end), Span::new(start, end))
    }

    // ─── Terminal ───────────────────────────────────────────────────

    fn finish(&mut self) -> Item<'a> {
        let item = match self.encoding_issue {
            Some(issue) => Item::new(ItemKind::Error, "", issue.span()),
            None => Item::new(ItemKind::Eof, "", Span::point(self.cursor.pos())),
        };
        self.emitted += 1;
        debug!(
            kind = %item.kind,
            span = %item.span,
            items = self.emitted,
            "tokenizer exhausted"
        );
        self.terminal = Some(item);
        item
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Item<'a>> {
        if self.fused {
            return None;
        }
        let item = self.next_item();
        self.fused = item.is_terminal();
        Some(item)
    }
}

impl FusedIterator for Tokenizer<'_> {}
