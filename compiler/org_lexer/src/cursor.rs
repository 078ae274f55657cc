//! Byte cursor over borrowed source text.
//!
//! [`current()`](Cursor::current) reads `0x00` once the cursor reaches the
//! end of the text, so dispatch on the leading byte needs no separate bounds
//! check. A NUL byte inside the text is ordinary word content; use
//! [`is_eof()`](Cursor::is_eof) to tell the two apart.
//!
//! Runs are extended byte by byte. Every byte at or above `0x80` is a word
//! byte, so a run only ever stops on an ASCII byte and item boundaries always
//! fall on character boundaries.

use crate::tag::{is_space, is_word_byte};

/// Cursor over a document's scannable text.
///
/// The cursor is [`Copy`], so snapshots are free.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    /// Current read position (byte index into `text`).
    pos: u32,
    /// `text.len()`, guaranteed by `SourceBuffer` to fit in `u32`.
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// `text.len()` must fit in `u32`; `SourceBuffer` clamps longer input.
    pub(crate) fn new(text: &'a str) -> Self {
        debug_assert!(u32::try_from(text.len()).is_ok(), "source exceeds u32::MAX");
        Self {
            text,
            pos: 0,
            source_len: u32::try_from(text.len()).unwrap_or(u32::MAX),
        }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.text
            .as_bytes()
            .get(self.pos as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.pos < self.source_len, "advance past EOF");
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        debug_assert!(self.pos + n <= self.source_len, "advance past EOF");
        self.pos += n;
    }

    /// Returns `true` once every byte of the text has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the scannable text.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract `start..end` as `&str`.
    ///
    /// Both offsets must be character boundaries within the text, which holds
    /// for every boundary the scanner produces.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        &self.text[start as usize..end as usize]
    }

    /// Extract the text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while not at EOF and `pred` holds for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        let bytes = self.text.as_bytes();
        while let Some(&b) = bytes.get(self.pos as usize) {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Advance past non-newline whitespace.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_space);
    }

    /// Advance past word bytes: anything that is not whitespace, a newline,
    /// or reserved punctuation.
    #[inline]
    pub fn eat_word(&mut self) {
        self.eat_while(is_word_byte);
    }
}
