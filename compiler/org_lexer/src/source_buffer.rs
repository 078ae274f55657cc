//! Borrowed, validated view of the document being tokenized.
//!
//! The buffer never copies the input. Text handed in as `&str` is scanned
//! as-is; raw bytes are validated as UTF-8 on construction and only the valid
//! prefix is exposed to the scanner. The first malformed sequence (if any) is
//! recorded as an [`EncodingIssue`], which the tokenizer turns into its
//! terminal `Error` item once the cursor reaches it.
//!
//! Offsets are `u32`. Input beyond `u32::MAX` bytes is cut at the last
//! character boundary that fits and recorded as [`EncodingIssueKind::Oversized`].

use tracing::debug;

use crate::cursor::Cursor;
use crate::span::Span;

/// Largest document the tokenizer addresses, in bytes.
const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// Borrowed source text plus the encoding issue that ends it, if any.
#[derive(Clone, Copy, Debug)]
pub struct SourceBuffer<'a> {
    /// Scannable text: the whole input, or its valid prefix.
    text: &'a str,
    /// `text.len()` as `u32`.
    source_len: u32,
    /// Where scanning has to stop early.
    encoding_issue: Option<EncodingIssue>,
}

/// Encoding issue detected during buffer construction.
///
/// `pos` is always equal to the scannable length; `len` is the byte length
/// of the offending sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What kind of encoding issue was detected.
    pub kind: EncodingIssueKind,
    /// Byte position in the input where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

impl EncodingIssue {
    /// Byte range of the offending sequence.
    pub fn span(&self) -> Span {
        Span::new(self.pos, self.pos.saturating_add(self.len))
    }
}

/// Kind of encoding issue detected in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncodingIssueKind {
    /// A byte sequence that can never start valid UTF-8.
    InvalidUtf8,
    /// A UTF-8 sequence cut off by the end of input.
    TruncatedUtf8,
    /// Input longer than `u32::MAX` bytes.
    Oversized,
}

impl EncodingIssueKind {
    pub const fn description(self) -> &'static str {
        match self {
            EncodingIssueKind::InvalidUtf8 => "invalid UTF-8",
            EncodingIssueKind::TruncatedUtf8 => "truncated UTF-8 sequence",
            EncodingIssueKind::Oversized => "input exceeds 4 GiB",
        }
    }
}

impl<'a> SourceBuffer<'a> {
    /// Create a buffer over already-valid text.
    pub fn new(source: &'a str) -> Self {
        Self::build(source, None)
    }

    /// Create a buffer over raw bytes, validating them as UTF-8.
    ///
    /// Never fails: the valid prefix is scannable and the first malformed
    /// sequence becomes the buffer's [`encoding_issue`](Self::encoding_issue).
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        match std::str::from_utf8(bytes) {
            Ok(text) => Self::build(text, None),
            Err(err) => {
                let valid = err.valid_up_to();
                // The prefix up to `valid_up_to` is UTF-8 by definition.
                let text = std::str::from_utf8(&bytes[..valid]).unwrap_or_default();
                let (kind, bad_len) = match err.error_len() {
                    Some(n) => (EncodingIssueKind::InvalidUtf8, n),
                    None => (EncodingIssueKind::TruncatedUtf8, bytes.len() - valid),
                };
                let issue = u32::try_from(valid).ok().map(|pos| EncodingIssue {
                    kind,
                    pos,
                    len: u32::try_from(bad_len).unwrap_or(u32::MAX),
                });
                Self::build(text, issue)
            }
        }
    }

    fn build(text: &'a str, issue: Option<EncodingIssue>) -> Self {
        let (text, issue) = if text.len() > MAX_SOURCE_LEN {
            clamp_oversized(text)
        } else {
            (text, issue)
        };
        if let Some(issue) = issue {
            debug!(
                kind = issue.kind.description(),
                pos = issue.pos,
                len = issue.len,
                "encoding issue in source"
            );
        }
        Self {
            text,
            source_len: u32::try_from(text.len()).unwrap_or(u32::MAX),
            encoding_issue: issue,
        }
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor::new(self.text)
    }

    /// The scannable text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Length of the scannable text in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// The issue that ends the scannable text early, if any.
    pub fn encoding_issue(&self) -> Option<EncodingIssue> {
        self.encoding_issue
    }
}

/// Cut `text` at the last character boundary at or below `u32::MAX`.
fn clamp_oversized(text: &str) -> (&str, Option<EncodingIssue>) {
    let mut cut = MAX_SOURCE_LEN;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    let pos = u32::try_from(cut).unwrap_or(u32::MAX);
    let issue = EncodingIssue {
        kind: EncodingIssueKind::Oversized,
        pos,
        len: u32::MAX - pos,
    };
    (&text[..cut], Some(issue))
}

#[cfg(test)]
mod tests;
