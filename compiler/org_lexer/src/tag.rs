//! Item kinds and the byte classification table.
//!
//! [`ItemKind`] is the closed alphabet every downstream markup rule switches
//! on. Discriminants are grouped into ranges so a kind fits in one byte and
//! related kinds sort together:
//!
//! | range   | group       |
//! |---------|-------------|
//! | 0-15    | text        |
//! | 32-47   | punctuation |
//! | 254-255 | terminal    |
//!
//! [`classify`] maps a leading byte to the scan path that handles it. The
//! table covers all 256 byte values, so the scanner's dispatch is a single
//! indexed load.

use std::fmt;

/// Kind of a tokenized item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ItemKind {
    // === Text ===
    /// Maximal run of non-reserved, non-whitespace characters.
    Word = 0,
    /// Maximal run of non-newline whitespace.
    Space = 1,
    /// A single `\n`.
    Newline = 2,

    // === Punctuation ===
    /// `*`
    Asterisk = 32,
    /// `#`
    Hash = 33,
    /// `+`
    Plus = 34,
    /// `/`
    Slash = 35,
    /// `=`
    Equal = 36,
    /// `~`
    Tilde = 37,
    /// `-`
    Dash = 38,
    /// `_`
    Underscore = 39,
    /// `:`
    Colon = 40,
    /// `[`
    BracketLeft = 41,
    /// `]`
    BracketRight = 42,
    /// `|`
    Pipe = 43,

    // === Terminal ===
    /// Malformed input at the cursor. Ends the stream.
    Error = 254,
    /// End of input. Ends the stream.
    Eof = 255,
}

const _: () = assert!(std::mem::size_of::<ItemKind>() == 1);

impl ItemKind {
    /// Every kind, in discriminant order.
    pub const ALL: [ItemKind; 17] = [
        ItemKind::Word,
        ItemKind::Space,
        ItemKind::Newline,
        ItemKind::Asterisk,
        ItemKind::Hash,
        ItemKind::Plus,
        ItemKind::Slash,
        ItemKind::Equal,
        ItemKind::Tilde,
        ItemKind::Dash,
        ItemKind::Underscore,
        ItemKind::Colon,
        ItemKind::BracketLeft,
        ItemKind::BracketRight,
        ItemKind::Pipe,
        ItemKind::Error,
        ItemKind::Eof,
    ];

    /// Stable display name.
    pub const fn name(self) -> &'static str {
        match self {
            ItemKind::Word => "Word",
            ItemKind::Space => "Space",
            ItemKind::Newline => "Newline",
            ItemKind::Asterisk => "Asterisk",
            ItemKind::Hash => "Hash",
            ItemKind::Plus => "Plus",
            ItemKind::Slash => "Slash",
            ItemKind::Equal => "Equal",
            ItemKind::Tilde => "Tilde",
            ItemKind::Dash => "Dash",
            ItemKind::Underscore => "Underscore",
            ItemKind::Colon => "Colon",
            ItemKind::BracketLeft => "BracketLeft",
            ItemKind::BracketRight => "BracketRight",
            ItemKind::Pipe => "Pipe",
            ItemKind::Error => "Error",
            ItemKind::Eof => "EOF",
        }
    }

    /// The fixed source text of this kind, if it has one.
    ///
    /// Returns `None` for kinds whose text varies (`Word`, `Space`) and for
    /// the terminal kinds.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            ItemKind::Newline => Some("\n"),
            ItemKind::Asterisk => Some("*"),
            ItemKind::Hash => Some("#"),
            ItemKind::Plus => Some("+"),
            ItemKind::Slash => Some("/"),
            ItemKind::Equal => Some("="),
            ItemKind::Tilde => Some("~"),
            ItemKind::Dash => Some("-"),
            ItemKind::Underscore => Some("_"),
            ItemKind::Colon => Some(":"),
            ItemKind::BracketLeft => Some("["),
            ItemKind::BracketRight => Some("]"),
            ItemKind::Pipe => Some("|"),
            ItemKind::Word | ItemKind::Space | ItemKind::Error | ItemKind::Eof => None,
        }
    }

    /// Returns `true` for `Eof` and `Error`.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, ItemKind::Eof | ItemKind::Error)
    }

    /// Returns `true` for the single-character reserved punctuation kinds.
    #[inline]
    pub const fn is_punctuation(self) -> bool {
        matches!(self as u8, 32..=47)
    }

    /// Map a reserved punctuation byte to its kind.
    pub const fn from_punctuation(byte: u8) -> Option<ItemKind> {
        match byte {
            b'*' => Some(ItemKind::Asterisk),
            b'#' => Some(ItemKind::Hash),
            b'+' => Some(ItemKind::Plus),
            b'/' => Some(ItemKind::Slash),
            b'=' => Some(ItemKind::Equal),
            b'~' => Some(ItemKind::Tilde),
            b'-' => Some(ItemKind::Dash),
            b'_' => Some(ItemKind::Underscore),
            b':' => Some(ItemKind::Colon),
            b'[' => Some(ItemKind::BracketLeft),
            b']' => Some(ItemKind::BracketRight),
            b'|' => Some(ItemKind::Pipe),
            _ => None,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scan path selected by the byte that starts an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteClass {
    /// `\n`.
    Newline,
    /// Space, tab, `\r`, vertical tab, form feed.
    Whitespace,
    /// One of the reserved punctuation bytes.
    Punctuation(ItemKind),
    /// Anything else, including UTF-8 lead and continuation bytes.
    Word,
}

impl ByteClass {
    /// Returns `true` if a byte of this class extends a word run.
    #[inline]
    pub const fn continues_word(self) -> bool {
        matches!(self, ByteClass::Word)
    }
}

static BYTE_CLASS: [ByteClass; 256] = build_byte_class();

const fn build_byte_class() -> [ByteClass; 256] {
    let mut table = [ByteClass::Word; 256];
    let mut b = 0;
    while b < 256 {
        #[allow(clippy::cast_possible_truncation, reason = "b < 256")]
        let byte = b as u8;
        table[b] = match byte {
            b'\n' => ByteClass::Newline,
            b' ' | b'\t' | b'\r' | 0x0B | 0x0C => ByteClass::Whitespace,
            _ => match ItemKind::from_punctuation(byte) {
                Some(kind) => ByteClass::Punctuation(kind),
                None => ByteClass::Word,
            },
        };
        b += 1;
    }
    table
}

/// Classify a byte.
#[inline]
pub fn classify(byte: u8) -> ByteClass {
    BYTE_CLASS[byte as usize]
}

/// Returns `true` for non-newline whitespace bytes.
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(classify(byte), ByteClass::Whitespace)
}

/// Returns `true` for bytes that extend a word run.
#[inline]
pub fn is_word_byte(byte: u8) -> bool {
    classify(byte).continues_word()
}
