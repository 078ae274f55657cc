//! Byte offset to line/column lookup for diagnostics.
//!
//! Items carry byte offsets only. A consumer that needs to point a user at a
//! position (for example when surfacing an `Error` item) builds a
//! [`LineIndex`] once and resolves offsets in O(log L).

/// Byte offsets of every line start in a document.
///
/// # Example
///
/// ```
/// use org_lexer::LineIndex;
///
/// let source = "* one\n** two\n";
/// let index = LineIndex::build(source);
///
/// assert_eq!(index.line_col(source, 0), (1, 1));
/// assert_eq!(index.line_col(source, 9), (2, 4));
/// assert_eq!(index.line_count(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineIndex {
    /// `starts[0] == 0`; `starts[n]` is the byte after the n-th `\n`.
    starts: Vec<u32>,
}

impl LineIndex {
    /// Build the index with one SIMD newline scan.
    pub fn build(source: &str) -> Self {
        let mut starts = vec![0u32];
        starts.extend(
            memchr::memchr_iter(b'\n', source.as_bytes())
                .map_while(|i| u32::try_from(i + 1).ok()),
        );
        LineIndex { starts }
    }

    /// 1-based line containing `offset`.
    pub fn line_of(&self, offset: u32) -> u32 {
        let idx = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based `(line, column)` of `offset`.
    ///
    /// The column counts characters, not bytes. Offsets past the end of
    /// `source` are clamped to its length.
    pub fn line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_of(offset);
        let line_start = self.line_start(line).unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(0, |prefix| prefix.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
    }

    /// Byte offset where 1-based `line` starts.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        let idx = line.checked_sub(1)?;
        self.starts.get(idx as usize).copied()
    }

    /// Number of lines. A trailing `\n` starts an (empty) final line.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }
}

#[cfg(test)]
mod tests;
