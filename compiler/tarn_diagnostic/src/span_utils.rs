//! Line and column lookup for spans.
//!
//! Spans are byte ranges; reports show 1-based lines and character
//! columns. [`LineOffsetTable`] pre-computes line starts once per source
//! file so every lookup is a binary search.

use std::fmt;

use tarn_ir::Span;

/// Pre-computed line offset table for line/column lookup.
///
/// ```
/// use tarn_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// assert_eq!(table.offset_to_line_col(source, 14), (3, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// Get the 1-based line number containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Get 1-based (line, column) from a byte offset.
    ///
    /// The column counts characters, not bytes, from the line start. An
    /// offset past the end clamps to the end of the source; an offset inside
    /// a multi-byte character counts that character as not yet reached.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());

        let col_chars = source
            .get(line_start..end)
            .map_or_else(|| count_chars_lossy(source, line_start, end), |s| s.chars().count());
        let col = u32::try_from(col_chars).unwrap_or(u32::MAX - 1) + 1;

        (line, col)
    }

    /// Resolve both ends of `span`.
    pub fn span_to_range(&self, source: &str, span: Span) -> SourceRange {
        let (start_line, start_col) = self.offset_to_line_col(source, span.start);
        let (end_line, end_col) = self.offset_to_line_col(source, span.end);
        SourceRange {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Get the byte offset of a line start (1-based line number).
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Get the number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Character count of `source[start..end]` when `end` is not a char boundary.
fn count_chars_lossy(source: &str, start: usize, end: usize) -> usize {
    source
        .char_indices()
        .filter(|&(idx, ch)| idx >= start && idx + ch.len_utf8() <= end)
        .count()
}

/// A span resolved to 1-based line/column positions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceRange {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl fmt::Display for SourceRange {
    /// `line:col` for a point, `line:col-col` on one line, and
    /// `line:col-line:col` across lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start_line == self.end_line {
            if self.start_col == self.end_col {
                write!(f, "{}:{}", self.start_line, self.start_col)
            } else {
                write!(f, "{}:{}-{}", self.start_line, self.start_col, self.end_col)
            }
        } else {
            write!(
                f,
                "{}:{}-{}:{}",
                self.start_line, self.start_col, self.end_line, self.end_col
            )
        }
    }
}

/// Compute 1-based (line, column) from a byte offset without a table.
///
/// For repeated lookups, build a [`LineOffsetTable`] instead.
pub fn offset_to_line_col(source: &str, offset: u32) -> (u32, u32) {
    LineOffsetTable::build(source).offset_to_line_col(source, offset)
}

#[cfg(test)]
mod tests;
