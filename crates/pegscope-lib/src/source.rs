//! Position bookkeeping for grammar sources.
//!
//! The grammar parser reports offsets in UTF-16 code units with one-based lines and
//! columns. Rust strings are indexed by bytes, so every slice of the source goes
//! through [`SourceText`], which owns the conversion tables.

use rowan::{TextRange, TextSize};

use crate::ast::{Location, Point};

/// Returns `true` for the characters the grammar parser treats as line breaks.
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Grammar source text plus line and offset lookup tables.
#[derive(Clone, Debug)]
pub struct SourceText<'s> {
    text: &'s str,
    /// Byte offset of the first character of each line.
    line_starts: Vec<TextSize>,
    /// `(utf16_offset, byte_offset)` for every char boundary. Empty for ASCII input.
    utf16_boundaries: Vec<(u32, TextSize)>,
}

impl<'s> SourceText<'s> {
    pub fn new(text: &'s str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        let mut chars = text.char_indices().peekable();
        while let Some((idx, c)) = chars.next() {
            if !is_line_terminator(c) {
                continue;
            }
            let mut next = idx + c.len_utf8();
            if c == '\r'
                && let Some(&(_, '\n')) = chars.peek()
            {
                chars.next();
                next += 1;
            }
            line_starts.push(TextSize::from(next as u32));
        }

        let utf16_boundaries = if text.is_ascii() {
            Vec::new()
        } else {
            let mut units = 0u32;
            let mut table = Vec::with_capacity(text.len() + 1);
            for (idx, c) in text.char_indices() {
                table.push((units, TextSize::from(idx as u32)));
                units += c.len_utf16() as u32;
            }
            table.push((units, TextSize::of(text)));
            table
        };

        Self {
            text,
            line_starts,
            utf16_boundaries,
        }
    }

    pub fn as_str(&self) -> &'s str {
        self.text
    }

    pub fn len(&self) -> TextSize {
        TextSize::of(self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a UTF-16 offset (as reported by the grammar parser) into a byte offset.
    ///
    /// Returns `None` when the offset is past the end or falls inside a surrogate pair.
    pub fn byte_offset(&self, utf16_offset: usize) -> Option<TextSize> {
        if self.utf16_boundaries.is_empty() {
            return (utf16_offset <= self.text.len()).then(|| TextSize::from(utf16_offset as u32));
        }
        let target = u32::try_from(utf16_offset).ok()?;
        self.utf16_boundaries
            .binary_search_by_key(&target, |&(units, _)| units)
            .ok()
            .map(|idx| self.utf16_boundaries[idx].1)
    }

    /// Convert a byte offset into a UTF-16 offset.
    pub fn utf16_offset(&self, byte_offset: TextSize) -> usize {
        if self.utf16_boundaries.is_empty() {
            return u32::from(byte_offset) as usize;
        }
        match self
            .utf16_boundaries
            .binary_search_by_key(&byte_offset, |&(_, bytes)| bytes)
        {
            Ok(idx) => self.utf16_boundaries[idx].0 as usize,
            Err(idx) => self.utf16_boundaries[idx.saturating_sub(1)].0 as usize,
        }
    }

    /// Byte range covered by a node location.
    pub fn range(&self, location: &Location) -> Option<TextRange> {
        let start = self.byte_offset(location.start.offset)?;
        let end = self.byte_offset(location.end.offset)?;
        (start <= end).then(|| TextRange::new(start, end))
    }

    pub fn slice(&self, range: TextRange) -> &'s str {
        &self.text[range]
    }

    /// Line (one-based) and column (zero-based, UTF-16 units) of a byte offset.
    pub fn line_col(&self, offset: TextSize) -> (usize, usize) {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line_start = self.line_starts[line_idx];
        let column = self.text[TextRange::new(line_start, offset)]
            .chars()
            .map(char::len_utf16)
            .sum();
        (line_idx + 1, column)
    }

    /// Build a parser-convention [`Point`] (one-based line and column) for a byte offset.
    pub fn point(&self, offset: TextSize) -> Point {
        let (line, column) = self.line_col(offset);
        Point {
            offset: self.utf16_offset(offset),
            line,
            column: column + 1,
        }
    }

    /// Byte offset of a zero-based row and UTF-16 column, clamped to the line end.
    pub fn offset_at(&self, row: usize, column: usize) -> TextSize {
        let Some(&line_start) = self.line_starts.get(row) else {
            return self.len();
        };
        let line_end = self
            .line_starts
            .get(row + 1)
            .copied()
            .unwrap_or_else(|| self.len());
        let line = &self.text[TextRange::new(line_start, line_end)];

        let mut units = 0;
        for (idx, c) in line.char_indices() {
            if units >= column || is_line_terminator(c) {
                return line_start + TextSize::from(idx as u32);
            }
            units += c.len_utf16();
        }
        line_end
    }
}
