//! Output buffer that knows its own line and column.

use crate::source::is_line_terminator;

/// Appends text while tracking the one-based line and zero-based UTF-16 column of the
/// end of the buffer. Line breaks are counted the way [`SourceText`] counts them.
///
/// [`SourceText`]: crate::source::SourceText
#[derive(Debug)]
pub(super) struct Emitter {
    out: String,
    line: usize,
    column: usize,
    after_cr: bool,
}

impl Emitter {
    pub(super) fn new() -> Self {
        Self {
            out: String::new(),
            line: 1,
            column: 0,
            after_cr: false,
        }
    }

    pub(super) fn line(&self) -> usize {
        self.line
    }

    pub(super) fn column(&self) -> usize {
        self.column
    }

    pub(super) fn push_char(&mut self, c: char) {
        self.out.push(c);
        let crlf = c == '\n' && self.after_cr;
        if !is_line_terminator(c) {
            self.column += c.len_utf16();
        } else if !crlf {
            self.line += 1;
            self.column = 0;
        }
        self.after_cr = c == '\r';
    }

    pub(super) fn push_str(&mut self, s: &str) {
        for c in s.chars() {
            self.push_char(c);
        }
    }

    /// Emit line breaks until the cursor is on `line`. No-op if already there or past it.
    pub(super) fn advance_to_line(&mut self, line: usize) {
        while self.line < line {
            self.push_char('\n');
        }
    }

    /// Emit spaces until the cursor reaches `column`. No-op if already there or past it.
    pub(super) fn pad_to_column(&mut self, column: usize) {
        while self.column < column {
            self.push_char(' ');
        }
    }

    pub(super) fn finish(self) -> String {
        self.out
    }
}
