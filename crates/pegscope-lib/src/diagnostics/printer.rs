//! Human-readable rendering of a diagnostic list.
//!
//! With the grammar text at hand every diagnostic becomes an annotated snippet;
//! without it each one is printed on a single summary line.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use super::Diagnostics;
use super::message::{Diagnostic, Position, Severity};
use crate::source::SourceText;

pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    grammar: Option<&'s str>,
    origin: Option<&'s str>,
    styled: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            grammar: None,
            origin: None,
            styled: false,
        }
    }

    /// Grammar text the positions point into. Enables snippet output.
    pub fn source(mut self, grammar: &'s str) -> Self {
        self.grammar = Some(grammar);
        self
    }

    /// File name shown in snippet headers.
    pub fn path(mut self, origin: &'s str) -> Self {
        self.origin = Some(origin);
        self
    }

    /// ANSI styling for snippet output.
    pub fn colored(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        match self.grammar {
            Some(grammar) => self.write_snippets(grammar, w),
            None => self.write_summary(w),
        }
    }

    fn write_snippets(&self, grammar: &str, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.styled {
            Renderer::styled()
        } else {
            Renderer::plain()
        };
        let text = SourceText::new(grammar);

        let mut first = true;
        for diag in self.diagnostics {
            if !first {
                w.write_char('\n')?;
            }
            first = false;
            let report = [self.group(grammar, &text, diag)];
            write!(w, "{}", renderer.render(&report))?;
        }
        Ok(())
    }

    fn group<'a>(&self, grammar: &'a str, text: &SourceText<'_>, diag: &'a Diagnostic) -> Group<'a>
    where
        's: 'a,
    {
        let primary = AnnotationKind::Primary.span(span_of(text, diag.start(), diag.end()));
        let mut snippet = Snippet::source(grammar).line_start(1).annotation(primary);
        if let Some(origin) = self.origin {
            snippet = snippet.path(origin);
        }
        snippet = diag.related().iter().fold(snippet, |snippet, related| {
            let span = span_of(text, related.position(), None);
            snippet.annotation(AnnotationKind::Context.span(span).label(related.message()))
        });

        level(diag.severity())
            .primary_title(diag.text())
            .element(snippet)
    }

    fn write_summary(&self, w: &mut impl Write) -> std::fmt::Result {
        let mut lines = self.diagnostics.iter();
        if let Some(diag) = lines.next() {
            write!(w, "{diag}")?;
        }
        for diag in lines {
            write!(w, "\n{diag}")?;
        }
        Ok(())
    }
}

fn level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
        Severity::Info => Level::INFO,
    }
}

/// Byte span of a diagnostic. A point widens to one character so there is something
/// to underline, except at the very end of the text.
fn span_of(text: &SourceText<'_>, start: Position, end: Option<Position>) -> Range<usize> {
    let start: usize = text.offset_at(start.row, start.column).into();
    let end: usize = match end {
        Some(end) => text.offset_at(end.row, end.column).into(),
        None => start,
    };
    if end > start {
        return start..end;
    }
    let limit: usize = text.len().into();
    start..(start + 1).min(limit)
}
