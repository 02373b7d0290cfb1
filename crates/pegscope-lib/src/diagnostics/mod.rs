mod message;
mod printer;


pub use message::{Diagnostic, DiagnosticKind, Linter, Position, RelatedInfo, Severity};
pub use printer::DiagnosticsPrinter;

use crate::ast::Location;

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<Diagnostic>,
}

#[must_use = "a diagnostic is only recorded by `.emit()`"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: Diagnostic,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a diagnostic with the given kind at a zero-based position.
    ///
    /// Starts from the kind's stock text.
    pub fn report(&mut self, kind: DiagnosticKind, start: Position) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: Diagnostic::with_default_message(kind, start),
        }
    }

    /// Create a diagnostic spanning a grammar node.
    pub fn report_at(&mut self, kind: DiagnosticKind, location: &Location) -> DiagnosticBuilder<'_> {
        self.report(kind, Position::from_point(&location.start))
            .end(Position::from_point(&location.end))
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.messages
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.messages
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_warning()).count()
    }

    pub fn info_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_info()).count()
    }

    pub fn filter_by_severity(&self, severity: Severity) -> Vec<&Diagnostic> {
        self.messages
            .iter()
            .filter(|d| d.severity == severity)
            .collect()
    }

    pub fn filter_by_kind(&self, kind: DiagnosticKind) -> Vec<&Diagnostic> {
        self.messages.iter().filter(|d| d.kind == kind).collect()
    }

    /// Order by row, then column. Diagnostics at the same position keep their emission order.
    pub fn sort_by_position(&mut self) {
        self.messages.sort_by_key(|d| (d.row, d.column));
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer().source(source).render()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Fill the kind's template with `msg`, usually the offending name.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.text = self.message.kind.message(Some(&detail));
        self
    }

    pub fn end(mut self, end: Position) -> Self {
        self.message.end_row = Some(end.row);
        self.message.end_column = Some(end.column);
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.message.severity = severity;
        self
    }

    pub fn related_to(mut self, msg: impl Into<String>, position: Position) -> Self {
        self.message.related.push(RelatedInfo::new(position, msg));
        self
    }

    /// Append the one-based position of an earlier definition to the message and
    /// link it as related info.
    pub fn previously_defined_at(mut self, location: &Location) -> Self {
        let start = &location.start;
        self.message.text = format!(
            "{} on line: {} column: {}",
            self.message.text, start.line, start.column
        );
        self.related_to("first defined here", Position::from_point(start))
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
