use serde::Serialize;

use crate::ast::Point;

/// What a diagnostic is about. Each kind has a default severity and source tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // The grammar parser rejected the text; nothing else runs
    GrammarSyntax,

    // Definitions
    DuplicateRule,
    DuplicateLabel,

    // Never used
    UnreferencedRule,
    UnusedLabel,

    // Reported by the external linter on extracted code
    LintFinding,
}

impl DiagnosticKind {
    /// Default severity for this kind. Lint findings are reclassified by the lint policy.
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::GrammarSyntax => Severity::Error,
            Self::DuplicateRule | Self::DuplicateLabel | Self::LintFinding => Severity::Warning,
            Self::UnreferencedRule | Self::UnusedLabel => Severity::Info,
        }
    }

    pub fn linter(&self) -> Linter {
        match self {
            Self::LintFinding => Linter::LintService,
            _ => Linter::Grammar,
        }
    }

    /// Stock text, for reports that carry no name.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::GrammarSyntax => "grammar could not be parsed",
            Self::DuplicateRule => "rule is already defined",
            Self::DuplicateLabel => "label is already defined in this scope",
            Self::UnreferencedRule => "rule is defined but never referenced",
            Self::UnusedLabel => "label cannot be seen by any action or semantic predicate",
            Self::LintFinding => "lint finding",
        }
    }

    /// Text with a `{}` slot for the offending name.
    pub fn custom_message(&self) -> &'static str {
        match self {
            Self::DuplicateRule => "rule {} is already defined",
            Self::DuplicateLabel => "label {} is already defined in this scope",
            Self::UnreferencedRule => "rule {} is defined but never referenced",
            Self::UnusedLabel => "label {} cannot be seen by any action or semantic predicate",
            Self::GrammarSyntax | Self::LintFinding => "{}",
        }
    }

    /// `detail` goes into the template's slot; without it the stock text is used.
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Which analysis produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Linter {
    #[serde(rename = "grammar")]
    Grammar,
    #[serde(rename = "lint-service")]
    LintService,
}

impl std::fmt::Display for Linter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Linter::Grammar => write!(f, "grammar"),
            Linter::LintService => write!(f, "lint-service"),
        }
    }
}

/// Zero-based row and column, as shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Convert a grammar-parser point (one-based line and column).
    pub fn from_point(point: &Point) -> Self {
        Self {
            row: point.line.saturating_sub(1),
            column: point.column.saturating_sub(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) position: Position,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(position: Position, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A single diagnostic in the shape handed to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    #[serde(skip)]
    pub(crate) kind: DiagnosticKind,
    pub(crate) row: usize,
    pub(crate) column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) end_row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) end_column: Option<usize>,
    pub(crate) text: String,
    #[serde(rename = "type")]
    pub(crate) severity: Severity,
    pub(crate) linter: Linter,
    #[serde(skip)]
    pub(crate) related: Vec<RelatedInfo>,
}

impl Diagnostic {
    pub(crate) fn new(kind: DiagnosticKind, start: Position, text: impl Into<String>) -> Self {
        Self {
            kind,
            row: start.row,
            column: start.column,
            end_row: None,
            end_column: None,
            text: text.into(),
            severity: kind.default_severity(),
            linter: kind.linter(),
            related: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, start: Position) -> Self {
        Self::new(kind, start, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn start(&self) -> Position {
        Position::new(self.row, self.column)
    }

    pub fn end(&self) -> Option<Position> {
        Some(Position::new(self.end_row?, self.end_column?))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn linter(&self) -> Linter {
        self.linter
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    pub fn is_info(&self) -> bool {
        self.severity == Severity::Info
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}: {}",
            self.severity,
            self.row + 1,
            self.column + 1,
            self.text
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}:{})",
                related.message,
                related.position.row + 1,
                related.position.column + 1
            )?;
        }
        Ok(())
    }
}
