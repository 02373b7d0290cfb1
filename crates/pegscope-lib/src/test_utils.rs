//! Test utilities: grammar fixture helpers and a recording linter.

use std::cell::RefCell;

use crate::analyze::{self, ScopeAnalysis};
use crate::ast::{AstBuilder, Expr, Grammar, Location, Point};
use crate::diagnostics::Diagnostics;
use crate::lint::{LintFinding, LintOptions, ScriptLinter};

/// Literal node for the first occurrence of a quoted snippet like `'x'`.
pub fn lit(b: &AstBuilder<'_>, quoted: &str) -> Expr {
    b.literal(b.span(quoted), unquote(quoted))
}

pub fn lit_nth(b: &AstBuilder<'_>, quoted: &str, nth: usize) -> Expr {
    b.literal(b.span_nth(quoted, nth), unquote(quoted))
}

/// `labeled` node over a literal, from a snippet like `a:'x'`.
pub fn labeled_lit(b: &AstBuilder<'_>, snippet: &str) -> Expr {
    labeled_lit_nth(b, snippet, 0)
}

pub fn labeled_lit_nth(b: &AstBuilder<'_>, snippet: &str, nth: usize) -> Expr {
    let (label, quoted) = snippet
        .split_once(':')
        .unwrap_or_else(|| panic!("`{snippet}` is not a label:'literal' snippet"));
    let location = b.span_nth(snippet, nth);
    let skip = label.len() + 1;
    let inner = Location {
        start: Point {
            offset: location.start.offset + skip,
            line: location.start.line,
            column: location.start.column + skip,
        },
        end: location.end,
    };
    b.labeled(location, label, b.literal(inner, unquote(quoted)))
}

/// Grammar with a single rule spanning the whole source.
pub fn single_rule(b: &AstBuilder<'_>, source: &str, name: &str, expression: Expr) -> Grammar {
    b.grammar(None, vec![b.rule(b.span(source), name, expression)])
}

/// Scope analysis plus every grammar-level diagnostic.
pub fn analyze_grammar(grammar: &Grammar) -> (ScopeAnalysis, Diagnostics) {
    let mut diag = Diagnostics::new();
    let analysis = analyze::analyze(grammar, &mut diag);
    (analysis, diag)
}

/// Texts of all diagnostics, in order.
pub fn texts(diag: &Diagnostics) -> Vec<&str> {
    diag.iter().map(|d| d.text()).collect()
}

fn unquote(quoted: &str) -> &str {
    quoted
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(quoted)
}

/// Linter returning canned findings and recording every source it was handed.
#[derive(Default)]
pub struct RecordingLinter {
    findings: Vec<LintFinding>,
    valid: bool,
    seen: RefCell<Vec<String>>,
}

impl RecordingLinter {
    pub fn new(valid: bool, findings: Vec<LintFinding>) -> Self {
        Self {
            findings,
            valid,
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn clean() -> Self {
        Self::new(true, Vec::new())
    }

    pub fn sources(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }
}

impl ScriptLinter for RecordingLinter {
    fn lint(&self, source: &str, _options: &LintOptions) -> Vec<LintFinding> {
        self.seen.borrow_mut().push(source.to_owned());
        self.findings.clone()
    }

    fn is_valid_syntax(&self, _source: &str) -> bool {
        self.valid
    }
}
