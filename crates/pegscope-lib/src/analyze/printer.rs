//! Text dump of the scope tree of each rule.
//!
//! ```text
//! start
//!   scope 1
//!     scope 2
//!       a 1:9
//!   action 1:9 [a]
//! ```
//!
//! Scopes are listed with their labels (position is line:column of the `labeled`
//! node, `unseen` marks labels no code captured). After the scopes come the code
//! nodes of the rule with the labels each one captured.

use std::fmt::Write;

use crate::ast::{Expr, Grammar, Point};

use super::ScopeAnalysis;
use super::scope::ScopeId;

pub struct ScopePrinter<'a> {
    grammar: &'a Grammar,
    analysis: &'a ScopeAnalysis,
    empty_scopes: bool,
    captures: bool,
}

impl<'a> ScopePrinter<'a> {
    pub fn new(grammar: &'a Grammar, analysis: &'a ScopeAnalysis) -> Self {
        Self {
            grammar,
            analysis,
            empty_scopes: false,
            captures: true,
        }
    }

    /// Also list scopes that bind nothing, directly or below them.
    pub fn with_empty_scopes(mut self, value: bool) -> Self {
        self.empty_scopes = value;
        self
    }

    pub fn with_captures(mut self, value: bool) -> Self {
        self.captures = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let roots = self.analysis.rule_scopes();
        for (rule, (_, root)) in self.grammar.rules.iter().zip(roots) {
            writeln!(w, "{}", rule.name)?;
            self.format_scope(w, root, 1)?;
            if self.captures {
                self.format_captures(w, &rule.expression, 1)?;
            }
        }
        Ok(())
    }

    fn format_scope(&self, w: &mut impl Write, scope: ScopeId, depth: usize) -> std::fmt::Result {
        if !self.empty_scopes && !self.binds_anything(scope) {
            return Ok(());
        }
        let scopes = self.analysis.scopes();
        writeln!(w, "{}scope {}", indent(depth), scope.index())?;

        for label in scopes.bindings(scope) {
            let record = scopes.label(label);
            write!(
                w,
                "{}{} {}",
                indent(depth + 1),
                record.name,
                line_col(&record.location.start)
            )?;
            if !record.is_seen() {
                w.write_str(" unseen")?;
            }
            w.write_char('\n')?;
        }

        for child in scopes.children(scope) {
            self.format_scope(w, child, depth + 1)?;
        }
        Ok(())
    }

    fn format_captures(&self, w: &mut impl Write, expr: &Expr, depth: usize) -> std::fmt::Result {
        if let Some(names) = self.analysis.labels_in_scope(expr.id()) {
            writeln!(
                w,
                "{}{} {} [{}]",
                indent(depth),
                expr.kind_name(),
                line_col(&expr.location.start),
                names.join(", ")
            )?;
        }
        for child in expr.children() {
            self.format_captures(w, child, depth)?;
        }
        Ok(())
    }

    fn binds_anything(&self, scope: ScopeId) -> bool {
        let scopes = self.analysis.scopes();
        scopes.bindings(scope).next().is_some()
            || scopes.children(scope).any(|child| self.binds_anything(child))
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

fn line_col(point: &Point) -> String {
    format!("{}:{}", point.line, point.column)
}
