//! Programmatic AST construction over a known source text.
//!
//! Locations are located by searching the source for a snippet, so fixtures stay
//! readable:
//!
//! ```
//! use pegscope_lib::AstBuilder;
//!
//! let source = "start = a:'x' { return a; }";
//! let b = AstBuilder::new(source);
//! let labeled = b.labeled(b.span("a:'x'"), "a", b.literal(b.span("'x'"), "x"));
//! let action = b.action(b.span("a:'x' { return a; }"), labeled, " return a; ");
//! let grammar = b.grammar(None, vec![b.rule(b.span(source), "start", action)]);
//! assert_eq!(grammar.rules[0].expression.code(), Some(" return a; "));
//! ```

use rowan::{TextRange, TextSize};

use super::nodes::{ClassPart, Expr, ExprKind, Grammar, Initializer, Location, Rule};
use crate::source::SourceText;

pub struct AstBuilder<'s> {
    source: SourceText<'s>,
}

impl<'s> AstBuilder<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source: SourceText::new(source),
        }
    }

    /// Location of a byte range of the source.
    pub fn location(&self, range: TextRange) -> Location {
        Location {
            start: self.source.point(range.start()),
            end: self.source.point(range.end()),
        }
    }

    /// Location of the first occurrence of `needle`, if any.
    pub fn find(&self, needle: &str) -> Option<Location> {
        self.find_from(needle, 0)
    }

    /// Location of the first occurrence of `needle` at or after byte `from`.
    pub fn find_from(&self, needle: &str, from: usize) -> Option<Location> {
        let text = self.source.as_str();
        let start = text.get(from..)?.find(needle)? + from;
        let range = TextRange::at(TextSize::from(start as u32), TextSize::of(needle));
        Some(self.location(range))
    }

    /// Location of the first occurrence of `needle`.
    ///
    /// # Panics
    /// If `needle` does not occur in the source.
    pub fn span(&self, needle: &str) -> Location {
        self.find(needle)
            .unwrap_or_else(|| panic!("`{needle}` does not occur in the grammar source"))
    }

    /// Location of the `nth` (zero-based) occurrence of `needle`.
    ///
    /// # Panics
    /// If there are fewer than `nth + 1` occurrences.
    pub fn span_nth(&self, needle: &str, nth: usize) -> Location {
        let text = self.source.as_str();
        let Some((start, _)) = text.match_indices(needle).nth(nth) else {
            panic!("`{needle}` does not occur {} times in the grammar source", nth + 1);
        };
        let range = TextRange::at(TextSize::from(start as u32), TextSize::of(needle));
        self.location(range)
    }

    /// Smallest location covering both `first` and `last`.
    pub fn join(&self, first: Location, last: Location) -> Location {
        Location {
            start: first.start,
            end: last.end,
        }
    }

    pub fn grammar(&self, initializer: Option<Initializer>, rules: Vec<Rule>) -> Grammar {
        let whole = TextRange::up_to(self.source.len());
        Grammar::new(initializer, rules, self.location(whole))
    }

    pub fn initializer(&self, location: Location, code: &str) -> Initializer {
        Initializer::new(code, location)
    }

    pub fn rule(&self, location: Location, name: &str, expression: Expr) -> Rule {
        Rule::new(name, expression, location)
    }

    pub fn named(&self, location: Location, name: &str, expression: Expr) -> Expr {
        let kind = ExprKind::Named {
            name: name.to_owned(),
            expression: Box::new(expression),
        };
        Expr::new(kind, location)
    }

    pub fn choice(&self, location: Location, alternatives: Vec<Expr>) -> Expr {
        Expr::new(ExprKind::Choice { alternatives }, location)
    }

    pub fn action(&self, location: Location, expression: Expr, code: &str) -> Expr {
        let kind = ExprKind::Action {
            expression: Box::new(expression),
            code: code.to_owned(),
        };
        Expr::new(kind, location)
    }

    pub fn sequence(&self, location: Location, elements: Vec<Expr>) -> Expr {
        Expr::new(ExprKind::Sequence { elements }, location)
    }

    pub fn labeled(&self, location: Location, label: &str, expression: Expr) -> Expr {
        let kind = ExprKind::Labeled {
            label: label.to_owned(),
            expression: Box::new(expression),
        };
        Expr::new(kind, location)
    }

    pub fn text(&self, location: Location, expression: Expr) -> Expr {
        let expression = Box::new(expression);
        Expr::new(ExprKind::Text { expression }, location)
    }

    pub fn simple_and(&self, location: Location, expression: Expr) -> Expr {
        let expression = Box::new(expression);
        Expr::new(ExprKind::SimpleAnd { expression }, location)
    }

    pub fn simple_not(&self, location: Location, expression: Expr) -> Expr {
        let expression = Box::new(expression);
        Expr::new(ExprKind::SimpleNot { expression }, location)
    }

    pub fn optional(&self, location: Location, expression: Expr) -> Expr {
        let expression = Box::new(expression);
        Expr::new(ExprKind::Optional { expression }, location)
    }

    pub fn zero_or_more(&self, location: Location, expression: Expr) -> Expr {
        let expression = Box::new(expression);
        Expr::new(ExprKind::ZeroOrMore { expression }, location)
    }

    pub fn one_or_more(&self, location: Location, expression: Expr) -> Expr {
        let expression = Box::new(expression);
        Expr::new(ExprKind::OneOrMore { expression }, location)
    }

    pub fn semantic_and(&self, location: Location, code: &str) -> Expr {
        let code = code.to_owned();
        Expr::new(ExprKind::SemanticAnd { code }, location)
    }

    pub fn semantic_not(&self, location: Location, code: &str) -> Expr {
        let code = code.to_owned();
        Expr::new(ExprKind::SemanticNot { code }, location)
    }

    pub fn rule_ref(&self, location: Location, name: &str) -> Expr {
        let name = name.to_owned();
        Expr::new(ExprKind::RuleRef { name }, location)
    }

    pub fn literal(&self, location: Location, value: &str) -> Expr {
        let kind = ExprKind::Literal {
            value: value.to_owned(),
            ignore_case: false,
        };
        Expr::new(kind, location)
    }

    pub fn class(&self, location: Location, parts: Vec<ClassPart>) -> Expr {
        let kind = ExprKind::Class {
            parts,
            inverted: false,
            ignore_case: false,
        };
        Expr::new(kind, location)
    }

    pub fn any(&self, location: Location) -> Expr {
        Expr::new(ExprKind::Any, location)
    }
}
