//! Grammar AST visitor.
//!
//! # Usage
//!
//! Implement `Visitor` for your struct. Override `visit_*` methods to add logic.
//! Call `walk_*` within your override to continue recursion (or omit it to stop).
//!
//! Every method carries a context value `C` that is handed down to children
//! unchanged unless an override passes a different one. Passes that thread
//! state (like the scope builder threading environments) use it; others use `()`.
//!
//! ```ignore
//! impl Visitor for RuleRefs {
//!     fn visit_rule_ref(&mut self, node: &Expr, name: &str, _: ()) {
//!         self.names.push(name.to_owned());
//!     }
//! }
//! ```

use crate::ast::{Expr, ExprKind, Grammar, Initializer, Rule};

pub trait Visitor<C: Copy = ()>: Sized {
    fn visit_grammar(&mut self, grammar: &Grammar, cx: C) {
        walk_grammar(self, grammar, cx);
    }

    fn visit_initializer(&mut self, _initializer: &Initializer, _cx: C) {}

    fn visit_rule(&mut self, rule: &Rule, cx: C) {
        walk_rule(self, rule, cx);
    }

    fn visit_expr(&mut self, expr: &Expr, cx: C) {
        walk_expr(self, expr, cx);
    }

    fn visit_named(&mut self, _node: &Expr, _name: &str, expression: &Expr, cx: C) {
        self.visit_expr(expression, cx);
    }

    fn visit_choice(&mut self, _node: &Expr, alternatives: &[Expr], cx: C) {
        walk_exprs(self, alternatives, cx);
    }

    fn visit_action(&mut self, _node: &Expr, expression: &Expr, _code: &str, cx: C) {
        self.visit_expr(expression, cx);
    }

    fn visit_sequence(&mut self, _node: &Expr, elements: &[Expr], cx: C) {
        walk_exprs(self, elements, cx);
    }

    fn visit_labeled(&mut self, _node: &Expr, _label: &str, expression: &Expr, cx: C) {
        self.visit_expr(expression, cx);
    }

    fn visit_text(&mut self, _node: &Expr, expression: &Expr, cx: C) {
        self.visit_expr(expression, cx);
    }

    fn visit_simple_and(&mut self, _node: &Expr, expression: &Expr, cx: C) {
        self.visit_expr(expression, cx);
    }

    fn visit_simple_not(&mut self, _node: &Expr, expression: &Expr, cx: C) {
        self.visit_expr(expression, cx);
    }

    fn visit_optional(&mut self, _node: &Expr, expression: &Expr, cx: C) {
        self.visit_expr(expression, cx);
    }

    fn visit_zero_or_more(&mut self, _node: &Expr, expression: &Expr, cx: C) {
        self.visit_expr(expression, cx);
    }

    fn visit_one_or_more(&mut self, _node: &Expr, expression: &Expr, cx: C) {
        self.visit_expr(expression, cx);
    }

    fn visit_semantic_and(&mut self, _node: &Expr, _code: &str, _cx: C) {}

    fn visit_semantic_not(&mut self, _node: &Expr, _code: &str, _cx: C) {}

    fn visit_rule_ref(&mut self, _node: &Expr, _name: &str, _cx: C) {}

    fn visit_literal(&mut self, _node: &Expr, _cx: C) {}

    fn visit_class(&mut self, _node: &Expr, _cx: C) {}

    fn visit_any(&mut self, _node: &Expr, _cx: C) {}
}

pub fn walk_grammar<V: Visitor<C>, C: Copy>(visitor: &mut V, grammar: &Grammar, cx: C) {
    if let Some(initializer) = &grammar.initializer {
        visitor.visit_initializer(initializer, cx);
    }
    for rule in &grammar.rules {
        visitor.visit_rule(rule, cx);
    }
}

pub fn walk_rule<V: Visitor<C>, C: Copy>(visitor: &mut V, rule: &Rule, cx: C) {
    visitor.visit_expr(&rule.expression, cx);
}

pub fn walk_exprs<V: Visitor<C>, C: Copy>(visitor: &mut V, exprs: &[Expr], cx: C) {
    for expr in exprs {
        visitor.visit_expr(expr, cx);
    }
}

/// Dispatch on the node kind.
pub fn walk_expr<V: Visitor<C>, C: Copy>(visitor: &mut V, expr: &Expr, cx: C) {
    match &expr.kind {
        ExprKind::Named { name, expression } => visitor.visit_named(expr, name, expression, cx),
        ExprKind::Choice { alternatives } => visitor.visit_choice(expr, alternatives, cx),
        ExprKind::Action { expression, code } => visitor.visit_action(expr, expression, code, cx),
        ExprKind::Sequence { elements } => visitor.visit_sequence(expr, elements, cx),
        ExprKind::Labeled { label, expression } => {
            visitor.visit_labeled(expr, label, expression, cx)
        }
        ExprKind::Text { expression } => visitor.visit_text(expr, expression, cx),
        ExprKind::SimpleAnd { expression } => visitor.visit_simple_and(expr, expression, cx),
        ExprKind::SimpleNot { expression } => visitor.visit_simple_not(expr, expression, cx),
        ExprKind::Optional { expression } => visitor.visit_optional(expr, expression, cx),
        ExprKind::ZeroOrMore { expression } => visitor.visit_zero_or_more(expr, expression, cx),
        ExprKind::OneOrMore { expression } => visitor.visit_one_or_more(expr, expression, cx),
        ExprKind::SemanticAnd { code } => visitor.visit_semantic_and(expr, code, cx),
        ExprKind::SemanticNot { code } => visitor.visit_semantic_not(expr, code, cx),
        ExprKind::RuleRef { name } => visitor.visit_rule_ref(expr, name, cx),
        ExprKind::Literal { .. } => visitor.visit_literal(expr, cx),
        ExprKind::Class { .. } => visitor.visit_class(expr, cx),
        ExprKind::Any => visitor.visit_any(expr, cx),
    }
}
