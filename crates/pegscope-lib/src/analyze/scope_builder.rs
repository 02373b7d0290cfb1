//! Scope builder: threads label environments through every rule.
//!
//! Environment rules:
//! - every rule starts from its own empty root environment
//! - each choice alternative gets its own child environment
//! - a sequence binds into the environment it was handed, so later elements and an
//!   enclosing action see labels from earlier elements
//! - `labeled` binds into the current environment, then descends into a child
//! - `text`, `&`, `!`, `?`, `*`, `+` and actions descend into a child environment
//! - semantic predicates capture everything visible where they stand
//! - actions capture everything visible in their own environment after their
//!   expression was walked
//!
//! Captured labels are marked seen. Rule definitions and references are collected in
//! the same walk.

use std::collections::HashMap;

use crate::ast::{Expr, Grammar, Initializer, NodeId, Rule};
use crate::diagnostics::{DiagnosticKind, Diagnostics, Position};

use super::ScopeAnalysis;
use super::scope::{LabelId, ScopeId, ScopeTree};
use super::symbol_table::{RuleReferences, RuleTable};
use super::visitor::{Visitor, walk_expr};

pub(super) struct ScopeBuilder<'d> {
    diag: &'d mut Diagnostics,
    scopes: ScopeTree,
    scope_of: HashMap<NodeId, ScopeId>,
    captures: HashMap<NodeId, Vec<LabelId>>,
    rule_scopes: Vec<(NodeId, ScopeId)>,
    rules: RuleTable,
    references: RuleReferences,
}

impl<'d> ScopeBuilder<'d> {
    pub(super) fn new(diag: &'d mut Diagnostics) -> Self {
        Self {
            diag,
            scopes: ScopeTree::new(),
            scope_of: HashMap::new(),
            captures: HashMap::new(),
            rule_scopes: Vec::new(),
            rules: RuleTable::new(),
            references: RuleReferences::new(),
        }
    }

    pub(super) fn build(mut self, grammar: &Grammar) -> ScopeAnalysis {
        self.visit_grammar(grammar, ScopeId::GRAMMAR);
        ScopeAnalysis {
            scopes: self.scopes,
            scope_of: self.scope_of,
            captures: self.captures,
            rule_scopes: self.rule_scopes,
            rules: self.rules,
            references: self.references,
        }
    }

    fn descend_forked(&mut self, expression: &Expr, env: ScopeId) {
        let child = self.scopes.fork(env);
        self.visit_expr(expression, child);
    }

    /// Record every label visible from `env` as the in-scope set of `node`.
    fn capture(&mut self, node: &Expr, env: ScopeId) {
        let labels = self.scopes.visible(env);
        for &label in &labels {
            self.scopes.mark_seen(label);
        }
        self.captures.insert(node.id(), labels);
    }
}

impl Visitor<ScopeId> for ScopeBuilder<'_> {
    fn visit_grammar(&mut self, grammar: &Grammar, env: ScopeId) {
        if let Some(initializer) = &grammar.initializer {
            self.visit_initializer(initializer, env);
        }
        for rule in &grammar.rules {
            let root = self.scopes.root();
            self.visit_rule(rule, root);
        }
    }

    fn visit_initializer(&mut self, initializer: &Initializer, env: ScopeId) {
        self.scope_of.insert(initializer.id(), env);
    }

    fn visit_rule(&mut self, rule: &Rule, env: ScopeId) {
        if let Err(first) = self.rules.declare(&rule.name, rule.location) {
            let first = first.location;
            self.diag
                .report(
                    DiagnosticKind::DuplicateRule,
                    Position::from_point(&rule.location.start),
                )
                .message(&rule.name)
                .previously_defined_at(&first)
                .emit();
        }
        self.scope_of.insert(rule.id(), env);
        self.rule_scopes.push((rule.id(), env));
        self.visit_expr(&rule.expression, env);
    }

    fn visit_expr(&mut self, expr: &Expr, env: ScopeId) {
        self.scope_of.insert(expr.id(), env);
        walk_expr(self, expr, env);
    }

    fn visit_choice(&mut self, _node: &Expr, alternatives: &[Expr], env: ScopeId) {
        for alternative in alternatives {
            self.descend_forked(alternative, env);
        }
    }

    fn visit_action(&mut self, node: &Expr, expression: &Expr, _code: &str, env: ScopeId) {
        let child = self.scopes.fork(env);
        self.visit_expr(expression, child);
        self.capture(node, child);
    }

    fn visit_labeled(&mut self, node: &Expr, label: &str, expression: &Expr, env: ScopeId) {
        // A label is not in scope inside its own expression.
        self.descend_forked(expression, env);
        if let Err(existing) = self.scopes.bind(env, label, node.location) {
            let first = self.scopes.label(existing).location;
            self.diag
                .report(
                    DiagnosticKind::DuplicateLabel,
                    Position::from_point(&node.location.start),
                )
                .message(label)
                .previously_defined_at(&first)
                .emit();
        }
    }

    fn visit_text(&mut self, _node: &Expr, expression: &Expr, env: ScopeId) {
        self.descend_forked(expression, env);
    }

    fn visit_simple_and(&mut self, _node: &Expr, expression: &Expr, env: ScopeId) {
        self.descend_forked(expression, env);
    }

    fn visit_simple_not(&mut self, _node: &Expr, expression: &Expr, env: ScopeId) {
        self.descend_forked(expression, env);
    }

    fn visit_optional(&mut self, _node: &Expr, expression: &Expr, env: ScopeId) {
        self.descend_forked(expression, env);
    }

    fn visit_zero_or_more(&mut self, _node: &Expr, expression: &Expr, env: ScopeId) {
        self.descend_forked(expression, env);
    }

    fn visit_one_or_more(&mut self, _node: &Expr, expression: &Expr, env: ScopeId) {
        self.descend_forked(expression, env);
    }

    fn visit_semantic_and(&mut self, node: &Expr, _code: &str, env: ScopeId) {
        self.capture(node, env);
    }

    fn visit_semantic_not(&mut self, node: &Expr, _code: &str, env: ScopeId) {
        self.capture(node, env);
    }

    fn visit_rule_ref(&mut self, _node: &Expr, name: &str, _env: ScopeId) {
        self.references.record(name);
    }
}
