//! Semantic analysis of a grammar: label scopes, label usage, rule references.
//!
//! Results live in side tables keyed by [`NodeId`]; the AST is never touched.

pub mod labels;
pub mod printer;
pub mod scope;
mod scope_builder;
pub mod symbol_table;
pub mod visitor;

#[cfg(test)]
mod scope_builder_tests;
#[cfg(test)]
mod scope_tests;

use std::collections::HashMap;

pub use printer::ScopePrinter;
pub use scope::{LabelId, LabelRecord, ScopeId, ScopeTree};
pub use symbol_table::{RuleEntry, RuleReferences, RuleTable};
pub use visitor::Visitor;

use crate::ast::{Grammar, NodeId};
use crate::diagnostics::Diagnostics;

use scope_builder::ScopeBuilder;

/// Everything the scope pass learned about one grammar.
#[derive(Clone, Debug)]
pub struct ScopeAnalysis {
    scopes: ScopeTree,
    scope_of: HashMap<NodeId, ScopeId>,
    captures: HashMap<NodeId, Vec<LabelId>>,
    rule_scopes: Vec<(NodeId, ScopeId)>,
    rules: RuleTable,
    references: RuleReferences,
}

/// Run all grammar-level checks.
///
/// Duplicate rules and labels are reported while scopes are built; unseen labels and
/// unreferenced rules once the walk is complete.
pub fn analyze(grammar: &Grammar, diag: &mut Diagnostics) -> ScopeAnalysis {
    let analysis = build_scopes(grammar, diag);
    let unseen = labels::report_unseen(&analysis.scopes, diag);
    symbol_table::check_unreferenced(&analysis.rules, &analysis.references, diag);

    tracing::debug!(
        rules = analysis.rules.len(),
        scopes = analysis.scopes.scope_count(),
        labels = analysis.scopes.label_count(),
        unseen,
        "grammar analyzed"
    );
    analysis
}

/// Only the scope walk: environments, captures, rule and reference tables.
pub fn build_scopes(grammar: &Grammar, diag: &mut Diagnostics) -> ScopeAnalysis {
    ScopeBuilder::new(diag).build(grammar)
}

impl ScopeAnalysis {
    pub fn scopes(&self) -> &ScopeTree {
        &self.scopes
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn references(&self) -> &RuleReferences {
        &self.references
    }

    /// Environment valid at a node. Every visited node has one.
    pub fn scope_of(&self, node: NodeId) -> Option<ScopeId> {
        self.scope_of.get(&node).copied()
    }

    /// Root environment of each rule, in declaration order.
    pub fn rule_scopes(&self) -> impl Iterator<Item = (NodeId, ScopeId)> + '_ {
        self.rule_scopes.iter().copied()
    }

    /// Labels captured by an action or semantic predicate.
    pub fn captured(&self, node: NodeId) -> Option<&[LabelId]> {
        self.captures.get(&node).map(Vec::as_slice)
    }

    /// Names of the labels captured by an action or semantic predicate.
    pub fn labels_in_scope(&self, node: NodeId) -> Option<Vec<&str>> {
        let labels = self.captured(node)?;
        Some(
            labels
                .iter()
                .map(|&label| self.scopes.label(label).name.as_str())
                .collect(),
        )
    }
}
