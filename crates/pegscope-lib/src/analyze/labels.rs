//! Labels that no action or semantic predicate can see.

use crate::diagnostics::{DiagnosticKind, Diagnostics};

use super::scope::ScopeTree;

/// Report every label that was never captured.
///
/// Runs after the scope builder. Scopes are never discarded, so one sweep over the
/// arena covers every environment of every rule, including ones nested inside choice
/// alternatives.
pub fn report_unseen(scopes: &ScopeTree, diag: &mut Diagnostics) -> usize {
    let mut reported = 0;
    for (_, record) in scopes.labels() {
        if record.is_seen() {
            continue;
        }
        diag.report_at(DiagnosticKind::UnusedLabel, &record.location)
            .message(&record.name)
            .emit();
        reported += 1;
    }
    reported
}
