use crate::diagnostics::{DiagnosticKind, Diagnostics, Position};

use super::{LintFinding, LintPolicy};

/// Reclassify linter findings and add them to `diag`.
///
/// Findings are positioned on the extracted source, which keeps every code fragment
/// at its grammar line and column, so they are reported as-is (converted to
/// zero-based). Returns the number of findings kept.
pub fn aggregate_findings(
    policy: &LintPolicy,
    findings: &[LintFinding],
    code_valid: bool,
    diag: &mut Diagnostics,
) -> usize {
    let mut kept = 0;
    for finding in findings {
        let Some(class) = policy.classify(finding, code_valid) else {
            tracing::trace!(raw = %finding.raw, line = finding.line, "lint finding suppressed");
            continue;
        };
        let start = Position::new(
            finding.line.saturating_sub(1),
            finding.character.saturating_sub(1),
        );
        diag.report(DiagnosticKind::LintFinding, start)
            .message(class.text)
            .severity(class.severity)
            .emit();
        kept += 1;
    }
    kept
}
