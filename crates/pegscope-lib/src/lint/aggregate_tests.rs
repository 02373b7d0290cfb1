use super::{LintFinding, LintPolicy, aggregate_findings};
use crate::diagnostics::{Diagnostics, Linter, Position, Severity};

#[test]
fn findings_become_zero_based_diagnostics() {
    let findings = vec![
        LintFinding::new(3, 5, "'{a}' is not defined.").reason("'foo' is not defined."),
        LintFinding::new(1, 1, "Missing \"use strict\" statement."),
        LintFinding::new(2, 10, "'{a}' is defined but never used.").reason("'x' is defined but never used."),
    ];
    let mut diag = Diagnostics::new();
    let kept = aggregate_findings(&LintPolicy::standard(), &findings, true, &mut diag);

    assert_eq!(kept, 2);
    let all = diag.as_slice();
    assert_eq!(all[0].start(), Position::new(2, 4));
    assert_eq!(all[0].text(), "'foo' is not defined.");
    assert_eq!(all[0].severity(), Severity::Warning);
    assert_eq!(all[0].linter(), Linter::LintService);
    assert_eq!(all[1].start(), Position::new(1, 9));
    assert_eq!(all[1].severity(), Severity::Info);
}

#[test]
fn invalid_code_escalates() {
    let findings = vec![LintFinding::new(1, 3, "Unmatched '{a}'.").reason("Unmatched '{'.")];
    let mut diag = Diagnostics::new();
    aggregate_findings(&LintPolicy::standard(), &findings, false, &mut diag);

    assert!(diag.has_errors());
    assert_eq!(diag.as_slice()[0].end(), None);
}

#[test]
fn zero_positions_saturate() {
    let findings = vec![LintFinding::new(0, 0, "Odd.")];
    let mut diag = Diagnostics::new();
    aggregate_findings(&LintPolicy::standard(), &findings, true, &mut diag);
    assert_eq!(diag.as_slice()[0].start(), Position::new(0, 0));
}
