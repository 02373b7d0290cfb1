//! Boundary to the external JavaScript linter.
//!
//! The extracted code is handed to a [`ScriptLinter`]; its findings are reclassified
//! by a [`LintPolicy`] and merged into the grammar diagnostics.

mod aggregate;
mod options;
mod policy;
mod replay;

#[cfg(test)]
mod aggregate_tests;
#[cfg(test)]
mod replay_tests;

use serde::{Deserialize, Serialize};

pub use aggregate::aggregate_findings;
pub use options::LintOptions;
pub use policy::{Classification, LintPolicy, PatternTables, PolicyError};
pub use replay::{LintReport, ReplayLinter};

/// One finding of the external linter, in JSHint's report shape.
///
/// `line` and `character` are one-based positions in the linted text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintFinding {
    pub line: usize,
    pub character: usize,
    /// Message with placeholders filled in.
    #[serde(default)]
    pub reason: String,
    /// Message template, e.g. `'{a}' is not defined.`
    #[serde(default)]
    pub raw: String,
    /// The source line the finding points into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

impl LintFinding {
    pub fn new(line: usize, character: usize, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            line,
            character,
            reason: raw.clone(),
            raw,
            evidence: None,
        }
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }
}

pub trait ScriptLinter {
    /// Lint `source` with the given options.
    fn lint(&self, source: &str, options: &LintOptions) -> Vec<LintFinding>;

    /// Parse `source` without running it and report whether it is valid JavaScript.
    fn is_valid_syntax(&self, source: &str) -> bool;
}

impl<L: ScriptLinter + ?Sized> ScriptLinter for &L {
    fn lint(&self, source: &str, options: &LintOptions) -> Vec<LintFinding> {
        (**self).lint(source, options)
    }

    fn is_valid_syntax(&self, source: &str) -> bool {
        (**self).is_valid_syntax(source)
    }
}
