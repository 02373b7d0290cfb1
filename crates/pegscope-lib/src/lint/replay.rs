//! A linter that replays a recorded report.
//!
//! Lets a run be reproduced without a JavaScript runtime: the linter and the syntax
//! probe are run once elsewhere and their results saved as JSON.

use serde::{Deserialize, Serialize};

use super::{LintFinding, LintOptions, ScriptLinter};

/// Recorded result of linting one extracted source.
///
/// JSHint pads its error list with `null` once `maxerr` is hit; those entries are
/// skipped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintReport {
    #[serde(default = "default_valid")]
    pub valid: bool,
    #[serde(default, deserialize_with = "skip_nulls")]
    pub findings: Vec<LintFinding>,
}

fn default_valid() -> bool {
    true
}

fn skip_nulls<'de, D>(deserializer: D) -> Result<Vec<LintFinding>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entries: Vec<Option<LintFinding>> = Deserialize::deserialize(deserializer)?;
    Ok(entries.into_iter().flatten().collect())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayLinter {
    report: LintReport,
}

impl ReplayLinter {
    pub fn new(report: LintReport) -> Self {
        Self { report }
    }

    /// No findings, code parses.
    pub fn valid() -> Self {
        Self::new(LintReport {
            valid: true,
            findings: Vec::new(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn report(&self) -> &LintReport {
        &self.report
    }
}

impl ScriptLinter for ReplayLinter {
    fn lint(&self, _source: &str, options: &LintOptions) -> Vec<LintFinding> {
        self.report
            .findings
            .iter()
            .take(options.maxerr)
            .cloned()
            .collect()
    }

    fn is_valid_syntax(&self, _source: &str) -> bool {
        self.report.valid
    }
}
