//! Severity reclassification of linter findings.
//!
//! The linter sees action code wrapped in synthetic functions and reports plenty of
//! findings that are noise in a grammar. Findings are matched by their raw message
//! template against three prefix tables:
//! - `suppressed`: dropped
//! - `info`: stylistic, always info
//! - `errors`: error when the extracted code does not even parse, warning otherwise
//!
//! Anything else is a warning.

use regex_automata::meta::{BuildError, Regex};
use regex_automata::{Anchored, Input};
use serde::{Deserialize, Serialize};

use super::LintFinding;
use crate::diagnostics::Severity;

const MISSING_SEMICOLON: &str = "Missing semicolon.";
const NOT_DEFINED: &str = "'{a}' is not defined.";
const NEVER_USED: &str = "'{a}' is defined but never used.";

#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("invalid lint pattern: {0}")]
    Pattern(#[from] BuildError),
}

/// Raw-message prefix patterns, in regex syntax.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternTables {
    pub suppressed: Vec<String>,
    pub errors: Vec<String>,
    pub info: Vec<String>,
}

impl Default for PatternTables {
    fn default() -> Self {
        let owned = |patterns: &[&str]| patterns.iter().map(|p| p.to_string()).collect();
        Self {
            suppressed: owned(&["Bad for in variable '(.+)'.", "Missing \"use strict\""]),
            errors: owned(&[
                "Unexpected",
                "Expected ",
                "Confusing (plus|minus)",
                r"\{a\} unterminated regular expression",
                "Unclosed ",
                "Unmatched ",
                "Unbegun comment",
                "Bad invocation",
                "Missing space after",
                "Missing operator at",
                ".*in strict mode.$",
                "Duplicate key",
            ]),
            info: owned(&[
                "Expected an assignment",
                "Bad escapement of EOL",
                "Unexpected comma",
                "Unexpected space",
                "Missing radix parameter.",
                "A leading decimal point can",
                r"\['\{a\}'\] is better written in dot notation.",
                r"'\{a\}' used out of scope",
            ]),
        }
    }
}

/// Compiled prefix set. `None` when the table is empty.
#[derive(Clone, Debug)]
struct PrefixSet(Option<Regex>);

impl PrefixSet {
    fn new(patterns: &[String]) -> Result<Self, BuildError> {
        if patterns.is_empty() {
            return Ok(Self(None));
        }
        Ok(Self(Some(Regex::new_many(patterns)?)))
    }

    fn matches_start(&self, raw: &str) -> bool {
        let Some(regex) = &self.0 else {
            return false;
        };
        regex.is_match(Input::new(raw).anchored(Anchored::Yes))
    }
}

/// Severity and message a finding is reported with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub severity: Severity,
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct LintPolicy {
    tables: PatternTables,
    suppressed: PrefixSet,
    errors: PrefixSet,
    info: PrefixSet,
}

impl Default for LintPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl LintPolicy {
    pub fn new(tables: PatternTables) -> Result<Self, PolicyError> {
        Ok(Self {
            suppressed: PrefixSet::new(&tables.suppressed)?,
            errors: PrefixSet::new(&tables.errors)?,
            info: PrefixSet::new(&tables.info)?,
            tables,
        })
    }

    /// The built-in tables.
    pub fn standard() -> Self {
        Self::new(PatternTables::default()).expect("built-in lint patterns are valid")
    }

    pub fn tables(&self) -> &PatternTables {
        &self.tables
    }

    /// Decide how a finding is reported, or `None` to drop it.
    ///
    /// `code_valid` is the syntax probe verdict on the whole extracted source.
    pub fn classify(&self, finding: &LintFinding, code_valid: bool) -> Option<Classification> {
        let raw = finding.raw.as_str();
        if raw.is_empty() && finding.reason.is_empty() {
            return None;
        }
        let escalated = if code_valid {
            Severity::Warning
        } else {
            Severity::Error
        };
        let text = if finding.reason.is_empty() {
            raw.to_owned()
        } else {
            finding.reason.clone()
        };

        let severity = if raw == MISSING_SEMICOLON {
            if !code_valid && statement_follows(finding) {
                return Some(Classification {
                    severity: Severity::Error,
                    text: "Missing \";\" before statement".to_owned(),
                });
            }
            Severity::Info
        } else if self.suppressed.matches_start(raw) {
            return None;
        } else if self.info.matches_start(raw) {
            Severity::Info
        } else if self.errors.matches_start(raw) {
            escalated
        } else if raw == NOT_DEFINED {
            Severity::Warning
        } else if raw == NEVER_USED {
            Severity::Info
        } else {
            Severity::Warning
        };

        Some(Classification { severity, text })
    }
}

/// Whether the first non-blank character after the reported column starts a statement.
fn statement_follows(finding: &LintFinding) -> bool {
    let Some(evidence) = &finding.evidence else {
        return false;
    };
    let rest = evidence.encode_utf16().skip(finding.character);
    let next = char::decode_utf16(rest)
        .filter_map(Result::ok)
        .find(|c| !c.is_whitespace());
    matches!(next, Some(c) if c.is_ascii_alphanumeric() || matches!(c, '_' | '{' | '(' | '[' | '\'' | '"'))
}
