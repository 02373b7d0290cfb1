//! The whole pipeline behind one call.
//!
//! parse → scopes and rule checks → code extraction → lint → one sorted diagnostic list.
//! Expected failures never escape [`Analyzer::analyze`]; they end up as diagnostics.

use std::time::{Duration, Instant};

use indexmap::IndexMap;
use serde::Serialize;

use crate::analyze::{self, ScopeAnalysis};
use crate::ast::{Grammar, GrammarError, GrammarParser, Location};
use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Position};
use crate::lint::{LintOptions, LintPolicy, ScriptLinter, aggregate_findings};
use crate::rewrite::{self, SyntheticSource};
use crate::source::SourceText;
use crate::utils::word_wrap;

pub struct Analyzer<P, L> {
    parser: P,
    linter: L,
    options: LintOptions,
    policy: LintPolicy,
}

impl<P: GrammarParser, L: ScriptLinter> Analyzer<P, L> {
    pub fn new(parser: P, linter: L) -> Self {
        Self {
            parser,
            linter,
            options: LintOptions::default(),
            policy: LintPolicy::default(),
        }
    }

    pub fn with_options(mut self, options: LintOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_policy(mut self, policy: LintPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn options(&self) -> &LintOptions {
        &self.options
    }

    /// Run a full analysis of `text`.
    pub fn analyze(&self, text: &str) -> Analysis {
        let started = Instant::now();
        let mut diag = Diagnostics::new();

        let grammar = match self.parser.parse(text) {
            Ok(grammar) => grammar,
            Err(err) => {
                tracing::debug!(error = %err.message, "grammar rejected by parser");
                self.report_parse_error(&err, &mut diag);
                return Analysis {
                    diagnostics: diag,
                    grammar: None,
                    scopes: None,
                    synthetic: None,
                    build_time: started.elapsed(),
                };
            }
        };

        let scopes = analyze::analyze(&grammar, &mut diag);

        let source = SourceText::new(text);
        let synthetic = match rewrite::synthesize(&grammar, &source, &scopes) {
            Ok(synthetic) => Some(synthetic),
            Err(err) => {
                tracing::warn!(%err, "code extraction failed, skipping lint");
                None
            }
        };

        if let Some(synthetic) = synthetic.as_ref().filter(|s| !s.is_blank()) {
            self.lint(synthetic, &mut diag);
        }

        diag.sort_by_position();
        let analysis = Analysis {
            diagnostics: diag,
            grammar: Some(grammar),
            scopes: Some(scopes),
            synthetic,
            build_time: started.elapsed(),
        };
        tracing::debug!(
            diagnostics = analysis.diagnostics.len(),
            ok = analysis.is_ok(),
            elapsed = ?analysis.build_time,
            "analysis finished"
        );
        analysis
    }

    fn report_parse_error(&self, err: &GrammarError, diag: &mut Diagnostics) {
        let message = word_wrap(&err.message, self.options.wrap_width);
        let builder = match &err.location {
            Some(location) => diag.report_at(DiagnosticKind::GrammarSyntax, location),
            None => diag.report(DiagnosticKind::GrammarSyntax, Position::new(0, 0)),
        };
        builder.message(message).emit();
    }

    fn lint(&self, synthetic: &SyntheticSource, diag: &mut Diagnostics) {
        let code = synthetic.text();
        let code_valid = self.linter.is_valid_syntax(code);
        let findings = self.linter.lint(code, &self.options);
        let kept = aggregate_findings(&self.policy, &findings, code_valid, diag);
        tracing::debug!(
            findings = findings.len(),
            kept,
            code_valid,
            "extracted code linted"
        );
    }
}

/// Result of one [`Analyzer::analyze`] run.
#[derive(Debug)]
pub struct Analysis {
    diagnostics: Diagnostics,
    grammar: Option<Grammar>,
    scopes: Option<ScopeAnalysis>,
    synthetic: Option<SyntheticSource>,
    build_time: Duration,
}

impl Analysis {
    /// All diagnostics, ordered by position.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// `true` when no error was reported.
    pub fn is_ok(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// Rule name to the location of its first definition. Empty if parsing failed.
    pub fn rules(&self) -> IndexMap<String, Location> {
        self.scopes
            .as_ref()
            .map(|scopes| scopes.rules().locations())
            .unwrap_or_default()
    }

    /// The grammar, unless the parser rejected the text.
    pub fn grammar(&self) -> Option<&Grammar> {
        self.grammar.as_ref()
    }

    pub fn scope_analysis(&self) -> Option<&ScopeAnalysis> {
        self.scopes.as_ref()
    }

    /// The extracted JavaScript, unless parsing or extraction failed.
    pub fn synthetic_source(&self) -> Option<&SyntheticSource> {
        self.synthetic.as_ref()
    }

    pub fn build_time(&self) -> Duration {
        self.build_time
    }

    pub fn to_report(&self) -> AnalysisReport {
        AnalysisReport {
            diagnostics: self.diagnostics.as_slice().to_vec(),
            rules: self.rules(),
            synthetic_source: self.synthetic.as_ref().map(|s| s.text().to_owned()),
            ok: self.is_ok(),
            build_time_ms: self.build_time.as_secs_f64() * 1000.0,
        }
    }
}

/// Serializable summary of an [`Analysis`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub diagnostics: Vec<Diagnostic>,
    pub rules: IndexMap<String, Location>,
    pub synthetic_source: Option<String>,
    pub ok: bool,
    pub build_time_ms: f64,
}
