//! pegscope: label-scope analysis and action-code extraction for PEG.js grammars.
//!
//! The grammar text is parsed by an external grammar parser (anything implementing
//! [`GrammarParser`]) and the extracted action code is checked by an external linter
//! (anything implementing [`ScriptLinter`]). This crate owns everything in between:
//! - `ast` - grammar AST model, node ids, JSON adapter, programmatic builder
//! - `analyze` - visitor, scope builder, label usage and rule reference checks
//! - `rewrite` - synthesis of position-preserving JavaScript from embedded code
//! - `lint` - linter boundary, options, and finding reclassification
//! - `diagnostics` - diagnostic collection and rendering
//! - `analyzer` - the [`Analyzer`] facade running the whole pipeline
//!
//! # Example
//!
//! ```
//! use pegscope_lib::{Analyzer, AstBuilder, GrammarError};
//! use pegscope_lib::lint::ReplayLinter;
//!
//! let source = "start = 'a'";
//! let parser = |text: &str| -> Result<_, GrammarError> {
//!     let b = AstBuilder::new(text);
//!     let lit = b.literal(b.span("'a'"), "a");
//!     Ok(b.grammar(None, vec![b.rule(b.span(text), "start", lit)]))
//! };
//!
//! let analysis = Analyzer::new(parser, ReplayLinter::valid()).analyze(source);
//! assert!(analysis.is_ok());
//! assert!(analysis.diagnostics().is_empty());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod analyzer;
pub mod ast;
pub mod diagnostics;
pub mod lint;
pub mod rewrite;
pub mod source;
mod utils;

#[cfg(test)]
pub mod test_utils;

pub use analyzer::{Analysis, AnalysisReport, Analyzer};
pub use ast::{AstBuilder, Grammar, GrammarError, GrammarParser, Location, NodeId, Point};
pub use diagnostics::{Diagnostic, Diagnostics, DiagnosticsPrinter, Linter, Severity};
pub use lint::{LintFinding, LintOptions, LintPolicy, ScriptLinter};
pub use source::SourceText;

/// Errors surfaced by the fallible entry points of the library.
///
/// The [`Analyzer`] itself never returns these; it turns every expected failure
/// into diagnostics. They show up when callers drive the pieces directly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Ast(#[from] ast::AstError),

    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Rewrite(#[from] rewrite::RewriteError),

    #[error(transparent)]
    Policy(#[from] lint::PolicyError),
}

/// Result type for library operations.
pub type Result<T> = std::result::Result<T, Error>;
