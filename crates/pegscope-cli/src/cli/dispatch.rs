//! `ArgMatches` to typed parameters, and parameters to command arguments.

use std::path::PathBuf;

use clap::ArgMatches;

use super::{ColorChoice, OutputFormat};
use crate::commands::check::CheckArgs;
use crate::commands::rewrite::RewriteArgs;
use crate::commands::scopes::ScopesArgs;

pub struct CheckParams {
    pub grammar_path: PathBuf,
    pub ast_path: PathBuf,
    pub lint_report: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: required_path(m, "grammar_path"),
            ast_path: required_path(m, "ast"),
            lint_report: m.get_one::<PathBuf>("lint_report").cloned(),
            config: m.get_one::<PathBuf>("config").cloned(),
            format: parse_format(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            ast_path: p.ast_path,
            lint_report: p.lint_report,
            config: p.config,
            json: p.format == OutputFormat::Json,
            strict: p.strict,
            color: p.color.enabled(),
        }
    }
}

pub struct RewriteParams {
    pub grammar_path: PathBuf,
    pub ast_path: PathBuf,
    pub output: Option<PathBuf>,
}

impl RewriteParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: required_path(m, "grammar_path"),
            ast_path: required_path(m, "ast"),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<RewriteParams> for RewriteArgs {
    fn from(p: RewriteParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            ast_path: p.ast_path,
            output: p.output,
        }
    }
}

pub struct ScopesParams {
    pub grammar_path: PathBuf,
    pub ast_path: PathBuf,
    pub empty: bool,
    pub captures: bool,
    pub color: ColorChoice,
}

impl ScopesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: required_path(m, "grammar_path"),
            ast_path: required_path(m, "ast"),
            empty: m.get_flag("empty"),
            captures: !m.get_flag("no_captures"),
            color: parse_color(m),
        }
    }
}

impl From<ScopesParams> for ScopesArgs {
    fn from(p: ScopesParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            ast_path: p.ast_path,
            empty: p.empty,
            captures: p.captures,
            color: p.color.enabled(),
        }
    }
}

/// Required args are enforced by clap; an empty path only shows up in hand-built matches.
fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}
