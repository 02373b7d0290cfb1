//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Required inputs: grammar and AST are mandatory
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Value validation: formats and color modes are restricted

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, rewrite_command, scopes_command};

#[test]
fn check_extracts_all_params() {
    let cmd = check_command();
    let result = cmd.try_get_matches_from([
        "check",
        "grammar.pegjs",
        "--ast",
        "grammar.json",
        "--lint-report",
        "lint.json",
        "--config",
        "jshint.json",
        "--format",
        "json",
        "--strict",
        "--color",
        "never",
    ]);
    assert!(result.is_ok(), "check should parse: {:?}", result.err());

    let params = CheckParams::from_matches(&result.unwrap());
    assert_eq!(params.grammar_path, PathBuf::from("grammar.pegjs"));
    assert_eq!(params.ast_path, PathBuf::from("grammar.json"));
    assert_eq!(params.lint_report, Some(PathBuf::from("lint.json")));
    assert_eq!(params.config, Some(PathBuf::from("jshint.json")));
    assert_eq!(params.format, OutputFormat::Json);
    assert!(params.strict);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn check_defaults() {
    let cmd = check_command();
    let m = cmd
        .try_get_matches_from(["check", "-", "--ast", "grammar.json"])
        .unwrap();

    let params = CheckParams::from_matches(&m);
    assert_eq!(params.grammar_path, PathBuf::from("-"));
    assert_eq!(params.lint_report, None);
    assert_eq!(params.config, None);
    assert_eq!(params.format, OutputFormat::Text);
    assert!(!params.strict);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_requires_ast() {
    let cmd = check_command();
    let result = cmd.try_get_matches_from(["check", "grammar.pegjs"]);
    assert!(result.is_err(), "check without --ast should fail");
}

#[test]
fn check_requires_grammar() {
    let cmd = check_command();
    let result = cmd.try_get_matches_from(["check", "--ast", "grammar.json"]);
    assert!(result.is_err(), "check without GRAMMAR should fail");
}

#[test]
fn check_rejects_unknown_format() {
    let cmd = check_command();
    let result =
        cmd.try_get_matches_from(["check", "g.pegjs", "--ast", "g.json", "--format", "xml"]);
    assert!(result.is_err(), "--format xml should be rejected");
}

#[test]
fn check_params_convert_to_args() {
    let cmd = check_command();
    let m = cmd
        .try_get_matches_from([
            "check", "g.pegjs", "--ast", "g.json", "--format", "json", "--color", "always",
        ])
        .unwrap();

    let args: crate::commands::check::CheckArgs = CheckParams::from_matches(&m).into();
    assert!(args.json);
    assert!(args.color);
    assert!(!args.strict);
}

#[test]
fn rewrite_extracts_output() {
    let cmd = rewrite_command();
    let m = cmd
        .try_get_matches_from(["rewrite", "g.pegjs", "--ast", "g.json", "-o", "out.js"])
        .unwrap();

    let params = RewriteParams::from_matches(&m);
    assert_eq!(params.grammar_path, PathBuf::from("g.pegjs"));
    assert_eq!(params.output, Some(PathBuf::from("out.js")));
}

#[test]
fn rewrite_does_not_take_check_flags() {
    let cmd = rewrite_command();
    let result = cmd.try_get_matches_from(["rewrite", "g.pegjs", "--ast", "g.json", "--strict"]);
    assert!(result.is_err(), "rewrite should not accept --strict");
}

#[test]
fn scopes_flags() {
    let cmd = scopes_command();
    let m = cmd
        .try_get_matches_from(["scopes", "g.pegjs", "--ast", "g.json", "--empty", "--no-captures"])
        .unwrap();

    let params = ScopesParams::from_matches(&m);
    assert!(params.empty);
    assert!(!params.captures);
}

#[test]
fn scopes_defaults_to_captures() {
    let cmd = scopes_command();
    let m = cmd
        .try_get_matches_from(["scopes", "g.pegjs", "--ast", "g.json"])
        .unwrap();

    let params = ScopesParams::from_matches(&m);
    assert!(!params.empty);
    assert!(params.captures);
}

#[test]
fn check_help_lists_inputs() {
    let mut cmd = check_command();
    let help = cmd.render_help().to_string();

    assert!(help.contains("--ast"), "check help should show --ast");
    assert!(help.contains("--lint-report"), "check help should show --lint-report");
    assert!(!help.contains("--output"), "check help should not show --output");
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["pegscope"]);
    assert!(result.is_err());
}
