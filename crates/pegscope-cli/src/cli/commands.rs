//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("pegscope")
        .about("Label-scope analysis and action-code linting for PEG.js grammars")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(rewrite_command())
        .subcommand(scopes_command())
}

/// Analyze a grammar and report diagnostics.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Analyze a grammar and report diagnostics")
        .override_usage(
            "\
  pegscope check <GRAMMAR> --ast <AST_JSON>
  pegscope check <GRAMMAR> --ast <AST_JSON> --lint-report <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  pegscope check grammar.pegjs --ast grammar.json                  # scopes and rules only
  pegscope check grammar.pegjs --ast grammar.json --lint-report lint.json
  pegscope check grammar.pegjs --ast grammar.json --format json    # analysis report
  cat grammar.pegjs | pegscope check - --ast grammar.json --strict"#,
        )
        .arg(grammar_path_arg())
        .arg(ast_arg())
        .arg(lint_report_arg())
        .arg(config_arg())
        .arg(format_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Print the JavaScript extracted from actions and predicates.
pub fn rewrite_command() -> Command {
    Command::new("rewrite")
        .about("Print the JavaScript extracted from actions and predicates")
        .override_usage("  pegscope rewrite <GRAMMAR> --ast <AST_JSON> [-o <FILE>]")
        .after_help(
            r#"EXAMPLES:
  pegscope rewrite grammar.pegjs --ast grammar.json
  pegscope rewrite grammar.pegjs --ast grammar.json -o actions.js"#,
        )
        .arg(grammar_path_arg())
        .arg(ast_arg())
        .arg(output_file_arg())
}

/// Print the label scopes of every rule.
pub fn scopes_command() -> Command {
    Command::new("scopes")
        .about("Print the label scopes of every rule")
        .override_usage("  pegscope scopes <GRAMMAR> --ast <AST_JSON>")
        .after_help(
            r#"EXAMPLES:
  pegscope scopes grammar.pegjs --ast grammar.json
  pegscope scopes grammar.pegjs --ast grammar.json --empty --no-captures"#,
        )
        .arg(grammar_path_arg())
        .arg(ast_arg())
        .arg(empty_scopes_arg())
        .arg(no_captures_arg())
        .arg(color_arg())
}
