//! Arguments shared by the subcommands, one builder per flag.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Grammar source file (positional, "-" for stdin).
pub fn grammar_path_arg() -> Arg {
    Arg::new("grammar_path")
        .value_name("GRAMMAR")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Grammar file (use \"-\" for stdin)")
}

/// Parser output for the grammar (--ast).
pub fn ast_arg() -> Arg {
    Arg::new("ast")
        .long("ast")
        .value_name("AST_JSON")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON printed by the grammar parser: the AST or a parse error")
}

/// Recorded linter report (--lint-report).
pub fn lint_report_arg() -> Arg {
    Arg::new("lint_report")
        .long("lint-report")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Linter report for the extracted code ({\"valid\": .., \"findings\": [..]})")
}

/// Linter options file (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Linter options as JSON (unset fields keep their defaults)")
}

/// `--format text|json`.
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format")
}

/// `--strict`: warnings fail the run as well.
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// `--color auto|always|never`.
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// `-o/--output`, stdout when absent.
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// List scopes without labels too (--empty).
pub fn empty_scopes_arg() -> Arg {
    Arg::new("empty")
        .long("empty")
        .action(ArgAction::SetTrue)
        .help("Also list scopes that bind no labels")
}

/// Leave out captured label sets (--no-captures).
pub fn no_captures_arg() -> Arg {
    Arg::new("no_captures")
        .long("no-captures")
        .action(ArgAction::SetTrue)
        .help("Don't list the labels each action and predicate captures")
}
