use std::path::PathBuf;

use pegscope_lib::Analyzer;

use super::loader::{display_path, load_ast, load_grammar, load_linter, load_options, or_exit};

pub struct CheckArgs {
    pub grammar_path: PathBuf,
    pub ast_path: PathBuf,
    pub lint_report: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    tracing::debug!(grammar = %args.grammar_path.display(), ast = %args.ast_path.display(), "check");
    let source = or_exit(load_grammar(&args.grammar_path));
    let parser = or_exit(load_ast(&args.ast_path));
    let options = or_exit(load_options(args.config.as_deref()));
    let linter = or_exit(load_linter(args.lint_report.as_deref()));

    let analysis = Analyzer::new(parser, linter)
        .with_options(options)
        .analyze(&source);

    let diagnostics = analysis.diagnostics();
    let is_valid = if args.strict {
        !diagnostics.has_errors() && !diagnostics.has_warnings()
    } else {
        analysis.is_ok()
    };

    if args.json {
        let report = or_exit(serde_json::to_string_pretty(&analysis.to_report()));
        println!("{}", report);
    } else if !diagnostics.is_empty() {
        let path = display_path(&args.grammar_path);
        eprint!(
            "{}",
            diagnostics
                .printer()
                .source(&source)
                .path(&path)
                .colored(args.color)
                .render()
        );
    }

    if !is_valid {
        std::process::exit(1);
    }

    // Silent on success in text mode
}
