use std::path::PathBuf;

use pegscope_lib::Analyzer;
use pegscope_lib::analyze::ScopePrinter;
use pegscope_lib::lint::ReplayLinter;

use super::loader::{display_path, load_ast, load_grammar, or_exit};

pub struct ScopesArgs {
    pub grammar_path: PathBuf,
    pub ast_path: PathBuf,
    pub empty: bool,
    pub captures: bool,
    pub color: bool,
}

pub fn run(args: ScopesArgs) {
    let source = or_exit(load_grammar(&args.grammar_path));
    let parser = or_exit(load_ast(&args.ast_path));

    let analysis = Analyzer::new(parser, ReplayLinter::valid()).analyze(&source);

    let (Some(grammar), Some(scopes)) = (analysis.grammar(), analysis.scope_analysis()) else {
        let path = display_path(&args.grammar_path);
        eprint!(
            "{}",
            analysis
                .diagnostics()
                .printer()
                .source(&source)
                .path(&path)
                .colored(args.color)
                .render()
        );
        std::process::exit(1);
    };

    let dump = ScopePrinter::new(grammar, scopes)
        .with_empty_scopes(args.empty)
        .with_captures(args.captures)
        .dump();
    print!("{}", dump);
}
