use std::fs;
use std::path::PathBuf;

use pegscope_lib::ast::PegjsOutput;
use pegscope_lib::diagnostics::Diagnostics;
use pegscope_lib::{GrammarParser, SourceText, analyze, rewrite};

use super::loader::{load_ast, load_grammar, or_exit};

pub struct RewriteArgs {
    pub grammar_path: PathBuf,
    pub ast_path: PathBuf,
    pub output: Option<PathBuf>,
}

pub fn run(args: RewriteArgs) {
    let source = or_exit(load_grammar(&args.grammar_path));
    let parser = or_exit(load_ast(&args.ast_path));
    let code = or_exit(extract(&parser, &source));

    match &args.output {
        Some(path) => {
            or_exit(fs::write(path, code).map_err(|e| {
                format!("failed to write '{}': {}", path.display(), e)
            }));
        }
        None => println!("{}", code),
    }
}

fn extract(parser: &PegjsOutput, source: &str) -> pegscope_lib::Result<String> {
    let grammar = parser.parse(source)?;
    // Grammar diagnostics are the job of `check`.
    let scopes = analyze::build_scopes(&grammar, &mut Diagnostics::new());
    let synthetic = rewrite::synthesize(&grammar, &SourceText::new(source), &scopes)?;
    Ok(synthetic.into_text())
}
