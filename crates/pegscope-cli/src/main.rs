mod cli;
mod commands;

use cli::{CheckParams, RewriteParams, ScopesParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("rewrite", m)) => {
            let params = RewriteParams::from_matches(m);
            commands::rewrite::run(params.into());
        }
        Some(("scopes", m)) => {
            let params = ScopesParams::from_matches(m);
            commands::scopes::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Logs go to stderr, filtered by `PEGSCOPE_LOG` (e.g. `PEGSCOPE_LOG=pegscope_lib=debug`).
fn init_logging() {
    let filter = EnvFilter::try_from_env("PEGSCOPE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
