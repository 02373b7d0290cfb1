use std::io::{self, IsTerminal};

mod args;
mod commands;
mod dispatch;

#[cfg(test)]
mod dispatch_tests;

pub use commands::build_cli;
pub use dispatch::{CheckParams, RewriteParams, ScopesParams};

/// `--color` setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Whether snippets get ANSI styling.
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            // diagnostics go to stderr, reports to stdout
            Self::Auto => io::stdout().is_terminal() && io::stderr().is_terminal(),
        }
    }
}

/// How `check` prints its result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Annotated source snippets on stderr.
    #[default]
    Text,
    /// The analysis report as JSON on stdout.
    Json,
}
