use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use pegscope_lib::LintOptions;
use pegscope_lib::ast::{AstError, PegjsOutput};
use pegscope_lib::lint::ReplayLinter;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("'{}': {source}", .path.display())]
    Ast { path: PathBuf, source: AstError },

    #[error("'{}': invalid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("grammar cannot be empty")]
    EmptyGrammar,
}

/// Grammar text from a file, or from stdin for "-".
pub fn load_grammar(path: &Path) -> Result<String, LoadError> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        buf
    } else {
        read(path)?
    };

    if text.trim().is_empty() {
        return Err(LoadError::EmptyGrammar);
    }
    Ok(text)
}

pub fn load_ast(path: &Path) -> Result<PegjsOutput, LoadError> {
    let json = read(path)?;
    PegjsOutput::from_json(&json).map_err(|source| LoadError::Ast {
        path: path.to_owned(),
        source,
    })
}

/// Linter options from a JSON file, defaults when no file is given.
pub fn load_options(path: Option<&Path>) -> Result<LintOptions, LoadError> {
    let Some(path) = path else {
        return Ok(LintOptions::default());
    };
    let json = read(path)?;
    LintOptions::from_json(&json).map_err(|source| json_error(path, source))
}

/// Recorded linter report; without one, the code counts as valid with no findings.
pub fn load_linter(path: Option<&Path>) -> Result<ReplayLinter, LoadError> {
    let Some(path) = path else {
        return Ok(ReplayLinter::valid());
    };
    let json = read(path)?;
    ReplayLinter::from_json(&json).map_err(|source| json_error(path, source))
}

/// Display name for diagnostics.
pub fn display_path(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_owned()
    } else {
        path.to_string_lossy().into_owned()
    }
}

/// Print `error: ...` and exit on failure.
pub fn or_exit<T, E: std::fmt::Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|err| {
        eprintln!("error: {}", err);
        std::process::exit(1);
    })
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_owned(),
        source,
    })
}

fn json_error(path: &Path, source: serde_json::Error) -> LoadError {
    LoadError::Json {
        path: path.to_owned(),
        source,
    }
}
