//! Boundary to the external grammar parser.
//!
//! pegscope never parses grammar text itself. A [`GrammarParser`] turns text into a
//! [`Grammar`] or a located [`GrammarError`]; [`PegjsOutput`] adapts the JSON that the
//! PEG.js parser prints for either outcome.

use serde::Deserialize;

use super::nodes::{AstError, Grammar, Location};

/// Grammar text rejected by the grammar parser.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GrammarError {
    pub message: String,
    pub location: Option<Location>,
}

impl GrammarError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

pub trait GrammarParser {
    fn parse(&self, source: &str) -> Result<Grammar, GrammarError>;
}

impl<F> GrammarParser for F
where
    F: Fn(&str) -> Result<Grammar, GrammarError>,
{
    fn parse(&self, source: &str) -> Result<Grammar, GrammarError> {
        self(source)
    }
}

/// Output of one run of the PEG.js grammar parser, recorded as JSON.
///
/// The parser either produced an AST or threw a `SyntaxError` carrying a message and,
/// usually, a location.
#[derive(Clone, Debug, PartialEq)]
pub enum PegjsOutput {
    Parsed(Grammar),
    Failed(GrammarError),
}

#[derive(Deserialize)]
struct RecordedError {
    message: String,
    #[serde(default)]
    location: Option<Location>,
}

impl PegjsOutput {
    pub fn from_json(json: &str) -> Result<Self, AstError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, AstError> {
        let is_ast = value.get("rules").is_some();
        if is_ast {
            return Ok(Self::Parsed(Grammar::from_value(value)?));
        }
        let recorded: RecordedError = serde_json::from_value(value)?;
        Ok(Self::Failed(GrammarError {
            message: recorded.message,
            location: recorded.location,
        }))
    }
}

/// Replays the recorded outcome regardless of the text handed in.
impl GrammarParser for PegjsOutput {
    fn parse(&self, _source: &str) -> Result<Grammar, GrammarError> {
        match self {
            PegjsOutput::Parsed(grammar) => Ok(grammar.clone()),
            PegjsOutput::Failed(err) => Err(err.clone()),
        }
    }
}
