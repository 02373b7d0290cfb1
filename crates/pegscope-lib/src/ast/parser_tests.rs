use super::nodes::{Grammar, Location, Point};
use super::parser::{GrammarError, GrammarParser, PegjsOutput};

const EMPTY_RULE_AST: &str = r#"{
    "type": "grammar",
    "rules": [
        {
            "type": "rule",
            "name": "start",
            "expression": {
                "type": "literal",
                "value": "a",
                "ignoreCase": false,
                "location": {
                    "start": { "offset": 8, "line": 1, "column": 9 },
                    "end": { "offset": 11, "line": 1, "column": 12 }
                }
            },
            "location": {
                "start": { "offset": 0, "line": 1, "column": 1 },
                "end": { "offset": 11, "line": 1, "column": 12 }
            }
        }
    ],
    "location": {
        "start": { "offset": 0, "line": 1, "column": 1 },
        "end": { "offset": 11, "line": 1, "column": 12 }
    }
}"#;

#[test]
fn recorded_ast_replays_as_parse_result() {
    let output = PegjsOutput::from_json(EMPTY_RULE_AST).unwrap();
    let grammar = output.parse("start = 'a'").unwrap();

    assert_eq!(grammar.rules[0].name, "start");
    assert!(grammar.initializer.is_none());
}

#[test]
fn recorded_error_replays_as_grammar_error() {
    let json = r#"{
        "name": "SyntaxError",
        "message": "Expected \"=\" or string but \"'\" found.",
        "location": {
            "start": { "offset": 6, "line": 1, "column": 7 },
            "end": { "offset": 7, "line": 1, "column": 8 }
        }
    }"#;
    let output = PegjsOutput::from_json(json).unwrap();
    let err = output.parse("start 'a'").unwrap_err();

    assert_eq!(err.message, "Expected \"=\" or string but \"'\" found.");
    assert_eq!(err.location.unwrap().start.column, 7);
}

#[test]
fn recorded_error_without_location() {
    let output = PegjsOutput::from_json(r#"{ "message": "boom" }"#).unwrap();
    assert_eq!(
        output,
        PegjsOutput::Failed(GrammarError {
            message: "boom".into(),
            location: None
        })
    );
}

#[test]
fn malformed_recording_is_an_ast_error() {
    assert!(PegjsOutput::from_json("[1, 2]").is_err());
    assert!(PegjsOutput::from_json("{ \"rules\": 3 }").is_err());
}

#[test]
fn closures_are_parsers() {
    let location = Location {
        start: Point {
            offset: 0,
            line: 1,
            column: 1,
        },
        end: Point {
            offset: 1,
            line: 1,
            column: 2,
        },
    };
    let parser = move |_: &str| -> Result<Grammar, GrammarError> {
        Err(GrammarError::new("Expected rule.").at(location))
    };

    let err = parser.parse("=").unwrap_err();
    assert_eq!(err.to_string(), "Expected rule.");
    assert_eq!(err.location, Some(location));
}
