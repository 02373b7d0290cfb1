use indoc::indoc;

use super::{LintFinding, LintOptions, ReplayLinter, ScriptLinter};

#[test]
fn replays_recorded_jshint_errors() {
    let json = indoc! {r#"
        {
          "valid": false,
          "findings": [
            {
              "id": "(error)",
              "raw": "Missing semicolon.",
              "code": "W033",
              "evidence": "function l$l0 (a){ return a }l$l0.t=true;",
              "line": 1,
              "character": 29,
              "reason": "Missing semicolon."
            },
            null
          ]
        }
    "#};
    let linter = ReplayLinter::from_json(json).unwrap();

    assert!(!linter.is_valid_syntax("anything"));
    let findings = linter.lint("anything", &LintOptions::default());
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].raw, "Missing semicolon.");
    assert_eq!(findings[0].character, 29);
    assert!(findings[0].evidence.is_some());
}

#[test]
fn missing_fields_default_to_valid_and_empty() {
    let linter = ReplayLinter::from_json("{}").unwrap();
    assert!(linter.is_valid_syntax(""));
    assert!(linter.lint("", &LintOptions::default()).is_empty());
    assert_eq!(linter, ReplayLinter::valid());
}

#[test]
fn maxerr_caps_findings() {
    let report = super::LintReport {
        valid: true,
        findings: vec![
            LintFinding::new(1, 1, "a"),
            LintFinding::new(2, 1, "b"),
            LintFinding::new(3, 1, "c"),
        ],
    };
    let linter = ReplayLinter::new(report);
    let options = LintOptions::default().maxerr(2);
    assert_eq!(linter.lint("", &options).len(), 2);
}

#[test]
fn options_serialize_as_jshint_options() {
    let options = LintOptions::default().with_global("parser");
    let json = serde_json::to_value(&options).unwrap();

    assert_eq!(json["undef"], true);
    assert_eq!(json["onevar"], false);
    assert_eq!(json["maxerr"], 100_000);
    assert_eq!(
        json["predef"],
        serde_json::json!(["text", "location", "error", "expected", "parser"])
    );
    assert!(json.get("wrapWidth").is_none());
}

#[test]
fn options_load_partial_json() {
    let options = LintOptions::from_json(r#"{ "undef": false, "wrapWidth": 60 }"#).unwrap();
    assert!(!options.undef);
    assert!(options.esnext);
    assert_eq!(options.wrap_width, 60);
    assert_eq!(options.predef.len(), 4);
}
