use crate::ast::{AstBuilder, Expr};
use crate::diagnostics::{DiagnosticKind, Position, Severity};
use crate::test_utils::{analyze_grammar, labeled_lit, lit, single_rule, texts};

fn collect_exprs<'a>(expr: &'a Expr, out: &mut Vec<&'a Expr>) {
    out.push(expr);
    for child in expr.children() {
        collect_exprs(child, out);
    }
}

#[test]
fn sequence_labels_visible_to_enclosing_action() {
    let src = "start = a:'x' b:'y' { return a + b; }";
    let b = AstBuilder::new(src);
    let la = labeled_lit(&b, "a:'x'");
    let lb = labeled_lit(&b, "b:'y'");
    let seq = b.sequence(b.join(la.location, lb.location), vec![la, lb]);
    let action = b.action(b.span("a:'x' b:'y' { return a + b; }"), seq, " return a + b; ");
    let grammar = single_rule(&b, src, "start", action);

    let (analysis, diag) = analyze_grammar(&grammar);

    assert!(diag.is_empty(), "{:?}", texts(&diag));
    let action = &grammar.rules[0].expression;
    assert_eq!(analysis.labels_in_scope(action.id()), Some(vec!["a", "b"]));
}

#[test]
fn choice_alternatives_do_not_share_labels() {
    let src = "start = a:'x' { return a; } / b:'y' { return b; }";
    let b = AstBuilder::new(src);
    let first = b.action(
        b.span("a:'x' { return a; }"),
        labeled_lit(&b, "a:'x'"),
        " return a; ",
    );
    let second = b.action(
        b.span("b:'y' { return b; }"),
        labeled_lit(&b, "b:'y'"),
        " return b; ",
    );
    let choice = b.choice(b.join(first.location, second.location), vec![first, second]);
    let grammar = single_rule(&b, src, "start", choice);

    let (analysis, diag) = analyze_grammar(&grammar);

    assert!(diag.is_empty(), "{:?}", texts(&diag));
    let alternatives = grammar.rules[0].expression.children();
    assert_eq!(analysis.labels_in_scope(alternatives[0].id()), Some(vec!["a"]));
    assert_eq!(analysis.labels_in_scope(alternatives[1].id()), Some(vec!["b"]));
}

#[test]
fn predicate_sees_earlier_elements_only() {
    let src = "start = a:'x' &{ return a; } b:'y'";
    let b = AstBuilder::new(src);
    let seq = b.sequence(
        b.span("a:'x' &{ return a; } b:'y'"),
        vec![
            labeled_lit(&b, "a:'x'"),
            b.semantic_and(b.span("&{ return a; }"), " return a; "),
            labeled_lit(&b, "b:'y'"),
        ],
    );
    let grammar = single_rule(&b, src, "start", seq);

    let (analysis, diag) = analyze_grammar(&grammar);

    let predicate = &grammar.rules[0].expression.children()[1];
    assert_eq!(analysis.labels_in_scope(predicate.id()), Some(vec!["a"]));

    assert_eq!(
        texts(&diag),
        vec!["label b cannot be seen by any action or semantic predicate"]
    );
    let unseen = &diag.as_slice()[0];
    assert_eq!(unseen.severity(), Severity::Info);
    assert_eq!(unseen.start(), Position::new(0, 29));
    assert_eq!(unseen.end(), Some(Position::new(0, 34)));
}

#[test]
fn duplicate_label_in_one_environment() {
    let src = "start = a:'x' a:'y' { return a; }";
    let b = AstBuilder::new(src);
    let seq = b.sequence(
        b.span("a:'x' a:'y'"),
        vec![labeled_lit(&b, "a:'x'"), labeled_lit(&b, "a:'y'")],
    );
    let action = b.action(b.span("a:'x' a:'y' { return a; }"), seq, " return a; ");
    let grammar = single_rule(&b, src, "start", action);

    let (analysis, diag) = analyze_grammar(&grammar);

    assert_eq!(
        texts(&diag),
        vec!["label a is already defined in this scope on line: 1 column: 9"]
    );
    let dup = &diag.as_slice()[0];
    assert_eq!(dup.kind(), DiagnosticKind::DuplicateLabel);
    assert_eq!(dup.severity(), Severity::Warning);
    assert_eq!(dup.start(), Position::new(0, 14));

    // the first binding is the one captured
    let action = &grammar.rules[0].expression;
    let captured = analysis.captured(action.id()).unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(analysis.scopes().label(captured[0]).location.start.offset, 8);
}

#[test]
fn duplicate_rule_keeps_first_definition() {
    let src = "a = 'x'\na = 'y'";
    let b = AstBuilder::new(src);
    let first = b.rule(b.span("a = 'x'"), "a", lit(&b, "'x'"));
    let second = b.rule(b.span("a = 'y'"), "a", lit(&b, "'y'"));
    let grammar = b.grammar(None, vec![first, second]);

    let (analysis, diag) = analyze_grammar(&grammar);

    assert_eq!(
        texts(&diag),
        vec!["rule a is already defined on line: 1 column: 1"]
    );
    let dup = &diag.as_slice()[0];
    assert_eq!(dup.severity(), Severity::Warning);
    assert_eq!(dup.start(), Position::new(1, 0));
    assert_eq!(dup.related()[0].position(), Position::new(0, 0));

    assert_eq!(analysis.rules().len(), 1);
    assert_eq!(analysis.rules().get("a").unwrap().location.start.line, 1);
    assert_eq!(analysis.rules().entry(), Some("a"));
}

#[test]
fn shadowed_label_is_tracked_separately() {
    let src = "start = x:'a' (x:'b')? { return x; }";
    let b = AstBuilder::new(src);
    let optional = b.optional(b.span("(x:'b')?"), labeled_lit(&b, "x:'b'"));
    let seq = b.sequence(
        b.span("x:'a' (x:'b')?"),
        vec![labeled_lit(&b, "x:'a'"), optional],
    );
    let action = b.action(b.span("x:'a' (x:'b')? { return x; }"), seq, " return x; ");
    let grammar = single_rule(&b, src, "start", action);

    let (analysis, diag) = analyze_grammar(&grammar);

    // only the inner `x` is unused
    assert_eq!(
        texts(&diag),
        vec!["label x cannot be seen by any action or semantic predicate"]
    );
    assert_eq!(diag.as_slice()[0].start(), Position::new(0, 15));

    let action = &grammar.rules[0].expression;
    let captured = analysis.captured(action.id()).unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(analysis.scopes().label(captured[0]).location.start.offset, 8);
    assert_eq!(analysis.scopes().label_count(), 2);
}

#[test]
fn nested_action_sees_preceding_labels() {
    let src = "start = a:'x' (b:'y' { return b; }) { return a; }";
    let b = AstBuilder::new(src);
    let inner = b.action(
        b.span("b:'y' { return b; }"),
        labeled_lit(&b, "b:'y'"),
        " return b; ",
    );
    let seq = b.sequence(
        b.span("a:'x' (b:'y' { return b; })"),
        vec![labeled_lit(&b, "a:'x'"), inner],
    );
    let outer = b.action(
        b.span("a:'x' (b:'y' { return b; }) { return a; }"),
        seq,
        " return a; ",
    );
    let grammar = single_rule(&b, src, "start", outer);

    let (analysis, diag) = analyze_grammar(&grammar);

    assert!(diag.is_empty(), "{:?}", texts(&diag));
    let outer = &grammar.rules[0].expression;
    let inner = &outer.children()[0].children()[1];
    assert_eq!(analysis.labels_in_scope(outer.id()), Some(vec!["a"]));
    assert_eq!(analysis.labels_in_scope(inner.id()), Some(vec!["a", "b"]));
}

#[test]
fn wrappers_get_their_own_environment() {
    let src = "start = a:'x' $(b:'y') { return a; }";
    let b = AstBuilder::new(src);
    let text = b.text(b.span("$(b:'y')"), labeled_lit(&b, "b:'y'"));
    let seq = b.sequence(
        b.span("a:'x' $(b:'y')"),
        vec![labeled_lit(&b, "a:'x'"), text],
    );
    let action = b.action(b.span("a:'x' $(b:'y') { return a; }"), seq, " return a; ");
    let grammar = single_rule(&b, src, "start", action);

    let (analysis, diag) = analyze_grammar(&grammar);

    assert_eq!(
        texts(&diag),
        vec!["label b cannot be seen by any action or semantic predicate"]
    );
    assert_eq!(diag.as_slice()[0].start(), Position::new(0, 16));
    let action = &grammar.rules[0].expression;
    assert_eq!(analysis.labels_in_scope(action.id()), Some(vec!["a"]));
}

#[test]
fn every_node_is_annotated() {
    let src = "start = a:'x' (b:'y' { return b; }) { return a; }";
    let b = AstBuilder::new(src);
    let inner = b.action(
        b.span("b:'y' { return b; }"),
        labeled_lit(&b, "b:'y'"),
        " return b; ",
    );
    let seq = b.sequence(
        b.span("a:'x' (b:'y' { return b; })"),
        vec![labeled_lit(&b, "a:'x'"), inner],
    );
    let outer = b.action(b.span(src), seq, " return a; ");
    let grammar = single_rule(&b, src, "start", outer);

    let (analysis, _) = analyze_grammar(&grammar);

    let rule = &grammar.rules[0];
    let root = analysis.scope_of(rule.id()).unwrap();
    assert_eq!(analysis.scope_of(rule.expression.id()), Some(root));

    let mut exprs = Vec::new();
    collect_exprs(&rule.expression, &mut exprs);
    assert_eq!(exprs.len(), grammar.node_count() - 1);
    for expr in &exprs {
        assert!(
            analysis.scope_of(expr.id()).is_some(),
            "{} {} has no scope",
            expr.kind_name(),
            expr.id()
        );
    }

    // a label lives in the environment its `labeled` node was visited in
    for (_, record) in analysis.scopes().labels() {
        let labeled = exprs
            .iter()
            .find(|e| e.kind_name() == "labeled" && e.location == record.location)
            .unwrap();
        assert_eq!(analysis.scope_of(labeled.id()), Some(record.scope));
    }
}

#[test]
fn rule_references_are_collected() {
    let src = "start = ws 'x' ws\nws = ' '*\nunused = 'y'";
    let b = AstBuilder::new(src);
    let start = b.sequence(
        b.span("ws 'x' ws"),
        vec![
            b.rule_ref(b.span_nth("ws", 0), "ws"),
            lit(&b, "'x'"),
            b.rule_ref(b.span_nth("ws", 1), "ws"),
        ],
    );
    let ws = b.zero_or_more(b.span("' '*"), lit(&b, "' '"));
    let grammar = b.grammar(
        None,
        vec![
            b.rule(b.span("start = ws 'x' ws"), "start", start),
            b.rule(b.span("ws = ' '*"), "ws", ws),
            b.rule(b.span("unused = 'y'"), "unused", lit(&b, "'y'")),
        ],
    );

    let (analysis, diag) = analyze_grammar(&grammar);

    assert_eq!(
        texts(&diag),
        vec!["rule unused is defined but never referenced"]
    );
    assert_eq!(diag.as_slice()[0].start(), Position::new(2, 0));

    let refs = analysis.references();
    assert_eq!(refs.count("ws"), 2);
    assert!(!refs.is_referenced("start"));
    assert!(!refs.is_referenced("unused"));
    assert_eq!(analysis.rules().entry(), Some("start"));
}

#[test]
fn label_is_not_visible_inside_its_own_expression() {
    let src = "start = a:('x' &{ return a; })";
    let b = AstBuilder::new(src);
    let seq = b.sequence(
        b.span("'x' &{ return a; }"),
        vec![lit(&b, "'x'"), b.semantic_and(b.span("&{ return a; }"), " return a; ")],
    );
    let labeled = b.labeled(b.span("a:('x' &{ return a; })"), "a", seq);
    let grammar = single_rule(&b, src, "start", labeled);

    let (analysis, diag) = analyze_grammar(&grammar);

    let predicate = &grammar.rules[0].expression.children()[0].children()[1];
    assert_eq!(predicate.kind_name(), "semantic_and");
    assert_eq!(analysis.labels_in_scope(predicate.id()), Some(vec![]));

    assert_eq!(
        texts(&diag),
        vec!["label a cannot be seen by any action or semantic predicate"]
    );
    let unseen = &diag.as_slice()[0];
    assert_eq!(unseen.kind(), DiagnosticKind::UnusedLabel);
    assert_eq!(unseen.start(), Position::new(0, 8));
}
