use super::scope::{ScopeId, ScopeTree};
use crate::ast::{Location, Point};

fn at(offset: usize) -> Location {
    let point = Point {
        offset,
        line: 1,
        column: offset + 1,
    };
    Location {
        start: point,
        end: point,
    }
}

#[test]
fn new_tree_has_only_the_grammar_scope() {
    let tree = ScopeTree::new();
    assert_eq!(tree.scope_count(), 1);
    assert_eq!(tree.label_count(), 0);
    assert_eq!(tree.parent(ScopeId::GRAMMAR), None);
}

#[test]
fn rebinding_in_the_same_scope_returns_the_first_label() {
    let mut tree = ScopeTree::new();
    let root = tree.root();
    let first = tree.bind(root, "a", at(0)).unwrap();
    let again = tree.bind(root, "a", at(5));

    assert_eq!(again, Err(first));
    assert_eq!(tree.label_count(), 1);
    assert_eq!(tree.label(first).location, at(0));
}

#[test]
fn inner_binding_shadows_outer() {
    let mut tree = ScopeTree::new();
    let root = tree.root();
    let outer = tree.bind(root, "x", at(0)).unwrap();
    let child = tree.fork(root);
    let inner = tree.bind(child, "x", at(4)).unwrap();

    assert_ne!(outer, inner);
    assert_eq!(tree.lookup(child, "x"), Some(inner));
    assert_eq!(tree.lookup(root, "x"), Some(outer));
    assert_eq!(tree.lookup(child, "y"), None);
}

#[test]
fn visible_is_outermost_first_with_shadowing_in_place() {
    let mut tree = ScopeTree::new();
    let root = tree.root();
    let a = tree.bind(root, "a", at(0)).unwrap();
    tree.bind(root, "b", at(2)).unwrap();
    let child = tree.fork(root);
    let inner_b = tree.bind(child, "b", at(4)).unwrap();
    let c = tree.bind(child, "c", at(6)).unwrap();

    assert_eq!(tree.visible(child), [a, inner_b, c]);
    assert_eq!(tree.visible(root).len(), 2);
}

#[test]
fn siblings_do_not_see_each_other() {
    let mut tree = ScopeTree::new();
    let root = tree.root();
    let left = tree.fork(root);
    let right = tree.fork(root);
    tree.bind(left, "a", at(0)).unwrap();

    assert!(tree.visible(right).is_empty());
    assert_eq!(tree.children(root).collect::<Vec<_>>(), [left, right]);
}

#[test]
fn separate_roots_are_unrelated() {
    let mut tree = ScopeTree::new();
    let first = tree.root();
    tree.bind(first, "a", at(0)).unwrap();
    let second = tree.root();

    assert_eq!(tree.lookup(second, "a"), None);
    assert_eq!(tree.chain(second).collect::<Vec<_>>(), [second]);
}

#[test]
fn chain_walks_to_the_root() {
    let mut tree = ScopeTree::new();
    let root = tree.root();
    let mid = tree.fork(root);
    let leaf = tree.fork(mid);
    assert_eq!(tree.chain(leaf).collect::<Vec<_>>(), [leaf, mid, root]);
}

#[test]
fn mark_seen_reports_first_sighting() {
    let mut tree = ScopeTree::new();
    let root = tree.root();
    let a = tree.bind(root, "a", at(0)).unwrap();

    assert!(!tree.label(a).is_seen());
    assert!(tree.mark_seen(a));
    assert!(!tree.mark_seen(a));
    assert!(tree.label(a).is_seen());
}
