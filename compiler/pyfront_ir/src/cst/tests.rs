use super::*;
use crate::Name;

#[test]
fn symbol_span_covers_children() {
    let mut tree = ConcreteTree::new();
    let name = tree.alloc_token(TokenKind::Name(Name::new(1)), Span::new(2, 3));
    let eq = tree.alloc_token(TokenKind::Equal, Span::new(3, 4));
    let value = tree.alloc_token(TokenKind::Number(Name::new(2)), Span::new(4, 5));
    let arg = tree.alloc_symbol(Symbol::Argument, &[name, eq, value], Span::DUMMY);

    assert_eq!(tree.span(arg), Span::new(2, 5));
    assert_eq!(tree.children(arg), &[name, eq, value]);
    assert_eq!(tree.node(arg).child_count(), 3);
    assert_eq!(tree.child(arg, 1), Some(eq));
    assert_eq!(tree.child(arg, 3), None);
}

#[test]
fn empty_production_uses_fallback_span() {
    let mut tree = ConcreteTree::new();
    let arglist = tree.alloc_symbol(Symbol::Arglist, &[], Span::point(9));
    assert_eq!(tree.span(arglist), Span::point(9));
    assert!(tree.children(arglist).is_empty());
}

#[test]
fn tag_queries() {
    let mut tree = ConcreteTree::new();
    let star = tree.alloc_token(TokenKind::Star, Span::new(0, 1));
    let arg = tree.alloc_symbol(Symbol::Argument, &[star], Span::DUMMY);

    assert!(tree.is_token(star, &TokenKind::Star));
    assert!(!tree.is_token(star, &TokenKind::DoubleStar));
    assert!(tree.is_symbol(arg, Symbol::Argument));
    assert_eq!(tree.symbol(star), None);
    assert_eq!(tree.token(arg), None);
    let name = tree.alloc_token(TokenKind::Name(Name::new(7)), Span::DUMMY);
    assert!(tree.is_token(name, &TokenKind::Name(Name::EMPTY)));
}

#[test]
fn sibling_lists_do_not_overlap() {
    let mut tree = ConcreteTree::new();
    let a = tree.alloc_token(TokenKind::Comma, Span::new(0, 1));
    let b = tree.alloc_token(TokenKind::Comma, Span::new(1, 2));
    let first = tree.alloc_symbol(Symbol::Testlist, &[a], Span::DUMMY);
    let second = tree.alloc_symbol(Symbol::Testlist, &[b, a], Span::DUMMY);
    assert_eq!(tree.children(first), &[a]);
    assert_eq!(tree.children(second), &[b, a]);
    assert_eq!(tree.len(), 4);
}

#[test]
fn symbol_spelling_matches_grammar() {
    assert_eq!(Symbol::Arglist.to_string(), "arglist");
    assert_eq!(Symbol::CompFor.as_str(), "comp_for");
}
