use pretty_assertions::assert_eq;
use pyfront_diagnostic::ErrorCode;

use super::*;
use crate::test_helpers::{lower, lower_err, parse};

fn dump(source: &str) -> String {
    lower(source).unwrap_or_else(|err| panic!("{source}: {err}"))
}

#[test]
fn names_and_literals() {
    assert_eq!(dump("x"), "x");
    assert_eq!(dump("0x1f"), "0x1f");
    assert_eq!(dump("'a'"), "'a'");
}

#[test]
fn adjacent_strings_are_joined() {
    assert_eq!(dump("'a' \"b\""), "'a' \"b\"");
}

#[test]
fn trailers_chain_left_to_right() {
    assert_eq!(dump("a.b[c].d"), "(. (subscript (. a b) c) d)");
}

#[test]
fn arithmetic_is_left_associative() {
    assert_eq!(dump("1 + 2 * 3 - 4"), "(- (+ 1 (* 2 3)) 4)");
    assert_eq!(dump("a // b % c"), "(% (// a b) c)");
}

#[test]
fn power_binds_tighter_than_unary_minus() {
    assert_eq!(dump("-x ** 2"), "(- (** x 2))");
    assert_eq!(dump("2 ** -1"), "(** 2 (- 1))");
    assert_eq!(dump("~+a"), "(~ (+ a))");
}

#[test]
fn boolean_operators_collect_operands() {
    assert_eq!(dump("a or b or c"), "(or a b c)");
    assert_eq!(dump("a or b and not c"), "(or a (and b (not c)))");
}

#[test]
fn chained_comparison() {
    assert_eq!(
        dump("a < b <= c not in d"),
        "(compare a < b <= c not in d)"
    );
    assert_eq!(dump("a == b"), "(compare a == b)");
}

#[test]
fn conditional_expression() {
    assert_eq!(dump("a if b else c"), "(if b a c)");
}

#[test]
fn lambdas() {
    assert_eq!(dump("lambda x, y: x + y"), "(lambda (x y) (+ x y))");
    assert_eq!(dump("lambda: 0"), "(lambda () 0)");
}

#[test]
fn lambda_parameter_cannot_be_forbidden_name() {
    let err = lower_err("lambda None: 0");
    assert_eq!(err.kind, BuildErrorKind::ForbiddenName { name: "None" });
    assert_eq!(err.code(), ErrorCode::E2007);
}

#[test]
fn displays() {
    assert_eq!(dump("()"), "(tuple)");
    assert_eq!(dump("(a)"), "a");
    assert_eq!(dump("(a,)"), "(tuple a)");
    assert_eq!(dump("a, b"), "(tuple a b)");
    assert_eq!(dump("[]"), "(list)");
    assert_eq!(dump("[a]"), "(list a)");
    assert_eq!(dump("[a, b,]"), "(list a b)");
}

#[test]
fn comprehension_clauses_flatten() {
    assert_eq!(
        dump("[x for x in y if x if z for w in x]"),
        "(listcomp x (for x y (if x) (if z)) (for w x))"
    );
    assert_eq!(
        dump("(x for x, y in z)"),
        "(genexp x (for (tuple x y) z))"
    );
}

#[test]
fn nested_targets() {
    assert_eq!(
        dump("[x for (a, [b, c.d]) in y]"),
        "(listcomp x (for (tuple a (list b (. c d))) y))"
    );
}

#[test]
fn invalid_targets() {
    let err = lower_err("[x for f() in y]");
    assert_eq!(
        err.kind,
        BuildErrorKind::InvalidTarget {
            what: "function call"
        }
    );
    assert_eq!(err.code(), ErrorCode::E2010);
    assert_eq!(err.to_string(), "cannot assign to function call");

    assert_eq!(
        lower_err("[x for 1 in y]").kind,
        BuildErrorKind::InvalidTarget { what: "literal" }
    );
    assert_eq!(
        lower_err("(x for a, None in y)").kind,
        BuildErrorKind::ForbiddenName { name: "None" }
    );
}

#[test]
fn deep_parentheses() {
    let depth = 5_000;
    let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(dump(&source), "x");
}

#[test]
fn oversized_display_is_a_located_error() {
    let elements = vec!["0"; 70_000].join(",");
    let source = format!("[{elements}]\n");
    let err = lower_err(&source);
    assert_eq!(err.code(), ErrorCode::E2009);
    assert_eq!(
        err.to_string(),
        "unsupported syntax: list with more than 65535 elements"
    );
    // Located at the elements inside the brackets.
    let end = u32::try_from(source.len() - 2).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(err.span, Span::new(1, end));
}

#[test]
fn oversized_tuple_fails_only_its_statement() {
    let elements = vec!["x"; 65_536].join(",");
    let source = format!("{elements}\nf(y)\n");
    let fixture = parse(&source);
    let info = CompileInfo::default();
    let mut queue = DiagnosticQueue::new(&source);
    let module = AstBuilder::new(fixture.tree(), &fixture.interner, &info)
        .build(fixture.parsed.root, &mut queue);

    assert_eq!(module.body.len(), 1);
    assert_eq!(
        crate::dump::dump_expr(&module.arena, &fixture.interner, module.body[0]),
        "(call f y)"
    );
    let diagnostics = queue.flush();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E2009);
}

#[test]
fn failed_statements_are_reported_once_each() {
    let source = "f(a=1, a=2)\ng(x)\nh(*a, b)\n";
    let fixture = parse(source);
    let info = CompileInfo::default();
    let mut queue = DiagnosticQueue::new(source);
    let module = AstBuilder::new(fixture.tree(), &fixture.interner, &info)
        .build(fixture.parsed.root, &mut queue);

    assert_eq!(module.body.len(), 1);
    assert!(module.error.is_some());
    let codes: Vec<ErrorCode> = queue.flush().iter().map(|diag| diag.code).collect();
    assert_eq!(codes, vec![ErrorCode::E2008, ErrorCode::E2004]);
}

#[test]
fn clean_module_has_no_error() {
    let source = "f(x)\n[y for y in x]\n";
    let fixture = parse(source);
    let info = CompileInfo::default();
    let mut queue = DiagnosticQueue::new(source);
    let module = AstBuilder::new(fixture.tree(), &fixture.interner, &info)
        .build(fixture.parsed.root, &mut queue);
    assert_eq!(module.body.len(), 2);
    assert_eq!(module.error, None);
    assert!(!queue.has_errors());
}

#[test]
fn mode_must_match_root() {
    let source = "f(x)\n";
    let fixture = parse(source);
    let info = CompileInfo::eval();
    let mut queue = DiagnosticQueue::new(source);
    let module = AstBuilder::new(fixture.tree(), &fixture.interner, &info)
        .build(fixture.parsed.root, &mut queue);
    assert!(module.body.is_empty());
    let diagnostics = queue.flush();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E2009);
}

#[test]
fn eval_mode_lowers_one_expression() {
    let interner = StringInterner::new();
    let source = "a, f(b)";
    let tokens = pyfront_lexer::lex(source, &interner).tokens;
    let parsed = pyfront_parse::parse_eval(&tokens);
    let info = CompileInfo::eval();
    let mut queue = DiagnosticQueue::new(source);
    let module =
        AstBuilder::new(&parsed.tree, &interner, &info).build(parsed.root, &mut queue);
    assert_eq!(module.body.len(), 1);
    assert_eq!(
        crate::dump::dump_expr(&module.arena, &interner, module.body[0]),
        "(tuple a (call f b))"
    );
}
