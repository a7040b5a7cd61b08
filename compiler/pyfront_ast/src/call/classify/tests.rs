use pretty_assertions::assert_eq;

use super::*;
use crate::test_helpers::parse;

fn classify(source: &str) -> Result<Classified, BuildError> {
    let fixture = parse(source);
    ArgumentClassifier::new(fixture.tree()).classify(fixture.first_arglist())
}

fn counts(source: &str) -> ShapeCounts {
    classify(source)
        .unwrap_or_else(|err| panic!("{source}: {err}"))
        .counts
}

fn reason(source: &str) -> StructuralError {
    classify(source)
        .err()
        .and_then(|err| err.structural())
        .unwrap_or_else(|| panic!("{source}: expected a structural error"))
}

#[test]
fn shapes_follow_source_order() {
    let classified = classify("f(a, b=1, *c, **d)").unwrap_or_else(|e| panic!("{e}"));
    let tags: Vec<&str> = classified
        .shapes
        .iter()
        .map(|shape| match shape {
            ArgumentShape::Positional { .. } => "positional",
            ArgumentShape::Keyword { .. } => "keyword",
            ArgumentShape::GeneratorArgument { .. } => "generator",
            ArgumentShape::SplatPositional { .. } => "splat",
            ArgumentShape::SplatKeyword { .. } => "splat-keyword",
        })
        .collect();
    assert_eq!(tags, vec!["positional", "keyword", "splat", "splat-keyword"]);
}

#[test]
fn counts_each_shape() {
    assert_eq!(
        counts("f(a, b, c=1, *d, **e)"),
        ShapeCounts {
            positional: 2,
            keyword: 1,
            generator: 0,
            splat_positional: 1,
            splat_keyword: 1,
        }
    );
}

#[test]
fn splat_consumes_following_sibling() {
    let fixture = parse("f(*args)");
    let arglist = fixture.first_arglist();
    let classified = ArgumentClassifier::new(fixture.tree())
        .classify(arglist)
        .unwrap_or_else(|e| panic!("{e}"));
    let value = fixture.tree().children(arglist)[1];
    assert_eq!(
        classified.shapes.as_slice(),
        &[ArgumentShape::SplatPositional { value }]
    );
}

#[test]
fn sole_generator_is_accepted() {
    assert_eq!(counts("f(x for x in y)").generator, 1);
}

#[test]
fn generator_with_splat_is_accepted() {
    // Splats are not counted against the generator rule.
    assert_eq!(counts("f(x for x in y, *a)").splat_positional, 1);
}

#[test]
fn generator_with_other_arguments_is_ambiguous() {
    assert_eq!(
        reason("f(a, x for x in y)"),
        StructuralError::AmbiguousGeneratorArgument
    );
    assert_eq!(
        reason("f(x for x in y, k=1)"),
        StructuralError::AmbiguousGeneratorArgument
    );
    assert_eq!(
        reason("f(x for x in y, z for z in w)"),
        StructuralError::AmbiguousGeneratorArgument
    );
}

#[test]
fn error_is_located_at_arglist() {
    let fixture = parse("f(a, x for x in y)");
    let arglist = fixture.first_arglist();
    let err = ArgumentClassifier::new(fixture.tree())
        .classify(arglist)
        .err()
        .unwrap_or_else(|| panic!("expected an error"));
    assert_eq!(err.span, fixture.tree().span(arglist));
}

fn call_with(n: usize) -> String {
    let args: Vec<String> = (0..n).map(|i| format!("a{i}")).collect();
    format!("f({})", args.join(", "))
}

#[test]
fn arity_limit_is_inclusive() {
    assert_eq!(counts(&call_with(255)).positional, 255);
    assert_eq!(
        reason(&call_with(256)),
        StructuralError::TooManyArguments { count: 256 }
    );
}

#[test]
fn keywords_count_toward_arity_but_splats_do_not() {
    let mut args: Vec<String> = (0..255).map(|i| format!("k{i}=0")).collect();
    args.push("*rest".to_string());
    args.push("**kw".to_string());
    let source = format!("f({})", args.join(", "));
    assert_eq!(counts(&source).keyword, 255);
}
