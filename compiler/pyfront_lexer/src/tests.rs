use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> (Vec<TokenKind>, StringInterner) {
    let interner = StringInterner::new();
    let output = lex(source, &interner);
    let kinds = output.tokens.iter().map(|t| t.kind).collect();
    (kinds, interner)
}

#[test]
fn simple_call() {
    let (kinds, interner) = kinds("f(a, b=1)");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Name(interner.intern("f")),
            TokenKind::LParen,
            TokenKind::Name(interner.intern("a")),
            TokenKind::Comma,
            TokenKind::Name(interner.intern("b")),
            TokenKind::Equal,
            TokenKind::Number(interner.intern("1")),
            TokenKind::RParen,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn star_operators_use_longest_match() {
    let (kinds, _) = kinds("*a **b // c");
    assert_eq!(kinds[0], TokenKind::Star);
    assert_eq!(kinds[2], TokenKind::DoubleStar);
    assert_eq!(kinds[4], TokenKind::DoubleSlash);
}

#[test]
fn keywords_and_forbidden_names() {
    let (kinds, interner) = kinds("lambda None __debug__ not in notin");
    assert_eq!(kinds[0], TokenKind::Lambda);
    assert_eq!(kinds[1], TokenKind::Name(interner.intern("None")));
    assert_eq!(kinds[2], TokenKind::Name(interner.intern("__debug__")));
    assert_eq!(kinds[3], TokenKind::Not);
    assert_eq!(kinds[4], TokenKind::In);
    assert_eq!(kinds[5], TokenKind::Name(interner.intern("notin")));
}

#[test]
fn number_forms() {
    let (kinds, interner) = kinds("0x1F 1.5e3 .5 10j 3.");
    let expected: Vec<TokenKind> = ["0x1F", "1.5e3", ".5", "10j", "3."]
        .iter()
        .map(|text| TokenKind::Number(interner.intern(text)))
        .collect();
    assert_eq!(&kinds[..5], expected.as_slice());
}

#[test]
fn attribute_access_is_not_a_float() {
    let (kinds, interner) = kinds("a.b");
    assert_eq!(
        &kinds[..3],
        &[
            TokenKind::Name(interner.intern("a")),
            TokenKind::Dot,
            TokenKind::Name(interner.intern("b")),
        ]
    );
}

#[test]
fn newlines_inside_brackets_are_skipped() {
    let (kinds, _) = kinds("f(a,\n  b)\nx\n");
    let newlines = kinds.iter().filter(|k| **k == TokenKind::Newline).count();
    assert_eq!(newlines, 2);
}

#[test]
fn blank_lines_and_comments_collapse() {
    let (kinds, interner) = kinds("\n\n# only a comment\nx  # trailing\n\n");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Name(interner.intern("x")),
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn line_continuation_joins_lines() {
    let (kinds, _) = kinds("a + \\\n b\n");
    let newlines = kinds.iter().filter(|k| **k == TokenKind::Newline).count();
    assert_eq!(newlines, 1);
}

#[test]
fn strings_keep_quotes_and_prefix() {
    let (kinds, interner) = kinds(r#"f("a\"b", r'x')"#);
    assert_eq!(kinds[2], TokenKind::String(interner.intern(r#""a\"b""#)));
    assert_eq!(kinds[4], TokenKind::String(interner.intern("r'x'")));
}

#[test]
fn invalid_character_reports_e0001() {
    let interner = StringInterner::new();
    let output = lex("a $ b", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::InvalidCharacter { found: '$' });
    assert_eq!(output.errors[0].span, Span::new(2, 3));
    assert!(output.tokens.iter().any(|t| t.kind == TokenKind::Error));
}

#[test]
fn unterminated_string_reports_e0002() {
    let interner = StringInterner::new();
    let output = lex("f('abc)\n", &interner);
    assert!(output.has_errors());
    assert_eq!(output.errors[0].kind, LexErrorKind::UnterminatedString);
    assert_eq!(output.errors[0].span, Span::new(2, 7));
}

#[test]
fn empty_source_is_just_eof() {
    let (kinds, _) = kinds("");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}
