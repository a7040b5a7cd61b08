use pretty_assertions::assert_eq;

use super::*;

#[test]
fn unexpected_names_the_found_token() {
    let token = Token::new(TokenKind::Colon, Span::new(3, 4));
    let err = ParseError::unexpected(&token, "`)`");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.message, "expected `)`, found `:`");
    assert_eq!(err.span, Span::new(3, 4));
}

#[test]
fn error_tokens_get_a_plain_message() {
    let token = Token::new(TokenKind::Error, Span::new(0, 1));
    let err = ParseError::expected_expression(&token);
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.message, "invalid syntax");
}

#[test]
fn unclosed_delimiter_points_back_at_opener() {
    let found = Token::new(TokenKind::Eof, Span::point(6));
    let err = ParseError::unclosed_delimiter(&TokenKind::LParen, Span::new(1, 2), &found);
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.primary_span(), Some(Span::point(6)));
    assert_eq!(diag.labels[0].message, "expected `)`");
    assert_eq!(diag.labels[1].span, Span::new(1, 2));
}

#[test]
fn help_becomes_suggestion() {
    let err = ParseError::new(ErrorCode::E1001, "bad", Span::new(0, 1)).with_help("try this");
    let diag = err.to_diagnostic();
    assert_eq!(diag.suggestions().collect::<Vec<_>>(), vec!["try this"]);
}
