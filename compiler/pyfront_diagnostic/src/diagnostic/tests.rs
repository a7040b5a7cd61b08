use pretty_assertions::assert_eq;

use super::*;

#[test]
fn footers_keep_insertion_order() {
    let diag = Diagnostic::error(ErrorCode::E2008)
        .with_message("keyword argument repeated")
        .with_label(Span::new(10, 11), "repeated here")
        .with_secondary_label(Span::new(3, 4), "first used here")
        .with_suggestion("remove one of the `a=` arguments")
        .with_note("each keyword may appear once per call");

    assert!(diag.is_error());
    assert_eq!(diag.primary_span(), Some(Span::new(10, 11)));
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(
        diag.footers,
        vec![
            Footer::Help("remove one of the `a=` arguments".to_string()),
            Footer::Note("each keyword may appear once per call".to_string()),
        ]
    );
    assert_eq!(
        diag.suggestions().collect::<Vec<_>>(),
        vec!["remove one of the `a=` arguments"]
    );
}

#[test]
fn primary_span_skips_secondary_labels() {
    let diag = Diagnostic::error(ErrorCode::E2003)
        .with_secondary_label(Span::new(0, 1), "context")
        .with_label(Span::new(5, 6), "here");
    assert_eq!(diag.primary_span(), Some(Span::new(5, 6)));
    assert!(!diag.labels[0].is_primary());

    let bare = Diagnostic::warning(ErrorCode::E9002);
    assert_eq!(bare.primary_span(), None);
    assert!(!bare.is_error());
}

#[test]
fn display_includes_code() {
    let diag = Diagnostic::error(ErrorCode::E2002).with_message("more than 255 arguments");
    assert_eq!(diag.to_string(), "error[E2002]: more than 255 arguments");
}
