use super::*;

#[test]
fn merge_covers_both_spans() {
    let callee = Span::new(0, 1);
    let close_paren = Span::new(9, 10);
    assert_eq!(callee.merge(close_paren), Span::new(0, 10));
    assert_eq!(close_paren.merge(callee), Span::new(0, 10));
}

#[test]
fn point_is_empty() {
    let p = Span::point(7);
    assert!(p.is_empty());
    assert_eq!(p.len(), 0);
    assert_eq!(Span::DUMMY, Span::point(0));
}

#[test]
fn from_range_narrows_offsets() {
    assert_eq!(Span::from_range(3..8), Span::new(3, 8));
}

#[test]
#[should_panic(expected = "exceeds u32::MAX")]
fn from_range_rejects_oversized_offsets() {
    let big = u32::MAX as usize + 1;
    let _ = Span::from_range(0..big);
}

#[test]
fn debug_and_display_show_byte_range() {
    let span = Span::new(4, 9);
    assert_eq!(format!("{span:?}"), "4..9");
    assert_eq!(span.to_string(), "4..9");
}
