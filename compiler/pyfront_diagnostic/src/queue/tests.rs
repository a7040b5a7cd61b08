use pretty_assertions::assert_eq;
use pyfront_ir::Span;

use super::*;
use crate::ErrorCode;

fn error_at(code: ErrorCode, start: u32) -> Diagnostic {
    Diagnostic::error(code)
        .with_message(code.as_str())
        .with_label(Span::new(start, start + 1), "here")
}

#[test]
fn flush_sorts_by_position() {
    let source = "f(a=1, b)\ng(x for x in y, 1)\n";
    let mut queue = DiagnosticQueue::with_config(source, DiagnosticConfig::unlimited());
    queue.add(error_at(ErrorCode::E2001, 12));
    queue.add(error_at(ErrorCode::E2003, 7));

    let codes: Vec<_> = queue.flush().into_iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E2003, ErrorCode::E2001]);
    assert_eq!(queue.error_count(), 0);
}

#[test]
fn error_limit_stops_collection() {
    let source = "a\nb\nc\n";
    let config = DiagnosticConfig {
        error_limit: 2,
        deduplicate: false,
    };
    let mut queue = DiagnosticQueue::with_config(source, config);
    assert!(queue.add(error_at(ErrorCode::E2008, 0)));
    assert!(queue.add(error_at(ErrorCode::E2008, 2)));
    assert!(!queue.add(error_at(ErrorCode::E2008, 4)));
    assert!(queue.limit_reached());
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn one_syntax_error_per_line() {
    let source = "f(,,)\n";
    let mut queue = DiagnosticQueue::new(source);
    assert!(queue.add(error_at(ErrorCode::E1002, 2)));
    assert!(!queue.add(error_at(ErrorCode::E1002, 3)));
    // AST construction errors are never deduplicated
    assert!(queue.add(error_at(ErrorCode::E2005, 2)));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn positions_are_one_based() {
    let source = "x\n  f(a=1, a=2)\n";
    let mut queue = DiagnosticQueue::new(source);
    let _guarantee = queue.emit_error(error_at(ErrorCode::E2008, 11));
    assert!(queue.has_errors());
    assert_eq!(queue.positions().collect::<Vec<_>>(), vec![(2, 10)]);
}
