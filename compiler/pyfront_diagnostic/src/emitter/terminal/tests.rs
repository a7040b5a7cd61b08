use pretty_assertions::assert_eq;
use pyfront_ir::Span;

use super::*;
use crate::ErrorCode;

fn render(source: &str, diag: &Diagnostic) -> String {
    let mut emitter = TerminalEmitter::new(Vec::new(), ColorMode::Never, false, "demo.py", source);
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

#[test]
fn renders_header_location_and_caret() {
    let source = "f(a=1, a=2)\n";
    let diag = Diagnostic::error(ErrorCode::E2008)
        .with_message("keyword argument repeated")
        .with_label(Span::new(7, 8), "`a` already given");
    let out = render(source, &diag);
    assert_eq!(
        out,
        "error[E2008]: keyword argument repeated\n\
         \x20--> demo.py:1:8\n\
         \x20 |\n\
         1 | f(a=1, a=2)\n\
         \x20 |        ^ `a` already given\n\
         \n"
    );
}

#[test]
fn renders_notes_and_help() {
    let source = "f(a=1, b)";
    let diag = Diagnostic::error(ErrorCode::E2003)
        .with_message("non-keyword arg after keyword arg")
        .with_label(Span::new(7, 8), "positional argument")
        .with_note("positional arguments must come first")
        .with_suggestion("move `b` before `a=1`");
    let out = render(source, &diag);
    assert!(out.contains("  = note: positional arguments must come first\n"));
    assert!(out.contains("  = help: move `b` before `a=1`\n"));
}

#[test]
fn summary_pluralizes() {
    let mut emitter = TerminalEmitter::new(Vec::new(), ColorMode::Never, false, "demo.py", "");
    emitter.emit_summary(2, 1);
    let out = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
    assert_eq!(out, "2 errors emitted\n1 warning emitted\n");
}

#[test]
fn color_mode_flags() {
    assert_eq!(ColorMode::from_flag("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::from_flag("sometimes"), None);
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn secondary_label_uses_dashes_and_colors_when_forced() {
    let source = "f(a,\n  b";
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("unclosed `(`")
        .with_label(Span::new(7, 8), "expected `)`")
        .with_secondary_label(Span::new(1, 2), "opened here");
    let mut emitter = TerminalEmitter::new(Vec::new(), ColorMode::Always, false, "demo.py", source);
    emitter.emit(&diag);
    let out = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
    assert!(out.starts_with("\x1b[1;31merror\x1b[0m\x1b[1m[E1002]\x1b[0m: unclosed `(`\n"));
    assert!(out.contains(" ::: demo.py:1:2\n"));
    assert!(out.contains("\x1b[1;34m- opened here\x1b[0m"));
}
