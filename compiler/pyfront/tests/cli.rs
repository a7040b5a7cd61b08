//! Command behaviour through the writer-generic entry points.

use pretty_assertions::assert_eq;
use pyfront::commands::{
    check_source, eval_source, explain_to, lex_source, parse_source, CliOptions,
};
use pyfront_diagnostic::emitter::ColorMode;

fn options() -> CliOptions {
    CliOptions {
        color: ColorMode::Never,
        error_limit: 0,
    }
}

struct Output {
    success: bool,
    stdout: String,
    stderr: String,
}

fn capture(
    run: impl FnOnce(&mut Vec<u8>, &mut Vec<u8>) -> std::io::Result<bool>,
) -> Output {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let success = run(&mut stdout, &mut stderr).unwrap_or_else(|e| panic!("{e}"));
    Output {
        success,
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
    }
}

#[test]
fn check_clean_file() {
    let output = capture(|out, err| {
        check_source("ok.py", "f(a, b=1)\ng()\n", &options(), out, err, false)
    });
    assert!(output.success);
    assert_eq!(output.stdout, "OK: ok.py (2 statements)\n");
    assert_eq!(output.stderr, "");
}

#[test]
fn check_reports_every_bad_statement() {
    let source = "f(a=1, b)\nf(*a, b)\n";
    let output = capture(|out, err| check_source("bad.py", source, &options(), out, err, false));
    assert!(!output.success);
    assert_eq!(output.stdout, "");
    assert!(output.stderr.contains("error[E2003]: non-keyword arg after keyword arg\n"));
    assert!(output.stderr.contains(" --> bad.py:1:8\n"));
    assert!(output
        .stderr
        .contains("error[E2004]: only named arguments may follow *expression\n"));
    assert!(output.stderr.contains(" --> bad.py:2:7\n"));
    assert!(output.stderr.ends_with("2 errors emitted\n"));
}

#[test]
fn error_limit_caps_output() {
    let source = "f(a=1, b)\nf(a=1, b)\nf(a=1, b)\n";
    let limited = CliOptions {
        error_limit: 1,
        ..options()
    };
    let output = capture(|out, err| check_source("bad.py", source, &limited, out, err, false));
    assert!(!output.success);
    assert_eq!(output.stderr.matches("error[E2003]").count(), 1);
}

#[test]
fn parse_prints_surviving_statements() {
    let source = "f(x for x in y)\nf(None=1)\ng.h[0](*a, **k)\n";
    let output = capture(|out, err| parse_source("p.py", source, &options(), out, err, false));
    assert!(!output.success);
    assert_eq!(
        output.stdout,
        "(call f (genexp x (for x y)))\n(call (subscript (. g h) 0) (* a) (** k))\n"
    );
    assert!(output.stderr.contains("error[E2007]: cannot assign to None\n"));
}

#[test]
fn eval_expression() {
    let output = capture(|out, err| eval_source("f(a, k=lambda: 0)", &options(), out, err, false));
    assert!(output.success);
    assert_eq!(output.stdout, "(call f a (k= (lambda () 0)))\n");
}

#[test]
fn eval_reports_against_string_filename() {
    let output = capture(|out, err| eval_source("f(a=1, a=2)", &options(), out, err, false));
    assert!(!output.success);
    assert!(output.stderr.contains(" --> <string>:1:8\n"));
}

#[test]
fn lex_lists_tokens() {
    let output = capture(|out, _| lex_source("t.py", "f(x)", out));
    assert!(output.success);
    assert_eq!(
        output.stdout,
        "Tokens for 't.py' (6 tokens):\n\
         \x20 identifier f @ 0..1\n\
         \x20 ( @ 1..2\n\
         \x20 identifier x @ 2..3\n\
         \x20 ) @ 3..4\n\
         \x20 newline @ 4..4\n\
         \x20 end of file @ 4..4\n"
    );
}

#[test]
fn explain_known_and_unknown_codes() {
    let known = capture(|out, err| explain_to("E2008", out, err));
    assert!(known.success);
    assert!(known.stdout.starts_with("# E2008"));

    let unknown = capture(|out, err| explain_to("X1", out, err));
    assert!(!unknown.success);
    assert!(unknown.stderr.starts_with("Unknown error code: X1\n"));
}
