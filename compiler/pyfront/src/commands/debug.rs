//! Debug commands: `parse` and `lex` for inspecting front-end output.

use std::io::{self, Write};

use pyfront_ast::dump::dump_expr;
use pyfront_ast::Mode;
use pyfront_ir::{StringInterner, TokenKind};

use super::{compile_and_report, read_file, with_std_streams, CliOptions};

/// Parse a file and print one s-expression per statement.
pub fn parse_file(path: &str, options: &CliOptions) -> bool {
    let Some(source) = read_file(path) else {
        return false;
    };
    with_std_streams(|out, err, is_tty| parse_source(path, &source, options, out, err, is_tty))
}

/// Statements that lowered are printed even when others failed.
pub fn parse_source<O: Write, E: Write>(
    filename: &str,
    source: &str,
    options: &CliOptions,
    mut out: O,
    err: E,
    is_tty: bool,
) -> io::Result<bool> {
    let compilation = compile_and_report(filename, source, Mode::Exec, options, err, is_tty);
    let module = &compilation.module;
    for &expr in &module.body {
        writeln!(out, "{}", dump_expr(&module.arena, &compilation.interner, expr))?;
    }
    Ok(!compilation.has_errors())
}

/// Lex a file and print the token stream.
pub fn lex_file(path: &str) -> bool {
    let Some(source) = read_file(path) else {
        return false;
    };
    with_std_streams(|out, _, _| lex_source(path, &source, out))
}

pub fn lex_source<O: Write>(filename: &str, source: &str, mut out: O) -> io::Result<bool> {
    let interner = StringInterner::new();
    let lexed = pyfront_lexer::lex(source, &interner);
    writeln!(out, "Tokens for '{filename}' ({} tokens):", lexed.tokens.len())?;
    for token in &lexed.tokens {
        match token.kind {
            TokenKind::Name(text) | TokenKind::Number(text) | TokenKind::String(text) => writeln!(
                out,
                "  {} {} @ {}",
                token.kind.display_name(),
                interner.lookup(text),
                token.span
            )?,
            kind => writeln!(out, "  {} @ {}", kind.display_name(), token.span)?,
        }
    }
    for error in &lexed.errors {
        let diag = error.to_diagnostic();
        writeln!(
            out,
            "  error[{}]: {} @ {}",
            error.code().as_str(),
            diag.message,
            error.span
        )?;
    }
    Ok(!lexed.has_errors())
}
