//! The `check` command: run the whole front end and report diagnostics.

use std::io::{self, Write};

use pyfront_ast::Mode;

use super::{compile_and_report, read_file, with_std_streams, CliOptions};

/// Check a file. Returns `false` if any error was reported.
pub fn check_file(path: &str, options: &CliOptions) -> bool {
    let Some(source) = read_file(path) else {
        return false;
    };
    with_std_streams(|out, err, is_tty| check_source(path, &source, options, out, err, is_tty))
}

pub fn check_source<O: Write, E: Write>(
    filename: &str,
    source: &str,
    options: &CliOptions,
    mut out: O,
    err: E,
    is_tty: bool,
) -> io::Result<bool> {
    let compilation = compile_and_report(filename, source, Mode::Exec, options, err, is_tty);
    if compilation.has_errors() {
        return Ok(false);
    }
    let count = compilation.module.body.len();
    let noun = if count == 1 { "statement" } else { "statements" };
    writeln!(out, "OK: {filename} ({count} {noun})")?;
    Ok(true)
}
