//! The `eval` command: lower one expression given on the command line.

use std::io::{self, Write};

use pyfront_ast::dump::dump_expr;
use pyfront_ast::{CompileInfo, Mode};

use super::{compile_and_report, with_std_streams, CliOptions};

pub fn eval_expression(expression: &str, options: &CliOptions) -> bool {
    with_std_streams(|out, err, is_tty| eval_source(expression, options, out, err, is_tty))
}

pub fn eval_source<O: Write, E: Write>(
    expression: &str,
    options: &CliOptions,
    mut out: O,
    err: E,
    is_tty: bool,
) -> io::Result<bool> {
    let filename = CompileInfo::eval().filename;
    let compilation = compile_and_report(&filename, expression, Mode::Eval, options, err, is_tty);
    let module = &compilation.module;
    for &expr in &module.body {
        writeln!(out, "{}", dump_expr(&module.arena, &compilation.interner, expr))?;
    }
    Ok(!compilation.has_errors())
}
