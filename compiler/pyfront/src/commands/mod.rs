//! Command handlers for the pyfront CLI.
//!
//! Each command has a writer-generic core used by the tests and a thin
//! wrapper that reads the file and talks to stdout/stderr. Wrappers return
//! `false` when the process should exit with status 1.

mod check;
mod cli;
mod debug;
mod eval;
mod explain;
mod options;

pub use check::{check_file, check_source};
pub use cli::run;
pub use debug::{lex_file, lex_source, parse_file, parse_source};
pub use eval::{eval_expression, eval_source};
pub use explain::{explain_error, explain_to};
pub use options::{parse_cli_options, CliOptions};

use std::io::{self, IsTerminal, Write};

use pyfront_ast::{CompileInfo, Mode};
use pyfront_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};

use crate::pipeline::{compile, Compilation};

/// Compile `source` and render every diagnostic to `err`.
fn compile_and_report<E: Write>(
    filename: &str,
    source: &str,
    mode: Mode,
    options: &CliOptions,
    err: E,
    is_tty: bool,
) -> Compilation {
    let info = CompileInfo::new(filename, mode);
    let compilation = compile(source, &info, options.diagnostic_config());
    if !compilation.diagnostics.is_empty() {
        let mut emitter = TerminalEmitter::new(err, options.color, is_tty, filename, source);
        emitter.emit_all(&compilation.diagnostics);
        let errors = compilation
            .diagnostics
            .iter()
            .filter(|diag| diag.is_error())
            .count();
        emitter.emit_summary(errors, compilation.diagnostics.len() - errors);
        emitter.flush();
    }
    compilation
}

/// Run a writer-generic command against the real stdout and stderr.
fn with_std_streams(
    run: impl FnOnce(&mut io::StdoutLock<'static>, io::Stderr, bool) -> io::Result<bool>,
) -> bool {
    let is_tty = io::stderr().is_terminal();
    let mut out = io::stdout().lock();
    match run(&mut out, io::stderr(), is_tty) {
        Ok(success) => success,
        Err(e) => {
            eprintln!("error writing output: {e}");
            false
        }
    }
}

/// Read a source file, printing a user-facing message on failure.
fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            let msg = match e.kind() {
                io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
                io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            None
        }
    }
}
