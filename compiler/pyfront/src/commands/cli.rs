//! Argument dispatch for the `pyfront` binary.

use super::{
    check_file, eval_expression, explain_error, lex_file, parse_cli_options, parse_file,
    CliOptions,
};

/// Run the command named by `args` (program name already stripped).
/// Returns `false` when the process should exit with status 1.
pub fn run(args: &[String]) -> bool {
    let Some((command, rest)) = args.split_first() else {
        print_usage();
        return true;
    };

    match (command.as_str(), rest) {
        ("check" | "parse" | "eval", [operand, flags @ ..]) => {
            let Some(options) = options_or_report(flags) else {
                return false;
            };
            match command.as_str() {
                "check" => check_file(operand, &options),
                "parse" => parse_file(operand, &options),
                _ => eval_expression(operand, &options),
            }
        }
        ("check" | "parse", []) => missing_operand(command, "<file.py> [options]"),
        ("eval", []) => missing_operand(command, "<expression> [options]"),
        ("lex", [path, ..]) => lex_file(path),
        ("lex", []) => missing_operand(command, "<file.py>"),
        ("explain" | "--explain", [code, ..]) => explain_error(code),
        ("explain" | "--explain", []) => {
            eprintln!("Usage: pyfront explain <ERROR_CODE>");
            eprintln!("Example: pyfront explain E2003");
            false
        }
        ("help" | "--help" | "-h", _) => {
            print_usage();
            true
        }
        ("version" | "--version" | "-V", _) => {
            println!("pyfront {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            false
        }
    }
}

fn missing_operand(command: &str, usage: &str) -> bool {
    eprintln!("Usage: pyfront {command} {usage}");
    false
}

fn options_or_report(flags: &[String]) -> Option<CliOptions> {
    match parse_cli_options(flags) {
        Ok(options) => Some(options),
        Err(message) => {
            eprintln!("error: {message}");
            None
        }
    }
}

fn print_usage() {
    println!("pyfront - Python expression front end");
    println!();
    println!("Usage: pyfront <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <file.py>      Lex, parse and build the AST, reporting errors");
    println!("  parse <file.py>      Print the AST of each statement");
    println!("  eval <expression>    Print the AST of a single expression");
    println!("  lex <file.py>        Tokenize and display tokens");
    println!("  explain <code>       Explain an error code (e.g., E2003)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>       auto (default), always, never");
    println!("  --error-limit=<n>    Stop after n errors (default 10, 0 = unlimited)");
    println!();
    println!("Set PYFRONT_LOG (e.g. PYFRONT_LOG=debug) to trace the front end.");
}
