//! The `explain` command: display documentation for an error code.

use std::io::{self, Write};

use pyfront_diagnostic::ErrorCode;

use super::with_std_streams;

pub fn explain_error(code: &str) -> bool {
    with_std_streams(|out, err, _| explain_to(code, out, err))
}

pub fn explain_to<O: Write, E: Write>(code_str: &str, mut out: O, mut err: E) -> io::Result<bool> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        writeln!(err, "Unknown error code: {code_str}")?;
        writeln!(err)?;
        writeln!(err, "Codes have the format EXXXX where X is a digit.")?;
        writeln!(err, "Examples: E0001, E1001, E2003")?;
        return Ok(false);
    };
    writeln!(out, "{}", code.docs())?;
    Ok(true)
}
