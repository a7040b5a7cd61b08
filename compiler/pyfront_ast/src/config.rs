//! Per-unit compile settings.

use std::fmt;

/// Which top-level form a compilation unit uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// A module: zero or more expression statements.
    #[default]
    Exec,
    /// A single expression.
    Eval,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Exec => "exec",
            Mode::Eval => "eval",
        })
    }
}

/// Settings for one compilation unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileInfo {
    /// Shown in diagnostics.
    pub filename: String,
    pub mode: Mode,
}

impl CompileInfo {
    pub fn new(filename: impl Into<String>, mode: Mode) -> Self {
        CompileInfo {
            filename: filename.into(),
            mode,
        }
    }

    /// Settings for a single expression given on the command line.
    pub fn eval() -> Self {
        CompileInfo::new("<string>", Mode::Eval)
    }
}

impl Default for CompileInfo {
    fn default() -> Self {
        CompileInfo::new("<unknown>", Mode::Exec)
    }
}

#[cfg(test)]
mod tests;
