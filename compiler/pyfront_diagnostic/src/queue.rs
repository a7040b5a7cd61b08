//! Diagnostic queue for collecting, deduplicating and sorting diagnostics.
//!
//! Features:
//! - Error limit to prevent overwhelming output
//! - At most one syntax error per line
//! - Output sorted by source position
//! - `ErrorGuaranteed` proof that errors were emitted

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, ErrorGuaranteed};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
    /// Keep only the first syntax error on each line.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// A config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    diagnostic: Diagnostic,
    line: u32,
    column: u32,
}

/// Queue for collecting diagnostics of one compilation unit.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new(source);
/// let guarantee = queue.emit_error(diagnostic);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticQueue {
    diagnostics: Vec<QueuedDiagnostic>,
    error_count: usize,
    last_syntax_line: Option<u32>,
    lines: LineOffsetTable,
    source: String,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a queue for diagnostics against `source`.
    pub fn new(source: &str) -> Self {
        Self::with_config(source, DiagnosticConfig::default())
    }

    pub fn with_config(source: &str, config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            last_syntax_line: None,
            lines: LineOffsetTable::build(source),
            source: source.to_owned(),
            config,
        }
    }

    /// Add a diagnostic.
    ///
    /// Returns `true` if it was kept, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if self.limit_reached() {
            return false;
        }

        let (line, column) = diag.primary_span().map_or((1, 1), |span| {
            self.lines.offset_to_line_col(&self.source, span.start)
        });

        if diag.is_error() && diag.code.is_syntax_error() {
            if self.config.deduplicate && self.last_syntax_line == Some(line) {
                return false;
            }
            self.last_syntax_line = Some(line);
        }

        if diag.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(QueuedDiagnostic {
            diagnostic: diag,
            line,
            column,
        });
        true
    }

    /// Record an error and return proof that one was emitted.
    ///
    /// Filtered errors still yield a guarantee: filtering only happens when
    /// an earlier error was already kept.
    pub fn emit_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        debug_assert!(diag.is_error(), "emit_error called with a non-error");
        self.add(diag);
        ErrorGuaranteed::new()
    }

    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// (line, column) of each kept diagnostic, in insertion order.
    pub fn positions(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.diagnostics.iter().map(|q| (q.line, q.column))
    }

    /// Take all diagnostics, sorted by position (stable for equal positions).
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut queued = std::mem::take(&mut self.diagnostics);
        queued.sort_by_key(|q| (q.line, q.column));
        self.error_count = 0;
        self.last_syntax_line = None;
        queued.into_iter().map(|q| q.diagnostic).collect()
    }
}

#[cfg(test)]
mod tests;
