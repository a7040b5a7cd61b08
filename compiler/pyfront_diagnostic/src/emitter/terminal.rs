//! Terminal emitter: `file:line:col` headers, one source line per label with
//! a caret underline, then the `= note:` / `= help:` footers.

use std::io::Write;

use crate::diagnostic::{Footer, Label, LabelStyle};
use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

const RED: &str = "\x1b[1;31m";
const YELLOW: &str = "\x1b[1;33m";
const BLUE: &str = "\x1b[1;34m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// When to emit ANSI escapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color iff the output is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse `auto`, `always` or `never`.
    pub fn from_flag(value: &str) -> Option<Self> {
        Some(match value {
            "auto" => ColorMode::Auto,
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => return None,
        })
    }
}

pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    filename: &'src str,
    source: &'src str,
    lines: LineOffsetTable,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    pub fn new(
        writer: W,
        mode: ColorMode,
        is_tty: bool,
        filename: &'src str,
        source: &'src str,
    ) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            filename,
            source,
            lines: LineOffsetTable::build(source),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    // Write failures on a diagnostics stream have nowhere to be reported.
    fn paint(&mut self, text: &str, escape: &str) {
        let _ = if self.colors {
            write!(self.writer, "{escape}{text}{RESET}")
        } else {
            self.writer.write_all(text.as_bytes())
        };
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.writer, "{text}");
    }

    fn emit_label(&mut self, label: &Label, accent: &'static str) {
        let (line, column) = self.lines.offset_to_line_col(self.source, label.span.start);
        let text = self.lines.line_text(self.source, line);
        let line_no = line.to_string();
        let gutter = " ".repeat(line_no.len());
        let (arrow, mark, escape) = match label.style {
            LabelStyle::Primary => ("-->", '^', accent),
            LabelStyle::Secondary => (":::", '-', BLUE),
        };

        self.line(&format!("{gutter}{arrow} {}:{line}:{column}", self.filename));
        self.line(&format!("{gutter} |"));
        self.line(&format!("{line_no} | {text}"));

        let indent = column.saturating_sub(1) as usize;
        let remaining = text.chars().skip(indent).count();
        let width = remaining.min(label.span.len() as usize).max(1);
        let _ = write!(self.writer, "{gutter} | {}", " ".repeat(indent));
        let underline: String = std::iter::repeat(mark).take(width).collect();
        self.paint(&format!("{underline} {}", label.message), escape);
        self.line("");
    }
}

fn accent(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => RED,
        Severity::Warning => YELLOW,
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let accent = accent(diagnostic.severity);
        self.paint(diagnostic.severity.as_str(), accent);
        self.paint(&format!("[{}]", diagnostic.code), BOLD);
        self.line(&format!(": {}", diagnostic.message));

        for label in &diagnostic.labels {
            self.emit_label(label, accent);
        }
        for footer in &diagnostic.footers {
            let (kind, text) = match footer {
                Footer::Note(text) => ("note", text),
                Footer::Help(text) => ("help", text),
            };
            self.line(&format!("  = {kind}: {text}"));
        }
        self.line("");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let totals = [(error_count, "error", RED), (warning_count, "warning", YELLOW)];
        for (count, noun, escape) in totals {
            if count == 0 {
                continue;
            }
            let plural = if count == 1 { "" } else { "s" };
            self.paint(&format!("{count} {noun}{plural} emitted"), escape);
            self.line("");
        }
    }
}

#[cfg(test)]
mod tests;
