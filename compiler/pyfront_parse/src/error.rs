//! Parse error types.

use pyfront_diagnostic::{Diagnostic, ErrorCode};
use pyfront_ir::{Span, Token, TokenKind};

/// Parse error with error code for rich diagnostics.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// Label text for the primary span.
    pub context: Option<String>,
    /// Where a matching delimiter was opened, for unclosed-delimiter errors.
    pub opened_at: Option<Span>,
    pub help: Vec<String>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
            opened_at: None,
            help: Vec::new(),
        }
    }

    /// A token that cannot appear here.
    #[cold]
    pub fn unexpected(found: &Token, expected: &str) -> Self {
        if found.kind == TokenKind::Error {
            return Self::from_error_token(found.span);
        }
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {expected}, found `{}`", found.kind.display_name()),
            found.span,
        )
    }

    /// An expression was required.
    #[cold]
    pub fn expected_expression(found: &Token) -> Self {
        if found.kind == TokenKind::Error {
            return Self::from_error_token(found.span);
        }
        ParseError::new(
            ErrorCode::E1002,
            format!("expected expression, found `{}`", found.kind.display_name()),
            found.span,
        )
    }

    /// A closing delimiter is missing.
    #[cold]
    pub fn unclosed_delimiter(open: &TokenKind, open_span: Span, found: &Token) -> Self {
        let close = match open {
            TokenKind::LBracket => "]",
            _ => ")",
        };
        let mut err = ParseError::new(
            ErrorCode::E1003,
            format!("unclosed delimiter `{}`", open.display_name()),
            found.span,
        )
        .with_context(format!("expected `{close}`"));
        err.opened_at = Some(open_span);
        err
    }

    /// An identifier was required.
    #[cold]
    pub fn expected_identifier(found: &Token) -> Self {
        if found.kind == TokenKind::Error {
            return Self::from_error_token(found.span);
        }
        ParseError::new(
            ErrorCode::E1004,
            format!("expected identifier, found `{}`", found.kind.display_name()),
            found.span,
        )
    }

    /// The lexer already reported this position; the parser just stops here.
    #[cold]
    pub fn from_error_token(span: Span) -> Self {
        ParseError::new(ErrorCode::E1001, "invalid syntax", span)
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, self.context.as_deref().unwrap_or("here"));

        if let Some(open) = self.opened_at {
            diag = diag.with_secondary_label(open, "opened here");
        }
        for help in &self.help {
            diag = diag.with_suggestion(help);
        }
        diag
    }
}

#[cfg(test)]
mod tests;
