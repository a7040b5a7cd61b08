//! Lexer errors.
//!
//! The lexer never stops early: each problem becomes an `Error` token in the
//! stream plus one `LexError` here, so the parser can keep going and the
//! driver can report everything at once.

use pyfront_diagnostic::{Diagnostic, ErrorCode};
use pyfront_ir::Span;

/// A lexer error with its location.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    InvalidCharacter { found: char },
    /// Missing closing quote on the same line.
    UnterminatedString,
}

impl LexError {
    pub fn invalid_character(span: Span, found: char) -> Self {
        LexError {
            span,
            kind: LexErrorKind::InvalidCharacter { found },
        }
    }

    pub fn unterminated_string(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::InvalidCharacter { .. } => ErrorCode::E0001,
            LexErrorKind::UnterminatedString => ErrorCode::E0002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match &self.kind {
            LexErrorKind::InvalidCharacter { found } => Diagnostic::error(self.code())
                .with_message(format!("invalid character {found:?} in source"))
                .with_label(self.span, "not valid here"),
            LexErrorKind::UnterminatedString => Diagnostic::error(self.code())
                .with_message("unterminated string literal")
                .with_label(self.span, "string starts here")
                .with_suggestion("close the string on the same line"),
        }
    }
}
