//! AST construction errors.
//!
//! Every failure carries the span of the offending CST node and maps to one
//! stable `ErrorCode`, so a failed statement turns into exactly one located
//! diagnostic.

use pyfront_diagnostic::{Diagnostic, ErrorCode};
use pyfront_ir::{ArenaOverflow, CallArguments, Span};

/// Reasons an argument list is rejected.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralError {
    #[error("Generator expression must be parenthesized if not sole argument")]
    AmbiguousGeneratorArgument,
    #[error("more than 255 arguments")]
    TooManyArguments { count: usize },
    #[error("non-keyword arg after keyword arg")]
    PositionalAfterKeyword,
    #[error("only named arguments may follow *expression")]
    PositionalAfterSplat,
    #[error("keyword can't be an expression")]
    KeywordIsComplexExpression,
    #[error("lambda cannot contain assignment")]
    KeywordIsLambda,
    #[error("cannot assign to {name}")]
    ForbiddenKeywordName { name: &'static str },
    #[error("keyword argument repeated")]
    DuplicateKeywordName { name: &'static str },
}

/// Everything that can stop the lowering of one statement.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildErrorKind {
    #[error(transparent)]
    Structural(#[from] StructuralError),
    /// A lambda parameter or comprehension target names a forbidden name.
    #[error("cannot assign to {name}")]
    ForbiddenName { name: &'static str },
    /// A comprehension target that cannot be stored to.
    #[error("cannot assign to {what}")]
    InvalidTarget { what: &'static str },
    /// A tree shape the builder does not lower.
    #[error("unsupported syntax: {what}")]
    Unsupported { what: &'static str },
}

/// A located AST construction error.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq, Hash)]
#[error("{kind}")]
pub struct BuildError {
    pub kind: BuildErrorKind,
    pub span: Span,
}

impl BuildError {
    #[cold]
    pub fn new(kind: impl Into<BuildErrorKind>, span: Span) -> Self {
        BuildError {
            kind: kind.into(),
            span,
        }
    }

    /// A list at `span` that the arena could not store.
    #[cold]
    pub fn arena_overflow(overflow: ArenaOverflow, span: Span) -> Self {
        let what = match overflow {
            ArenaOverflow::ListTooLong { .. } => "list with more than 65535 elements",
            ArenaOverflow::TableFull => "module with more list entries than one arena holds",
        };
        BuildError::new(BuildErrorKind::Unsupported { what }, span)
    }

    /// The structural reason, if this is an argument-list error.
    pub fn structural(&self) -> Option<StructuralError> {
        match self.kind {
            BuildErrorKind::Structural(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            BuildErrorKind::Structural(reason) => match reason {
                StructuralError::AmbiguousGeneratorArgument => ErrorCode::E2001,
                StructuralError::TooManyArguments { .. } => ErrorCode::E2002,
                StructuralError::PositionalAfterKeyword => ErrorCode::E2003,
                StructuralError::PositionalAfterSplat => ErrorCode::E2004,
                StructuralError::KeywordIsComplexExpression => ErrorCode::E2005,
                StructuralError::KeywordIsLambda => ErrorCode::E2006,
                StructuralError::ForbiddenKeywordName { .. } => ErrorCode::E2007,
                StructuralError::DuplicateKeywordName { .. } => ErrorCode::E2008,
            },
            BuildErrorKind::ForbiddenName { .. } => ErrorCode::E2007,
            BuildErrorKind::Unsupported { .. } => ErrorCode::E2009,
            BuildErrorKind::InvalidTarget { .. } => ErrorCode::E2010,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self.kind {
            BuildErrorKind::Structural(reason) => match reason {
                StructuralError::AmbiguousGeneratorArgument => diag
                    .with_label(self.span, "generator is not the only argument")
                    .with_suggestion("wrap the generator expression in parentheses"),
                StructuralError::TooManyArguments { count } => diag
                    .with_label(self.span, format!("{count} arguments"))
                    .with_note(format!(
                        "a call takes at most {} positional and keyword arguments",
                        CallArguments::MAX_CALL_ARGUMENTS
                    )),
                StructuralError::PositionalAfterKeyword => diag
                    .with_label(self.span, "positional argument follows keyword argument"),
                StructuralError::PositionalAfterSplat => {
                    diag.with_label(self.span, "positional argument follows `*` argument")
                }
                StructuralError::KeywordIsComplexExpression => {
                    diag.with_label(self.span, "expected a plain name before `=`")
                }
                StructuralError::KeywordIsLambda => diag
                    .with_label(self.span, "this lambda is followed by `=`")
                    .with_suggestion("use `==` to compare inside the lambda body"),
                StructuralError::ForbiddenKeywordName { name } => {
                    diag.with_label(self.span, format!("`{name}` cannot be bound"))
                }
                StructuralError::DuplicateKeywordName { name } => {
                    diag.with_label(self.span, format!("`{name}` given again here"))
                }
            },
            BuildErrorKind::ForbiddenName { name } => {
                diag.with_label(self.span, format!("`{name}` cannot be bound"))
            }
            BuildErrorKind::InvalidTarget { .. } => diag.with_label(self.span, "not assignable"),
            BuildErrorKind::Unsupported { .. } => diag.with_label(self.span, "here"),
        }
    }
}

#[cfg(test)]
mod tests;
