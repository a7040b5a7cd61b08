//! Call-site argument structures.

use super::ranges::KeywordRange;
use crate::{ExprId, ExprRange, Name, Span};

/// A `name=value` argument.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Keyword {
    pub arg: Name,
    pub value: ExprId,
    /// Span of the whole `name=value` argument.
    pub span: Span,
}

/// Validated arguments of one call.
///
/// - `positional` holds plain positional arguments in source order, or the
///   single bare generator expression
/// - `keywords` holds `name=value` pairs in source order, names pairwise
///   distinct
/// - `splat_positional` is the `*expr` argument
/// - `splat_keyword` is the `**expr` argument
///
/// The arity bound keeps `positional.len() + keywords.len()` at or below
/// `MAX_CALL_ARGUMENTS`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct CallArguments {
    pub positional: ExprRange,
    pub keywords: KeywordRange,
    pub splat_positional: Option<ExprId>,
    pub splat_keyword: Option<ExprId>,
}

impl CallArguments {
    /// Largest number of positional, keyword and generator arguments a
    /// single call may have.
    pub const MAX_CALL_ARGUMENTS: usize = 255;

    /// A call with no arguments at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
            && self.keywords.is_empty()
            && self.splat_positional.is_none()
            && self.splat_keyword.is_none()
    }
}
