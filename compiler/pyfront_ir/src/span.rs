//! Byte-offset spans.
//!
//! Every token, CST node and AST node carries one. Line and column numbers
//! are computed on demand by the diagnostic layer.

use std::fmt;
use std::ops::Range;

/// Half-open byte range `start..end` into one source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder for tokens that have no source position.
    pub const DUMMY: Span = Span::point(0);

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span::new(offset, offset)
    }

    /// Convert a lexer byte range.
    ///
    /// # Panics
    /// If either bound does not fit in `u32`; sources are capped at 4 GiB.
    #[track_caller]
    pub fn from_range(range: Range<usize>) -> Self {
        let narrow = |offset: usize| {
            u32::try_from(offset)
                .unwrap_or_else(|_| panic!("byte offset {offset} exceeds u32::MAX"))
        };
        Span::new(narrow(range.start), narrow(range.end))
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
crate::static_assert_size!(Span, 8);

#[cfg(test)]
mod tests;
