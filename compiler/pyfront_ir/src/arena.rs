//! Arena allocation for the flat AST.
//!
//! - Contiguous storage for all expressions of one compilation unit
//! - Child lists stored in side tables and addressed by ranges
//! - Bulk deallocation: nothing is ever removed, the arena is dropped whole

use std::fmt;

use crate::ast::{
    Comparator, ComparatorRange, Comprehension, ComprehensionRange, Keyword, KeywordRange, Param,
    ParamRange,
};
use crate::{Expr, ExprId, ExprRange};

/// Contiguous storage for every AST node of one compilation unit.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct AstArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,

    /// Flattened expression lists (call positionals, tuple elements, ...).
    expr_lists: Vec<ExprId>,

    /// Keyword arguments of calls.
    keywords: Vec<Keyword>,

    /// Comprehension clauses.
    comprehensions: Vec<Comprehension>,

    /// Lambda parameters.
    params: Vec<Param>,

    /// Chained comparison steps.
    comparators: Vec<Comparator>,
}

/// A list did not fit the arena's `(u32 start, u16 len)` ranges.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArenaOverflow {
    /// One list holds more than `u16::MAX` entries.
    ListTooLong { len: usize },
    /// A side table already holds `u32::MAX` entries.
    TableFull,
}

impl fmt::Display for ArenaOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArenaOverflow::ListTooLong { len } => {
                write!(f, "list of {len} entries exceeds {}", u16::MAX)
            }
            ArenaOverflow::TableFull => write!(f, "arena side table exceeds {} entries", u32::MAX),
        }
    }
}

impl std::error::Error for ArenaOverflow {}

/// Append `items` to `table` as one contiguous list. On overflow the table
/// is restored, so a rejected list leaves nothing behind.
fn extend_table<T>(
    table: &mut Vec<T>,
    items: impl IntoIterator<Item = T>,
) -> Result<(u32, u16), ArenaOverflow> {
    let start = table.len();
    table.extend(items);
    let len = table.len() - start;
    let bounds = match (u32::try_from(start), u16::try_from(len)) {
        (Ok(start), Ok(len)) => Ok((start, len)),
        (Err(_), _) => Err(ArenaOverflow::TableFull),
        (_, Err(_)) => Err(ArenaOverflow::ListTooLong { len }),
    };
    if bounds.is_err() {
        table.truncate(start);
    }
    bounds
}

impl AstArena {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Expressions =====

    /// Allocate expression, return ID.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("arena exceeds {} expressions", u32::MAX));
        self.exprs.push(expr);
        ExprId::new(id)
    }

    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    // ===== Expression lists =====

    /// Store `exprs` as one list.
    pub fn alloc_expr_list(
        &mut self,
        exprs: impl IntoIterator<Item = ExprId>,
    ) -> Result<ExprRange, ArenaOverflow> {
        let (start, len) = extend_table(&mut self.expr_lists, exprs)?;
        Ok(ExprRange::new(start, len))
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    // ===== Keywords =====

    pub fn alloc_keywords(
        &mut self,
        keywords: impl IntoIterator<Item = Keyword>,
    ) -> Result<KeywordRange, ArenaOverflow> {
        let (start, len) = extend_table(&mut self.keywords, keywords)?;
        Ok(KeywordRange::new(start, len))
    }

    #[inline]
    pub fn get_keywords(&self, range: KeywordRange) -> &[Keyword] {
        let start = range.start as usize;
        &self.keywords[start..start + range.len()]
    }

    // ===== Comprehensions =====

    pub fn alloc_comprehensions(
        &mut self,
        comprehensions: impl IntoIterator<Item = Comprehension>,
    ) -> Result<ComprehensionRange, ArenaOverflow> {
        let (start, len) = extend_table(&mut self.comprehensions, comprehensions)?;
        Ok(ComprehensionRange::new(start, len))
    }

    #[inline]
    pub fn get_comprehensions(&self, range: ComprehensionRange) -> &[Comprehension] {
        let start = range.start as usize;
        &self.comprehensions[start..start + range.len()]
    }

    // ===== Lambda parameters =====

    pub fn alloc_params(
        &mut self,
        params: impl IntoIterator<Item = Param>,
    ) -> Result<ParamRange, ArenaOverflow> {
        let (start, len) = extend_table(&mut self.params, params)?;
        Ok(ParamRange::new(start, len))
    }

    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Param] {
        let start = range.start as usize;
        &self.params[start..start + range.len()]
    }

    // ===== Comparisons =====

    pub fn alloc_comparators(
        &mut self,
        comparators: impl IntoIterator<Item = Comparator>,
    ) -> Result<ComparatorRange, ArenaOverflow> {
        let (start, len) = extend_table(&mut self.comparators, comparators)?;
        Ok(ComparatorRange::new(start, len))
    }

    #[inline]
    pub fn get_comparators(&self, range: ComparatorRange) -> &[Comparator] {
        let start = range.start as usize;
        &self.comparators[start..start + range.len()]
    }
}
