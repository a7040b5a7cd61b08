//! pyfront IR - syntax data structures shared by every front-end phase.
//!
//! This crate contains:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - The concrete syntax tree (`ConcreteTree` of `ParseNode`s) produced by
//!   the parser
//! - AST nodes (`Expr`, `Keyword`, `CallArguments`, ...) and the `AstArena`
//!   that owns them for one compilation unit
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and literal text become `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//! - **Free Everything At Once**: nodes are never removed from an arena; the
//!   whole arena is dropped at the end of the unit

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
pub mod cst;
mod expr_id;
mod interner;
mod name;
mod span;
mod token;

pub use arena::{ArenaOverflow, AstArena};
pub use ast::{
    BinaryOp, BoolOp, CallArguments, CmpOp, Comparator, ComparatorRange, Comprehension,
    ComprehensionRange, Expr, ExprKind, ExprRange, Keyword, KeywordRange, Param, ParamRange,
    UnaryOp,
};
pub use cst::{ConcreteTree, NodeId, NodeKind, ParseNode, Symbol};
pub use expr_id::ExprId;
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
