//! AST node types.
//!
//! All children are arena indices (`ExprId`) or arena ranges; nodes are
//! `Copy` and never own heap memory, so dropping the `AstArena` reclaims an
//! entire compilation unit at once.

mod call;
mod expr;
mod operators;
mod ranges;

pub use call::{CallArguments, Keyword};
pub use expr::{Comparator, Comprehension, Expr, ExprKind, Param};
pub use operators::{BinaryOp, BoolOp, CmpOp, UnaryOp};
pub use ranges::{ComparatorRange, ComprehensionRange, ExprRange, KeywordRange, ParamRange};
