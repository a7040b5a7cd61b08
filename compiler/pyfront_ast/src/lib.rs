//! AST construction for the pyfront expression subset.
//!
//! Takes the permissive `ConcreteTree` from `pyfront_parse` and produces
//! `Expr` nodes in an `AstArena`, enforcing the rules the grammar leaves
//! open. Most of those rules live in [`call`]: argument ordering, keyword
//! names, generator placement and the argument count limit.
//!
//! Every failure is a located [`BuildError`] with a stable error code. A
//! statement that fails contributes exactly one diagnostic and no AST.

pub mod call;
mod config;
pub mod dump;
mod error;
mod forbidden;
mod lower;

#[cfg(test)]
mod test_helpers;

pub use config::{CompileInfo, Mode};
pub use error::{BuildError, BuildErrorKind, StructuralError};
pub use forbidden::{ForbiddenNames, NameValidator};
pub use lower::{AstBuilder, AstModule};

use pyfront_diagnostic::DiagnosticQueue;
use pyfront_ir::{ConcreteTree, NodeId, StringInterner};

/// Lower a parsed unit, reporting each failed statement to `queue`.
pub fn build_module(
    tree: &ConcreteTree,
    root: NodeId,
    interner: &StringInterner,
    info: &CompileInfo,
    queue: &mut DiagnosticQueue,
) -> AstModule {
    AstBuilder::new(tree, interner, info).build(root, queue)
}
