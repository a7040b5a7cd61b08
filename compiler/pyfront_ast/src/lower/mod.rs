//! CST to AST lowering.
//!
//! `AstBuilder` walks the concrete tree produced by `pyfront_parse` and
//! allocates AST nodes into an `AstArena`. Calls are handed to the
//! `CallArgumentBuilder`, which re-enters the builder through
//! `ExpressionEvaluator` for every argument.

mod atom;
mod comprehension;
mod lambda;
mod operators;

use pyfront_diagnostic::{DiagnosticQueue, ErrorGuaranteed};
use pyfront_ir::{
    ArenaOverflow, AstArena, ConcreteTree, Expr, ExprId, ExprKind, ExprRange, Name, NodeId,
    NodeKind, Span, StringInterner, Symbol, TokenKind,
};
use pyfront_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::call::ExpressionEvaluator;
use crate::config::{CompileInfo, Mode};
use crate::error::{BuildError, BuildErrorKind};
use crate::forbidden::ForbiddenNames;

/// Result of lowering one compilation unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstModule {
    pub arena: AstArena,
    /// One expression per statement that lowered cleanly, in source order.
    pub body: Vec<ExprId>,
    /// Set when at least one statement was reported to the queue.
    pub error: Option<ErrorGuaranteed>,
}

/// Lowers a `ConcreteTree` into an `AstArena`.
pub struct AstBuilder<'a> {
    tree: &'a ConcreteTree,
    interner: &'a StringInterner,
    info: &'a CompileInfo,
    forbidden: ForbiddenNames,
    arena: AstArena,
}

impl<'a> AstBuilder<'a> {
    pub fn new(
        tree: &'a ConcreteTree,
        interner: &'a StringInterner,
        info: &'a CompileInfo,
    ) -> Self {
        AstBuilder {
            tree,
            interner,
            info,
            forbidden: ForbiddenNames::new(interner),
            arena: AstArena::new(),
        }
    }

    /// Lower every statement under `root`.
    ///
    /// A statement that fails is reported to `queue` exactly once and left
    /// out of the body; lowering continues with the next one.
    #[tracing::instrument(level = "debug", skip_all, fields(file = %self.info.filename))]
    pub fn build(mut self, root: NodeId, queue: &mut DiagnosticQueue) -> AstModule {
        let mut body = Vec::new();
        let mut error = None;
        for statement in self.statements(root) {
            match statement.and_then(|node| self.lower(node)) {
                Ok(expr) => body.push(expr),
                Err(err) => {
                    debug!(code = %err.code(), span = ?err.span, "statement rejected");
                    error = Some(queue.emit_error(err.to_diagnostic()));
                }
            }
        }
        debug!(
            statements = body.len(),
            exprs = self.arena.expr_count(),
            "lowered module"
        );
        AstModule {
            arena: self.arena,
            body,
            error,
        }
    }

    /// Lower a single expression node, outside any statement.
    pub fn build_expression(&mut self, node: NodeId) -> Result<ExprId, BuildError> {
        self.lower(node)
    }

    pub fn arena(&self) -> &AstArena {
        &self.arena
    }

    pub fn into_arena(self) -> AstArena {
        self.arena
    }

    /// Expression nodes of each statement under `root`, checked against the
    /// compile mode.
    fn statements(&self, root: NodeId) -> Vec<Result<NodeId, BuildError>> {
        let expected = match self.info.mode {
            Mode::Exec => Symbol::FileInput,
            Mode::Eval => Symbol::EvalInput,
        };
        if !self.tree.is_symbol(root, expected) {
            return vec![Err(self.unsupported(root, "top-level form for this mode"))];
        }
        self.tree
            .children(root)
            .iter()
            .map(|&child| match self.tree.symbol(child) {
                Some(Symbol::ExprStmt) => self
                    .tree
                    .child(child, 0)
                    .ok_or_else(|| self.unsupported(child, "empty statement")),
                _ => Ok(child),
            })
            .collect()
    }

    fn lower(&mut self, node: NodeId) -> Result<ExprId, BuildError> {
        ensure_sufficient_stack(|| self.lower_node(node))
    }

    fn lower_node(&mut self, node: NodeId) -> Result<ExprId, BuildError> {
        let span = self.tree.span(node);
        let kind = match self.tree.kind(node) {
            NodeKind::Token(TokenKind::Name(name)) => ExprKind::Name(name),
            NodeKind::Token(TokenKind::Number(text)) => ExprKind::Num(text),
            NodeKind::Token(TokenKind::String(text)) => ExprKind::Str(text),
            NodeKind::Token(_) => {
                return Err(self.unsupported(node, "token in expression position"));
            }
            NodeKind::Symbol(symbol) => return self.lower_symbol(symbol, node),
        };
        Ok(self.alloc(kind, span))
    }

    fn lower_symbol(&mut self, symbol: Symbol, node: NodeId) -> Result<ExprId, BuildError> {
        match symbol {
            Symbol::Testlist | Symbol::Exprlist | Symbol::TestlistComp => {
                if let Some(comp_for) = self.comp_for_of(node) {
                    return self.lower_generator(node, node, comp_for);
                }
                let elements = self.lower_elements(node)?;
                Ok(self.alloc(ExprKind::Tuple(elements), self.tree.span(node)))
            }
            Symbol::Test => self.lower_conditional(node),
            Symbol::Lambdef => self.lower_lambda(node),
            Symbol::OrTest | Symbol::AndTest => self.lower_bool_op(symbol, node),
            Symbol::NotTest | Symbol::Factor => self.lower_unary(node),
            Symbol::Comparison => self.lower_comparison(node),
            Symbol::ArithExpr | Symbol::Term => self.lower_binary_chain(node),
            Symbol::Power => self.lower_power(node),
            Symbol::Atom => self.lower_atom(node),
            Symbol::FileInput
            | Symbol::EvalInput
            | Symbol::ExprStmt
            | Symbol::Varargslist
            | Symbol::Trailer
            | Symbol::Arglist
            | Symbol::Argument
            | Symbol::CompFor
            | Symbol::CompIf => Err(self.unsupported(node, symbol.as_str())),
        }
    }

    /// `body if test else orelse`
    fn lower_conditional(&mut self, node: NodeId) -> Result<ExprId, BuildError> {
        let [body, _, test, _, orelse] = self.children_array(node)?;
        let body = self.lower(body)?;
        let test = self.lower(test)?;
        let orelse = self.lower(orelse)?;
        Ok(self.alloc(
            ExprKind::IfExp { test, body, orelse },
            self.tree.span(node),
        ))
    }

    /// Lower every non-comma child and store them as one list.
    fn lower_elements(&mut self, node: NodeId) -> Result<ExprRange, BuildError> {
        let tree = self.tree;
        let mut elements = Vec::new();
        for &child in tree.children(node) {
            if !tree.is_token(child, &TokenKind::Comma) {
                elements.push(self.lower(child)?);
            }
        }
        self.arena
            .alloc_expr_list(elements)
            .map_err(self.overflow_at(node))
    }

    /// Maps an arena overflow to an error located at `node`.
    fn overflow_at(&self, node: NodeId) -> impl FnOnce(ArenaOverflow) -> BuildError {
        let span = self.tree.span(node);
        move |overflow| BuildError::arena_overflow(overflow, span)
    }

    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    /// Exactly `N` children, or an unsupported-shape error.
    fn children_array<const N: usize>(&self, node: NodeId) -> Result<[NodeId; N], BuildError> {
        <[NodeId; N]>::try_from(self.tree.children(node))
            .map_err(|_| self.unsupported(node, "node shape"))
    }

    #[cold]
    fn unsupported(&self, node: NodeId, what: &'static str) -> BuildError {
        BuildError::new(BuildErrorKind::Unsupported { what }, self.tree.span(node))
    }
}

impl ExpressionEvaluator for AstBuilder<'_> {
    fn evaluate(&mut self, node: NodeId) -> Result<ExprId, BuildError> {
        self.lower(node)
    }

    fn evaluate_generator(&mut self, argument: NodeId) -> Result<ExprId, BuildError> {
        match self.comp_for_of(argument) {
            Some(comp_for) => self.lower_generator(argument, argument, comp_for),
            None => Err(self.unsupported(argument, "generator argument shape")),
        }
    }

    fn arena(&self) -> &AstArena {
        &self.arena
    }

    fn arena_mut(&mut self) -> &mut AstArena {
        &mut self.arena
    }

    fn name_text(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }
}

#[cfg(test)]
mod tests;
