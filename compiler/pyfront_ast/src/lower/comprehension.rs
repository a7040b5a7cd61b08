//! Generator expressions, list comprehensions and their targets.

use pyfront_ir::{Comprehension, ComprehensionRange, ExprId, ExprKind, NodeId, Symbol, TokenKind};

use super::AstBuilder;
use crate::error::{BuildError, BuildErrorKind};
use crate::forbidden::NameValidator;

impl AstBuilder<'_> {
    /// The `comp_for` of an `elt comp_for` pair, if `node` is one.
    pub(super) fn comp_for_of(&self, node: NodeId) -> Option<NodeId> {
        match self.tree.children(node) {
            [_, comp_for] if self.tree.is_symbol(*comp_for, Symbol::CompFor) => Some(*comp_for),
            _ => None,
        }
    }

    /// `holder` is the `elt comp_for` pair; the result spans `span_node`.
    pub(super) fn lower_generator(
        &mut self,
        span_node: NodeId,
        holder: NodeId,
        comp_for: NodeId,
    ) -> Result<ExprId, BuildError> {
        let (elt, generators) = self.lower_comprehension(holder, comp_for)?;
        Ok(self.alloc(
            ExprKind::GeneratorExp { elt, generators },
            self.tree.span(span_node),
        ))
    }

    pub(super) fn lower_list_comp(
        &mut self,
        span_node: NodeId,
        holder: NodeId,
        comp_for: NodeId,
    ) -> Result<ExprId, BuildError> {
        let (elt, generators) = self.lower_comprehension(holder, comp_for)?;
        Ok(self.alloc(
            ExprKind::ListComp { elt, generators },
            self.tree.span(span_node),
        ))
    }

    fn lower_comprehension(
        &mut self,
        holder: NodeId,
        comp_for: NodeId,
    ) -> Result<(ExprId, ComprehensionRange), BuildError> {
        let Some(elt) = self.tree.child(holder, 0) else {
            return Err(self.unsupported(holder, "comprehension"));
        };
        let elt = self.lower(elt)?;
        let generators = self.lower_clauses(comp_for)?;
        Ok((elt, generators))
    }

    /// Flatten the nested `comp_for` / `comp_if` chain into one clause per
    /// `for`, each carrying the `if`s that follow it.
    fn lower_clauses(&mut self, comp_for: NodeId) -> Result<ComprehensionRange, BuildError> {
        let tree = self.tree;
        let mut clauses = Vec::new();
        let mut next = Some(comp_for);
        while let Some(clause) = next {
            let [for_kw, target, in_kw, iter, rest @ ..] = tree.children(clause) else {
                return Err(self.unsupported(clause, "comprehension clause"));
            };
            if !tree.is_token(*for_kw, &TokenKind::For) || !tree.is_token(*in_kw, &TokenKind::In)
            {
                return Err(self.unsupported(clause, "comprehension clause"));
            }
            let target = self.lower_target(*target)?;
            let iter = self.lower(*iter)?;

            let mut ifs = Vec::new();
            next = rest.first().copied();
            while let Some(condition) = next.filter(|&n| tree.is_symbol(n, Symbol::CompIf)) {
                let Some(test) = tree.child(condition, 1) else {
                    return Err(self.unsupported(condition, "comprehension condition"));
                };
                ifs.push(self.lower(test)?);
                next = tree.child(condition, 2);
            }
            let ifs = self
                .arena
                .alloc_expr_list(ifs)
                .map_err(self.overflow_at(clause))?;
            clauses.push(Comprehension { target, iter, ifs });
        }
        self.arena
            .alloc_comprehensions(clauses)
            .map_err(self.overflow_at(comp_for))
    }

    /// Lower a `for` target and check that it can be assigned to.
    fn lower_target(&mut self, node: NodeId) -> Result<ExprId, BuildError> {
        let target = self.lower(node)?;
        self.check_store_target(target)?;
        Ok(target)
    }

    fn check_store_target(&self, id: ExprId) -> Result<(), BuildError> {
        let expr = *self.arena.get_expr(id);
        match expr.kind {
            ExprKind::Name(name) => match self.forbidden.forbidden(name) {
                Some(name) => Err(BuildError::new(
                    BuildErrorKind::ForbiddenName { name },
                    expr.span,
                )),
                None => Ok(()),
            },
            ExprKind::Attribute { .. } | ExprKind::Subscript { .. } => Ok(()),
            ExprKind::Tuple(elements) | ExprKind::List(elements) => self
                .arena
                .get_expr_list(elements)
                .iter()
                .try_for_each(|&element| self.check_store_target(element)),
            other => Err(BuildError::new(
                BuildErrorKind::InvalidTarget {
                    what: other.describe(),
                },
                expr.span,
            )),
        }
    }
}
