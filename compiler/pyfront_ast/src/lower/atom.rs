//! Atoms and their trailers.

use pyfront_ir::{BinaryOp, ExprId, ExprKind, ExprRange, Name, NodeId, Symbol, TokenKind};

use super::AstBuilder;
use crate::call::CallArgumentBuilder;
use crate::error::BuildError;

impl AstBuilder<'_> {
    /// `atom trailer* ['**' factor]`
    pub(super) fn lower_power(&mut self, node: NodeId) -> Result<ExprId, BuildError> {
        let tree = self.tree;
        let children = tree.children(node);
        let Some((&atom, mut rest)) = children.split_first() else {
            return Err(self.unsupported(node, "power"));
        };
        let start = tree.span(atom);
        let mut value = self.lower(atom)?;
        while let [trailer, tail @ ..] = rest {
            if !tree.is_symbol(*trailer, Symbol::Trailer) {
                break;
            }
            value = self.lower_trailer(value, *trailer)?;
            rest = tail;
        }
        match rest {
            [] => Ok(value),
            [op, exponent] if tree.is_token(*op, &TokenKind::DoubleStar) => {
                let right = self.lower(*exponent)?;
                Ok(self.alloc(
                    ExprKind::BinOp {
                        left: value,
                        op: BinaryOp::Pow,
                        right,
                    },
                    start.merge(tree.span(*exponent)),
                ))
            }
            _ => Err(self.unsupported(node, "power")),
        }
    }

    fn lower_trailer(&mut self, value: ExprId, trailer: NodeId) -> Result<ExprId, BuildError> {
        let tree = self.tree;
        let span = self.arena.get_expr(value).span.merge(tree.span(trailer));
        match tree.child(trailer, 0).and_then(|open| tree.token(open)) {
            Some(TokenKind::LParen) => {
                CallArgumentBuilder::new(tree, self.forbidden).build_call(self, value, trailer)
            }
            Some(TokenKind::Dot) => match tree.child(trailer, 1).and_then(|n| tree.token(n)) {
                Some(TokenKind::Name(attr)) => {
                    Ok(self.alloc(ExprKind::Attribute { value, attr }, span))
                }
                _ => Err(self.unsupported(trailer, "attribute name")),
            },
            Some(TokenKind::LBracket) => {
                let [_, index, _] = self.children_array(trailer)?;
                let index = self.lower(index)?;
                Ok(self.alloc(ExprKind::Subscript { value, index }, span))
            }
            _ => Err(self.unsupported(trailer, "trailer")),
        }
    }

    /// Parenthesized forms, list displays and implicitly joined strings.
    pub(super) fn lower_atom(&mut self, node: NodeId) -> Result<ExprId, BuildError> {
        let tree = self.tree;
        let span = tree.span(node);
        let children = tree.children(node);
        let open = children.first().and_then(|&first| tree.token(first));
        let kind = match (open, children) {
            (Some(TokenKind::String(_)), _) => ExprKind::Str(self.join_strings(node)),
            (Some(TokenKind::LParen), [_, _]) => ExprKind::Tuple(ExprRange::EMPTY),
            (Some(TokenKind::LBracket), [_, _]) => ExprKind::List(ExprRange::EMPTY),
            (Some(TokenKind::LParen), [_, inner, _]) => {
                if !tree.is_symbol(*inner, Symbol::TestlistComp) {
                    // A parenthesized expression is the expression itself.
                    return self.lower(*inner);
                }
                if let Some(comp_for) = self.comp_for_of(*inner) {
                    return self.lower_generator(node, *inner, comp_for);
                }
                ExprKind::Tuple(self.lower_elements(*inner)?)
            }
            (Some(TokenKind::LBracket), [_, inner, _]) => {
                if !tree.is_symbol(*inner, Symbol::TestlistComp) {
                    let element = self.lower(*inner)?;
                    let elements = self.arena.alloc_expr_list([element]);
                    ExprKind::List(elements.map_err(self.overflow_at(node))?)
                } else if let Some(comp_for) = self.comp_for_of(*inner) {
                    return self.lower_list_comp(node, *inner, comp_for);
                } else {
                    ExprKind::List(self.lower_elements(*inner)?)
                }
            }
            _ => return Err(self.unsupported(node, "atom")),
        };
        Ok(self.alloc(kind, span))
    }

    fn join_strings(&self, node: NodeId) -> Name {
        let pieces: Vec<&str> = self
            .tree
            .children(node)
            .iter()
            .filter_map(|&piece| match self.tree.token(piece) {
                Some(TokenKind::String(text)) => Some(self.interner.lookup(text)),
                _ => None,
            })
            .collect();
        self.interner.intern(&pieces.join(" "))
    }
}
