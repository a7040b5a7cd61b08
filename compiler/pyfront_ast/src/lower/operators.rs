//! Boolean, comparison, arithmetic and unary operators.

use pyfront_ir::{
    BinaryOp, BoolOp, CmpOp, Comparator, ExprId, ExprKind, NodeId, Symbol, TokenKind, UnaryOp,
};

use super::AstBuilder;
use crate::error::BuildError;

impl AstBuilder<'_> {
    /// `a or b or c` becomes one `BoolOp` holding every operand.
    pub(super) fn lower_bool_op(
        &mut self,
        symbol: Symbol,
        node: NodeId,
    ) -> Result<ExprId, BuildError> {
        let op = if symbol == Symbol::OrTest {
            BoolOp::Or
        } else {
            BoolOp::And
        };
        let tree = self.tree;
        let operands = tree.children(node);
        let mut values = Vec::with_capacity(operands.len() / 2 + 1);
        for &operand in operands.iter().step_by(2) {
            values.push(self.lower(operand)?);
        }
        let values = self
            .arena
            .alloc_expr_list(values)
            .map_err(self.overflow_at(node))?;
        Ok(self.alloc(ExprKind::BoolOp { op, values }, self.tree.span(node)))
    }

    /// `not x`, `-x`, `+x`, `~x`
    pub(super) fn lower_unary(&mut self, node: NodeId) -> Result<ExprId, BuildError> {
        let [op_token, operand] = self.children_array(node)?;
        let op = match self.tree.token(op_token) {
            Some(TokenKind::Not) => UnaryOp::Not,
            Some(TokenKind::Plus) => UnaryOp::UAdd,
            Some(TokenKind::Minus) => UnaryOp::USub,
            Some(TokenKind::Tilde) => UnaryOp::Invert,
            _ => return Err(self.unsupported(op_token, "unary operator")),
        };
        let operand = self.lower(operand)?;
        Ok(self.alloc(ExprKind::UnaryOp { op, operand }, self.tree.span(node)))
    }

    /// Chained comparison: `a < b <= c` keeps `a` as `left` and one
    /// comparator per step.
    pub(super) fn lower_comparison(&mut self, node: NodeId) -> Result<ExprId, BuildError> {
        let tree = self.tree;
        let children = tree.children(node);
        let Some((&first, mut rest)) = children.split_first() else {
            return Err(self.unsupported(node, "comparison"));
        };
        let left = self.lower(first)?;
        let mut comparators = Vec::new();
        while let [op_token, tail @ ..] = rest {
            let (op, tail) = match self.tree.token(*op_token) {
                Some(TokenKind::Not) => match tail {
                    [in_token, tail @ ..] if self.tree.is_token(*in_token, &TokenKind::In) => {
                        (CmpOp::NotIn, tail)
                    }
                    _ => return Err(self.unsupported(*op_token, "comparison operator")),
                },
                Some(kind) => match comparison_op(&kind) {
                    Some(op) => (op, tail),
                    None => return Err(self.unsupported(*op_token, "comparison operator")),
                },
                None => return Err(self.unsupported(*op_token, "comparison operator")),
            };
            let [right, tail @ ..] = tail else {
                return Err(self.unsupported(node, "comparison"));
            };
            comparators.push(Comparator {
                op,
                right: self.lower(*right)?,
            });
            rest = tail;
        }
        let comparators = self
            .arena
            .alloc_comparators(comparators)
            .map_err(self.overflow_at(node))?;
        Ok(self.alloc(ExprKind::Compare { left, comparators }, self.tree.span(node)))
    }

    /// Left-associative `arith_expr` / `term` chains. Each `BinOp` spans
    /// from the first operand to its right operand.
    pub(super) fn lower_binary_chain(&mut self, node: NodeId) -> Result<ExprId, BuildError> {
        let tree = self.tree;
        let children = tree.children(node);
        let Some((&first, rest)) = children.split_first() else {
            return Err(self.unsupported(node, "operator chain"));
        };
        let start = self.tree.span(first);
        let mut left = self.lower(first)?;
        for pair in rest.chunks(2) {
            let &[op_token, right] = pair else {
                return Err(self.unsupported(node, "operator chain"));
            };
            let op = self
                .tree
                .token(op_token)
                .and_then(|kind| binary_op(&kind))
                .ok_or_else(|| self.unsupported(op_token, "binary operator"))?;
            let right_span = self.tree.span(right);
            let right = self.lower(right)?;
            left = self.alloc(
                ExprKind::BinOp { left, op, right },
                start.merge(right_span),
            );
        }
        Ok(left)
    }
}

fn binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    Some(match kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::DoubleSlash => BinaryOp::FloorDiv,
        TokenKind::Percent => BinaryOp::Mod,
        TokenKind::DoubleStar => BinaryOp::Pow,
        _ => return None,
    })
}

fn comparison_op(kind: &TokenKind) -> Option<CmpOp> {
    Some(match kind {
        TokenKind::EqEqual => CmpOp::Eq,
        TokenKind::NotEqual => CmpOp::NotEq,
        TokenKind::Less => CmpOp::Lt,
        TokenKind::LessEqual => CmpOp::LtE,
        TokenKind::Greater => CmpOp::Gt,
        TokenKind::GreaterEqual => CmpOp::GtE,
        TokenKind::In => CmpOp::In,
        _ => return None,
    })
}
