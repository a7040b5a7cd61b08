//! Comprehension clauses.

use pyfront_ir::{NodeId, Symbol, TokenKind};
use pyfront_stack::ensure_sufficient_stack;

use super::starts_arith;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `comp_for: 'for' exprlist 'in' or_test [comp_iter]`
    pub(crate) fn parse_comp_for(&mut self) -> Result<NodeId, ParseError> {
        let mut children = vec![self.bump()];
        children.push(self.parse_exprlist()?);
        children.push(self.expect(&TokenKind::In)?);
        children.push(self.parse_or_test()?);
        if let Some(iter) = self.parse_comp_iter()? {
            children.push(iter);
        }
        Ok(self.materialize(Symbol::CompFor, &children))
    }

    /// `comp_if: 'if' or_test [comp_iter]`
    fn parse_comp_if(&mut self) -> Result<NodeId, ParseError> {
        let mut children = vec![self.bump()];
        children.push(self.parse_or_test()?);
        if let Some(iter) = self.parse_comp_iter()? {
            children.push(iter);
        }
        Ok(self.materialize(Symbol::CompIf, &children))
    }

    /// `comp_iter: comp_for | comp_if`
    fn parse_comp_iter(&mut self) -> Result<Option<NodeId>, ParseError> {
        ensure_sufficient_stack(|| match self.cursor.current_kind() {
            TokenKind::For => self.parse_comp_for().map(Some),
            TokenKind::If => self.parse_comp_if().map(Some),
            _ => Ok(None),
        })
    }

    /// `exprlist: arith_expr (',' arith_expr)* [',']`
    fn parse_exprlist(&mut self) -> Result<NodeId, ParseError> {
        let mut children = vec![self.parse_arith_expr()?];
        while self.check(&TokenKind::Comma) {
            children.push(self.bump());
            if !starts_arith(self.cursor.current_kind()) {
                break;
            }
            children.push(self.parse_arith_expr()?);
        }
        Ok(self.collapse(Symbol::Exprlist, &children))
    }
}
