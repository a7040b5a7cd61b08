//! Statement and list productions.

use pyfront_ir::{NodeId, Symbol, TokenKind};

use super::starts_test;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `expr_stmt: testlist NEWLINE`
    pub(crate) fn parse_expr_stmt(&mut self) -> Result<NodeId, ParseError> {
        let testlist = self.parse_testlist()?;
        if !self.check(&TokenKind::Newline) {
            return Err(ParseError::unexpected(self.current(), "end of line"));
        }
        let newline = self.bump();
        Ok(self.materialize(Symbol::ExprStmt, &[testlist, newline]))
    }

    /// `testlist: test (',' test)* [',']`
    pub(crate) fn parse_testlist(&mut self) -> Result<NodeId, ParseError> {
        let mut children = vec![self.parse_test()?];
        while self.check(&TokenKind::Comma) {
            children.push(self.bump());
            if !starts_test(self.cursor.current_kind()) {
                break;
            }
            children.push(self.parse_test()?);
        }
        Ok(self.collapse(Symbol::Testlist, &children))
    }
}
