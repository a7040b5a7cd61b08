//! Expression productions, from `test` down to `atom`.

use pyfront_ir::{NodeId, Symbol, TokenKind};
use pyfront_stack::ensure_sufficient_stack;

use super::starts_test;
use crate::{ParseError, Parser};

const COMPARISON_OPS: &[TokenKind] = &[
    TokenKind::Less,
    TokenKind::Greater,
    TokenKind::EqEqual,
    TokenKind::GreaterEqual,
    TokenKind::LessEqual,
    TokenKind::NotEqual,
    TokenKind::In,
];

impl Parser<'_> {
    /// `test: or_test ['if' or_test 'else' test] | lambdef`
    pub(crate) fn parse_test(&mut self) -> Result<NodeId, ParseError> {
        ensure_sufficient_stack(|| self.parse_test_inner())
    }

    fn parse_test_inner(&mut self) -> Result<NodeId, ParseError> {
        if self.check(&TokenKind::Lambda) {
            return self.parse_lambdef();
        }
        let body = self.parse_or_test()?;
        if !self.check(&TokenKind::If) {
            return Ok(body);
        }
        let if_kw = self.bump();
        let test = self.parse_or_test()?;
        let else_kw = self.expect(&TokenKind::Else)?;
        let orelse = self.parse_test()?;
        Ok(self.materialize(Symbol::Test, &[body, if_kw, test, else_kw, orelse]))
    }

    /// `lambdef: 'lambda' [varargslist] ':' test`
    fn parse_lambdef(&mut self) -> Result<NodeId, ParseError> {
        let mut children = vec![self.bump()];
        if !self.check(&TokenKind::Colon) {
            children.push(self.parse_varargslist()?);
        }
        children.push(self.expect(&TokenKind::Colon)?);
        children.push(self.parse_test()?);
        Ok(self.materialize(Symbol::Lambdef, &children))
    }

    /// `varargslist: NAME (',' NAME)*`
    fn parse_varargslist(&mut self) -> Result<NodeId, ParseError> {
        let mut children = vec![self.expect_name()?];
        while self.check(&TokenKind::Comma) {
            children.push(self.bump());
            children.push(self.expect_name()?);
        }
        Ok(self.materialize(Symbol::Varargslist, &children))
    }

    /// `or_test: and_test ('or' and_test)*`
    pub(crate) fn parse_or_test(&mut self) -> Result<NodeId, ParseError> {
        let mut children = vec![self.parse_and_test()?];
        while self.check(&TokenKind::Or) {
            children.push(self.bump());
            children.push(self.parse_and_test()?);
        }
        Ok(self.collapse(Symbol::OrTest, &children))
    }

    fn parse_and_test(&mut self) -> Result<NodeId, ParseError> {
        let mut children = vec![self.parse_not_test()?];
        while self.check(&TokenKind::And) {
            children.push(self.bump());
            children.push(self.parse_not_test()?);
        }
        Ok(self.collapse(Symbol::AndTest, &children))
    }

    /// `not_test: 'not' not_test | comparison`
    fn parse_not_test(&mut self) -> Result<NodeId, ParseError> {
        if !self.check(&TokenKind::Not) {
            return self.parse_comparison();
        }
        let not_kw = self.bump();
        let operand = ensure_sufficient_stack(|| self.parse_not_test())?;
        Ok(self.materialize(Symbol::NotTest, &[not_kw, operand]))
    }

    /// `comparison: arith_expr (comp_op arith_expr)*`
    ///
    /// `not in` stays as two token children.
    fn parse_comparison(&mut self) -> Result<NodeId, ParseError> {
        let mut children = vec![self.parse_arith_expr()?];
        loop {
            let kind = self.cursor.current_kind();
            if COMPARISON_OPS.contains(&kind) {
                children.push(self.bump());
            } else if kind == TokenKind::Not && self.cursor.peek_next_kind() == TokenKind::In {
                children.push(self.bump());
                children.push(self.bump());
            } else {
                break;
            }
            children.push(self.parse_arith_expr()?);
        }
        Ok(self.collapse(Symbol::Comparison, &children))
    }

    /// `arith_expr: term (('+'|'-') term)*`
    pub(crate) fn parse_arith_expr(&mut self) -> Result<NodeId, ParseError> {
        let mut children = vec![self.parse_term()?];
        while matches!(self.cursor.current_kind(), TokenKind::Plus | TokenKind::Minus) {
            children.push(self.bump());
            children.push(self.parse_term()?);
        }
        Ok(self.collapse(Symbol::ArithExpr, &children))
    }

    /// `term: factor (('*'|'/'|'//'|'%') factor)*`
    fn parse_term(&mut self) -> Result<NodeId, ParseError> {
        let mut children = vec![self.parse_factor()?];
        while matches!(
            self.cursor.current_kind(),
            TokenKind::Star | TokenKind::Slash | TokenKind::DoubleSlash | TokenKind::Percent
        ) {
            children.push(self.bump());
            children.push(self.parse_factor()?);
        }
        Ok(self.collapse(Symbol::Term, &children))
    }

    /// `factor: ('+'|'-'|'~') factor | power`
    fn parse_factor(&mut self) -> Result<NodeId, ParseError> {
        if !matches!(
            self.cursor.current_kind(),
            TokenKind::Plus | TokenKind::Minus | TokenKind::Tilde
        ) {
            return self.parse_power();
        }
        let op = self.bump();
        let operand = ensure_sufficient_stack(|| self.parse_factor())?;
        Ok(self.materialize(Symbol::Factor, &[op, operand]))
    }

    /// `power: atom trailer* ['**' factor]`
    fn parse_power(&mut self) -> Result<NodeId, ParseError> {
        let mut children = vec![self.parse_atom()?];
        while matches!(
            self.cursor.current_kind(),
            TokenKind::LParen | TokenKind::Dot | TokenKind::LBracket
        ) {
            children.push(self.parse_trailer()?);
        }
        if self.check(&TokenKind::DoubleStar) {
            children.push(self.bump());
            children.push(self.parse_factor()?);
        }
        Ok(self.collapse(Symbol::Power, &children))
    }

    /// `atom: '(' [testlist_comp] ')' | '[' [testlist_comp] ']' | NAME | NUMBER | STRING+`
    fn parse_atom(&mut self) -> Result<NodeId, ParseError> {
        let kind = self.cursor.current_kind();
        match kind {
            TokenKind::Name(_) | TokenKind::Number(_) => Ok(self.bump()),
            TokenKind::String(_) => {
                let mut strings = vec![self.bump()];
                while matches!(self.cursor.current_kind(), TokenKind::String(_)) {
                    strings.push(self.bump());
                }
                Ok(self.collapse(Symbol::Atom, &strings))
            }
            TokenKind::LParen | TokenKind::LBracket => {
                let open = self.bump();
                let mut children = vec![open];
                if starts_test(self.cursor.current_kind()) {
                    children.push(self.parse_testlist_comp()?);
                }
                children.push(self.expect_close(&kind, open)?);
                Ok(self.materialize(Symbol::Atom, &children))
            }
            _ => Err(ParseError::expected_expression(self.current())),
        }
    }

    /// `testlist_comp: test (comp_for | (',' test)* [','])`
    fn parse_testlist_comp(&mut self) -> Result<NodeId, ParseError> {
        let first = self.parse_test()?;
        if self.check(&TokenKind::For) {
            let comp_for = self.parse_comp_for()?;
            return Ok(self.materialize(Symbol::TestlistComp, &[first, comp_for]));
        }
        let mut children = vec![first];
        while self.check(&TokenKind::Comma) {
            children.push(self.bump());
            if !starts_test(self.cursor.current_kind()) {
                break;
            }
            children.push(self.parse_test()?);
        }
        Ok(self.collapse(Symbol::TestlistComp, &children))
    }
}
