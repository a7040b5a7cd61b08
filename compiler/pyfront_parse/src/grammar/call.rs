//! Trailers and call argument lists.
//!
//! `arglist` accepts any `test` before `=` and generator arguments in any
//! position; those rules belong to the AST builder. What the parser does
//! enforce is the splat layout: one `*test`, then only arguments or a final
//! `**test`.

use pyfront_ir::{NodeId, Symbol, TokenKind};
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `trailer: '(' [arglist] ')' | '.' NAME | '[' test ']'`
    pub(crate) fn parse_trailer(&mut self) -> Result<NodeId, ParseError> {
        let kind = self.cursor.current_kind();
        let open = self.bump();
        let children = match kind {
            TokenKind::LParen => {
                if self.check(&TokenKind::RParen) {
                    vec![open, self.bump()]
                } else {
                    let arglist = self.parse_arglist()?;
                    vec![open, arglist, self.expect_close(&kind, open)?]
                }
            }
            TokenKind::LBracket => {
                let index = self.parse_test()?;
                vec![open, index, self.expect_close(&kind, open)?]
            }
            _ => vec![open, self.expect_name()?],
        };
        Ok(self.materialize(Symbol::Trailer, &children))
    }

    /// `arglist: (argument ',')* (argument [','] | '*' test (',' argument)* [',' '**' test] | '**' test)`
    fn parse_arglist(&mut self) -> Result<NodeId, ParseError> {
        let mut children = Vec::new();
        let mut seen_star = false;
        loop {
            match self.cursor.current_kind() {
                TokenKind::Star => {
                    if seen_star {
                        return Err(ParseError::unexpected(self.current(), "an argument")
                            .with_context("second `*` argument")
                            .with_help("a call takes at most one `*expression`"));
                    }
                    seen_star = true;
                    children.push(self.bump());
                    children.push(self.parse_test()?);
                }
                TokenKind::DoubleStar => {
                    children.push(self.bump());
                    children.push(self.parse_test()?);
                    // `**test` ends the list.
                    break;
                }
                _ => children.push(self.parse_argument()?),
            }
            if !self.check(&TokenKind::Comma) {
                break;
            }
            let comma = self.bump();
            if self.check(&TokenKind::RParen) {
                if seen_star {
                    return Err(ParseError::unexpected(self.current(), "an argument")
                        .with_context("trailing comma after `*expression`"));
                }
                children.push(comma);
                break;
            }
            children.push(comma);
        }
        trace!(children = children.len(), "arglist");
        Ok(self.materialize(Symbol::Arglist, &children))
    }

    /// `argument: test [comp_for] | test '=' test`
    fn parse_argument(&mut self) -> Result<NodeId, ParseError> {
        let first = self.parse_test()?;
        let children = if self.check(&TokenKind::For) {
            vec![first, self.parse_comp_for()?]
        } else if self.check(&TokenKind::Equal) {
            let eq = self.bump();
            vec![first, eq, self.parse_test()?]
        } else {
            vec![first]
        };
        Ok(self.materialize(Symbol::Argument, &children))
    }
}
