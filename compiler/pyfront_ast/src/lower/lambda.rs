use pyfront_ir::{ExprId, ExprKind, NodeId, Param, Symbol, TokenKind};

use super::AstBuilder;
use crate::error::{BuildError, BuildErrorKind};
use crate::forbidden::NameValidator;

impl AstBuilder<'_> {
    /// `lambda [params]: body`
    pub(super) fn lower_lambda(&mut self, node: NodeId) -> Result<ExprId, BuildError> {
        let tree = self.tree;
        let children = tree.children(node);
        let Some(&body) = children.last() else {
            return Err(self.unsupported(node, "lambda"));
        };

        let mut params = Vec::new();
        if let Some(&varargs) = children
            .get(1)
            .filter(|&&n| tree.is_symbol(n, Symbol::Varargslist))
        {
            for &param in tree.children(varargs) {
                let span = tree.span(param);
                match tree.token(param) {
                    Some(TokenKind::Comma) => {}
                    Some(TokenKind::Name(name)) => {
                        if let Some(text) = self.forbidden.forbidden(name) {
                            return Err(BuildError::new(
                                BuildErrorKind::ForbiddenName { name: text },
                                span,
                            ));
                        }
                        params.push(Param { name, span });
                    }
                    _ => return Err(self.unsupported(param, "lambda parameter")),
                }
            }
        }

        let body = self.lower(body)?;
        let params = self
            .arena
            .alloc_params(params)
            .map_err(self.overflow_at(node))?;
        Ok(self.alloc(ExprKind::Lambda { params, body }, tree.span(node)))
    }
}
