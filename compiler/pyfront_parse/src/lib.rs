//! Recursive descent parser for the pyfront expression subset.
//!
//! Produces a flat `ConcreteTree`. The tree is deliberately permissive where
//! the AST builder validates: any `test` may appear left of `=` in a call
//! argument, and generator arguments may sit anywhere in an argument list.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::ParseError;
pub use recovery::synchronize;

use pyfront_ir::{ConcreteTree, NodeId, Span, Symbol, Token, TokenKind, TokenList};
use tracing::debug;

/// Parser output: the tree, its root and every error hit along the way.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub tree: ConcreteTree,
    /// `file_input` or `eval_input`; statements that failed to parse are
    /// left out.
    pub root: NodeId,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    tree: ConcreteTree,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            tree: ConcreteTree::new(),
            errors: Vec::new(),
        }
    }

    /// Parse a module: `(NEWLINE | expr_stmt)* ENDMARKER`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_file(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.is_at_end() {
                break;
            }
            match self.parse_expr_stmt() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    debug!(code = %err.code, span = ?err.span, "statement failed to parse");
                    self.errors.push(err);
                    synchronize(&mut self.cursor);
                }
            }
        }
        let root = self
            .tree
            .alloc_symbol(Symbol::FileInput, &statements, Span::point(0));
        self.finish(root)
    }

    /// Parse a single expression: `testlist NEWLINE* ENDMARKER`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_eval(mut self) -> ParseOutput {
        self.cursor.skip_newlines();
        let children = match self.parse_eval_body() {
            Ok(body) => vec![body],
            Err(err) => {
                self.errors.push(err);
                Vec::new()
            }
        };
        let root = self
            .tree
            .alloc_symbol(Symbol::EvalInput, &children, Span::point(0));
        self.finish(root)
    }

    fn parse_eval_body(&mut self) -> Result<NodeId, ParseError> {
        let body = self.parse_testlist()?;
        self.cursor.skip_newlines();
        if !self.cursor.is_at_end() {
            return Err(ParseError::unexpected(self.cursor.current(), "end of input"));
        }
        Ok(body)
    }

    fn finish(self, root: NodeId) -> ParseOutput {
        debug!(
            nodes = self.tree.len(),
            errors = self.errors.len(),
            "parsed concrete tree"
        );
        ParseOutput {
            tree: self.tree,
            root,
            errors: self.errors,
        }
    }

    // Helpers shared by the grammar modules.

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    /// Turn the current token into a leaf node and advance.
    fn bump(&mut self) -> NodeId {
        let token = self.cursor.advance();
        self.tree.alloc_token(token.kind, token.span)
    }

    /// Consume a token of the given kind as a leaf node.
    fn expect(&mut self, kind: &TokenKind) -> Result<NodeId, ParseError> {
        if self.check(kind) {
            Ok(self.bump())
        } else {
            let expected = format!("`{}`", kind.display_name());
            Err(ParseError::unexpected(self.current(), &expected))
        }
    }

    /// Consume the closing bracket matching `open`.
    fn expect_close(
        &mut self,
        open: &TokenKind,
        open_node: NodeId,
    ) -> Result<NodeId, ParseError> {
        let close = match open {
            TokenKind::LBracket => TokenKind::RBracket,
            _ => TokenKind::RParen,
        };
        if self.check(&close) {
            return Ok(self.bump());
        }
        let found = self.current();
        if matches!(found.kind, TokenKind::Newline | TokenKind::Eof) {
            Err(ParseError::unclosed_delimiter(
                open,
                self.tree.span(open_node),
                found,
            ))
        } else {
            let expected = format!("`{}`", close.display_name());
            Err(ParseError::unexpected(found, &expected))
        }
    }

    fn expect_name(&mut self) -> Result<NodeId, ParseError> {
        if self.cursor.check_name() {
            Ok(self.bump())
        } else {
            Err(ParseError::expected_identifier(self.current()))
        }
    }

    /// Allocate an expression production, collapsing it to its only child
    /// when there is just one.
    fn collapse(&mut self, symbol: Symbol, children: &[NodeId]) -> NodeId {
        match children {
            [only] => *only,
            _ => self.materialize(symbol, children),
        }
    }

    /// Allocate a production regardless of arity.
    fn materialize(&mut self, symbol: Symbol, children: &[NodeId]) -> NodeId {
        let fallback = self.cursor.current_span();
        self.tree.alloc_symbol(symbol, children, fallback)
    }
}

/// Parse a module from a token stream.
pub fn parse_file(tokens: &TokenList) -> ParseOutput {
    Parser::new(tokens).parse_file()
}

/// Parse one expression (the `eval` input form) from a token stream.
pub fn parse_eval(tokens: &TokenList) -> ParseOutput {
    Parser::new(tokens).parse_eval()
}
