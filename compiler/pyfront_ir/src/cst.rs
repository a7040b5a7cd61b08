//! Concrete syntax tree.
//!
//! The parser emits a `ConcreteTree`: a flat table of `ParseNode`s, each
//! tagged with either a grammar symbol or a token kind, with children stored
//! contiguously in a shared list. Nodes are immutable once allocated and the
//! AST builder only ever reads them.
//!
//! Expression-precedence productions with a single child are collapsed by the
//! parser, so `f(a)` yields `power -> [atom(f), trailer]` rather than a chain
//! of `test -> or_test -> ... -> atom` wrappers. Productions that carry shape
//! information (`arglist`, `argument`, `comp_for`, `lambdef`, `trailer`, ...)
//! are always materialized.

use std::fmt;

use crate::{Span, TokenKind};

/// Grammar symbols.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Symbol {
    FileInput,
    EvalInput,
    ExprStmt,
    Testlist,
    Test,
    Lambdef,
    Varargslist,
    OrTest,
    AndTest,
    NotTest,
    Comparison,
    ArithExpr,
    Term,
    Factor,
    Power,
    Atom,
    TestlistComp,
    Trailer,
    Arglist,
    Argument,
    CompFor,
    CompIf,
    Exprlist,
}

impl Symbol {
    /// Grammar spelling of the production.
    pub const fn as_str(self) -> &'static str {
        match self {
            Symbol::FileInput => "file_input",
            Symbol::EvalInput => "eval_input",
            Symbol::ExprStmt => "expr_stmt",
            Symbol::Testlist => "testlist",
            Symbol::Test => "test",
            Symbol::Lambdef => "lambdef",
            Symbol::Varargslist => "varargslist",
            Symbol::OrTest => "or_test",
            Symbol::AndTest => "and_test",
            Symbol::NotTest => "not_test",
            Symbol::Comparison => "comparison",
            Symbol::ArithExpr => "arith_expr",
            Symbol::Term => "term",
            Symbol::Factor => "factor",
            Symbol::Power => "power",
            Symbol::Atom => "atom",
            Symbol::TestlistComp => "testlist_comp",
            Symbol::Trailer => "trailer",
            Symbol::Arglist => "arglist",
            Symbol::Argument => "argument",
            Symbol::CompFor => "comp_for",
            Symbol::CompIf => "comp_if",
            Symbol::Exprlist => "exprlist",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag of a CST node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    Symbol(Symbol),
    Token(TokenKind),
}

/// Index into a `ConcreteTree`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One CST node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseNode {
    pub kind: NodeKind,
    pub span: Span,
    children_start: u32,
    children_len: u32,
}

impl ParseNode {
    /// Number of children (always zero for tokens).
    #[inline]
    pub const fn child_count(&self) -> usize {
        self.children_len as usize
    }
}

/// Arena of CST nodes for one compilation unit.
#[derive(Clone, Default, Debug)]
pub struct ConcreteTree {
    nodes: Vec<ParseNode>,
    children: Vec<NodeId>,
}

impl ConcreteTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a leaf node for a token.
    pub fn alloc_token(&mut self, kind: TokenKind, span: Span) -> NodeId {
        self.push(ParseNode {
            kind: NodeKind::Token(kind),
            span,
            children_start: 0,
            children_len: 0,
        })
    }

    /// Allocate an interior node.
    ///
    /// The span covers the first through last child; a production with no
    /// children gets `fallback_span`.
    pub fn alloc_symbol(
        &mut self,
        symbol: Symbol,
        children: &[NodeId],
        fallback_span: Span,
    ) -> NodeId {
        let span = match (children.first(), children.last()) {
            (Some(&first), Some(&last)) => self.span(first).merge(self.span(last)),
            _ => fallback_span,
        };
        let children_start = to_u32(self.children.len());
        let children_len = to_u32(children.len());
        self.children.extend_from_slice(children);
        self.push(ParseNode {
            kind: NodeKind::Symbol(symbol),
            span,
            children_start,
            children_len,
        })
    }

    fn push(&mut self, node: ParseNode) -> NodeId {
        let id = NodeId::new(to_u32(self.nodes.len()));
        self.nodes.push(node);
        id
    }

    /// # Panics
    /// Panics if `id` belongs to another tree.
    #[inline]
    #[track_caller]
    pub fn node(&self, id: NodeId) -> &ParseNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.node(id).span
    }

    /// Ordered children of a node.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        let node = self.node(id);
        let start = node.children_start as usize;
        &self.children[start..start + node.children_len as usize]
    }

    /// The `index`-th child, if present.
    #[inline]
    pub fn child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.children(id).get(index).copied()
    }

    /// Grammar symbol of an interior node.
    #[inline]
    pub fn symbol(&self, id: NodeId) -> Option<Symbol> {
        match self.kind(id) {
            NodeKind::Symbol(symbol) => Some(symbol),
            NodeKind::Token(_) => None,
        }
    }

    /// Token kind of a leaf node.
    #[inline]
    pub fn token(&self, id: NodeId) -> Option<TokenKind> {
        match self.kind(id) {
            NodeKind::Token(token) => Some(token),
            NodeKind::Symbol(_) => None,
        }
    }

    #[inline]
    pub fn is_symbol(&self, id: NodeId, symbol: Symbol) -> bool {
        self.symbol(id) == Some(symbol)
    }

    /// Check the token variant of a leaf, ignoring payload.
    #[inline]
    pub fn is_token(&self, id: NodeId, kind: &TokenKind) -> bool {
        self.token(id).is_some_and(|t| t.same_kind(kind))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn to_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("concrete tree exceeds {} entries", u32::MAX))
}

#[cfg(test)]
mod tests;
