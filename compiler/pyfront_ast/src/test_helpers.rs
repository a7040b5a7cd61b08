//! Shared fixtures for unit tests: source text through the real lexer and
//! parser.

use pyfront_ir::{ConcreteTree, NodeId, StringInterner, Symbol};
use pyfront_parse::ParseOutput;

use crate::config::CompileInfo;
use crate::dump::dump_expr;
use crate::error::BuildError;
use crate::lower::AstBuilder;

pub(crate) struct Fixture {
    pub interner: StringInterner,
    pub parsed: ParseOutput,
}

pub(crate) fn parse(source: &str) -> Fixture {
    let interner = StringInterner::new();
    let lexed = pyfront_lexer::lex(source, &interner);
    assert!(lexed.errors.is_empty(), "lex errors: {:?}", lexed.errors);
    let parsed = pyfront_parse::parse_file(&lexed.tokens);
    assert!(parsed.errors.is_empty(), "parse errors: {:?}", parsed.errors);
    Fixture { interner, parsed }
}

/// Lower the first statement of `source` and render it.
pub(crate) fn lower(source: &str) -> Result<String, BuildError> {
    parse(source).dump_first()
}

/// The error lowering the first statement of `source` must produce.
pub(crate) fn lower_err(source: &str) -> BuildError {
    match lower(source) {
        Ok(dump) => panic!("{source}: expected an error, lowered to {dump}"),
        Err(err) => err,
    }
}

impl Fixture {
    pub fn tree(&self) -> &ConcreteTree {
        &self.parsed.tree
    }

    /// The outermost `arglist` in pre-order.
    pub fn first_arglist(&self) -> NodeId {
        find(self.tree(), self.parsed.root, Symbol::Arglist)
            .unwrap_or_else(|| panic!("source has no argument list"))
    }

    /// Expression node of the first statement.
    pub fn first_expr(&self) -> NodeId {
        self.tree()
            .child(self.parsed.root, 0)
            .and_then(|stmt| self.tree().child(stmt, 0))
            .unwrap_or_else(|| panic!("source has no statement"))
    }

    pub fn dump_first(&self) -> Result<String, BuildError> {
        let info = CompileInfo::default();
        let mut builder = AstBuilder::new(self.tree(), &self.interner, &info);
        let expr = builder.build_expression(self.first_expr())?;
        Ok(dump_expr(builder.arena(), &self.interner, expr))
    }
}

fn find(tree: &ConcreteTree, node: NodeId, symbol: Symbol) -> Option<NodeId> {
    if tree.is_symbol(node, symbol) {
        return Some(node);
    }
    tree.children(node)
        .iter()
        .find_map(|&child| find(tree, child, symbol))
}
