//! Grammar productions.
//!
//! Each submodule adds `impl Parser` methods for one family of productions.

mod call;
mod comprehension;
mod expr;
mod stmt;

use pyfront_ir::TokenKind;

/// Tokens that can begin a `test`.
fn starts_test(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Lambda | TokenKind::Not) || starts_arith(kind)
}

/// Tokens that can begin an `arith_expr`.
fn starts_arith(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Name(_)
            | TokenKind::Number(_)
            | TokenKind::String(_)
            | TokenKind::LParen
            | TokenKind::LBracket
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Tilde
    )
}
