//! Token Conversion
//!
//! Converts raw logos tokens to `TokenKind`, interning source text.

use pyfront_ir::{StringInterner, TokenKind};

use crate::raw_token::RawToken;

/// Convert a significant raw token to a `TokenKind`.
///
/// Trivia (comments, continuations) and newlines are handled by the caller;
/// they map to `None` here.
pub(crate) fn convert_token(
    raw: RawToken,
    slice: &str,
    interner: &StringInterner,
) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::Comment | RawToken::LineContinuation | RawToken::Newline => return None,

        RawToken::Ident => TokenKind::Name(interner.intern(slice)),
        RawToken::Number => TokenKind::Number(interner.intern(slice)),
        RawToken::String => TokenKind::String(interner.intern(slice)),
        RawToken::UnterminatedString => TokenKind::Error,

        RawToken::Lambda => TokenKind::Lambda,
        RawToken::For => TokenKind::For,
        RawToken::In => TokenKind::In,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::Not => TokenKind::Not,
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Equal => TokenKind::Equal,

        RawToken::DoubleStar => TokenKind::DoubleStar,
        RawToken::Star => TokenKind::Star,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::DoubleSlash => TokenKind::DoubleSlash,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::EqEqual => TokenKind::EqEqual,
        RawToken::NotEqual => TokenKind::NotEqual,
        RawToken::LessEqual => TokenKind::LessEqual,
        RawToken::GreaterEqual => TokenKind::GreaterEqual,
        RawToken::Less => TokenKind::Less,
        RawToken::Greater => TokenKind::Greater,
    };
    Some(kind)
}
