//! Lexer for the pyfront expression subset, built on logos.
//!
//! Produces a `TokenList` with interned identifier and literal text. Newlines
//! are significant only outside brackets, mirroring Python's implicit line
//! joining; a `NEWLINE` is always emitted before `Eof` so the last statement
//! is terminated.

mod convert;
mod lex_error;
mod raw_token;

use logos::Logos;
use pyfront_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use tracing::{debug, trace};

pub use lex_error::{LexError, LexErrorKind};

use crate::convert::convert_token;
use crate::raw_token::RawToken;

/// Tokens plus any lexer errors, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex source code into a `TokenList`, collecting errors on the side.
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let mut output = LexOutput::default();
    let mut logos = RawToken::lexer(source);
    let mut depth: u32 = 0;
    let mut line_open = false;

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        let raw = match token_result {
            Ok(raw) => raw,
            Err(()) => {
                let found = slice.chars().next().unwrap_or('\u{fffd}');
                trace!(?span, ?found, "invalid character");
                output.errors.push(LexError::invalid_character(span, found));
                output.tokens.push(Token::new(TokenKind::Error, span));
                line_open = true;
                continue;
            }
        };

        match raw {
            RawToken::Newline => {
                // Blank lines and newlines inside brackets are not significant.
                if depth == 0 && line_open {
                    output.tokens.push(Token::new(TokenKind::Newline, span));
                    line_open = false;
                }
                continue;
            }
            RawToken::LParen | RawToken::LBracket => depth += 1,
            RawToken::RParen | RawToken::RBracket => depth = depth.saturating_sub(1),
            RawToken::UnterminatedString => {
                output.errors.push(LexError::unterminated_string(span));
            }
            _ => {}
        }

        if let Some(kind) = convert_token(raw, slice, interner) {
            output.tokens.push(Token::new(kind, span));
            line_open = true;
        }
    }

    let eof_pos = u32::try_from(source.len())
        .unwrap_or_else(|_| panic!("source file exceeds {} bytes", u32::MAX));
    let eof_span = Span::point(eof_pos);
    if line_open {
        output.tokens.push(Token::new(TokenKind::Newline, eof_span));
    }
    output.tokens.push(Token::new(TokenKind::Eof, eof_span));

    debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexed source"
    );
    output
}

#[cfg(test)]
mod tests;
