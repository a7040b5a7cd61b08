//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! interning and bracket-aware newline handling.

use logos::Logos;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\f]+")]
pub(crate) enum RawToken {
    #[regex(r"#[^\n]*")]
    Comment,

    #[token("\n")]
    Newline,

    #[regex(r"\\[ \t\r]*\n")]
    LineContinuation,

    // Keywords. `None`, `True`, `False` stay identifiers.
    #[token("lambda")]
    Lambda,
    #[token("for")]
    For,
    #[token("in")]
    In,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("not")]
    Not,
    #[token("and")]
    And,
    #[token("or")]
    Or,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("=")]
    Equal,

    #[token("**")]
    DoubleStar,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("//")]
    DoubleSlash,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("~")]
    Tilde,
    #[token("==")]
    EqEqual,
    #[token("!=")]
    NotEqual,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,

    // Numbers keep their source text; a trailing `j` marks an imaginary.
    #[regex(r"0[xX][0-9a-fA-F_]+")]
    #[regex(r"[0-9][0-9_]*[jJ]?")]
    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?[jJ]?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[jJ]?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+[jJ]?")]
    Number,

    #[regex(r#"([rRbBuU]|[bB][rR]|[rR][bB])?"([^"\\\n]|\\.)*""#)]
    #[regex(r"([rRbBuU]|[bB][rR]|[rR][bB])?'([^'\\\n]|\\.)*'")]
    String,

    /// An opening quote with no closing quote before the end of the line.
    #[regex(r#"([rRbBuU]|[bB][rR]|[rR][bB])?"([^"\\\n]|\\.)*"#)]
    #[regex(r"([rRbBuU]|[bB][rR]|[rR][bB])?'([^'\\\n]|\\.)*")]
    UnterminatedString,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
