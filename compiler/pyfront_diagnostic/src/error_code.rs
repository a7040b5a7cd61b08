//! Error codes for all front-end diagnostics.
//!
//! A code is `E` plus four digits; the first digit names the phase that
//! reports it. Every code has a markdown page under `errors/` that
//! `pyfront explain` prints.

use std::fmt;
use std::str::FromStr;

/// The front-end phase an error code belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    /// `E0xxx`
    Lexer,
    /// `E1xxx`
    Parser,
    /// `E2xxx`, raised while turning the concrete tree into the AST.
    Ast,
    /// `E9xxx`
    Internal,
}

/// Declares the code enum together with its phase and documentation page so
/// the three can never drift apart.
macro_rules! error_codes {
    ($($phase:ident { $($code:ident => $summary:literal,)* })*) => {
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum ErrorCode {
            $($(
                #[doc = $summary]
                $code,
            )*)*
        }

        impl ErrorCode {
            /// Every code, in numeric order.
            pub const ALL: &[ErrorCode] = &[$($(ErrorCode::$code,)*)*];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($(ErrorCode::$code => stringify!($code),)*)*
                }
            }

            pub const fn phase(self) -> Phase {
                match self {
                    $($(ErrorCode::$code => Phase::$phase,)*)*
                }
            }

            /// The long-form explanation shown by `pyfront explain`.
            pub const fn docs(self) -> &'static str {
                match self {
                    $($(
                        ErrorCode::$code => {
                            include_str!(concat!("errors/", stringify!($code), ".md"))
                        }
                    )*)*
                }
            }
        }
    };
}

error_codes! {
    Lexer {
        E0001 => "Invalid character in source",
        E0002 => "Unterminated string literal",
    }
    Parser {
        E1001 => "Unexpected token",
        E1002 => "Expected expression",
        E1003 => "Unclosed delimiter",
        E1004 => "Expected identifier",
    }
    Ast {
        E2001 => "Generator expression must be parenthesized if not sole argument",
        E2002 => "More than 255 arguments",
        E2003 => "Positional argument after keyword argument",
        E2004 => "Positional argument after `*expression`",
        E2005 => "Keyword name is an expression",
        E2006 => "Keyword name is a lambda",
        E2007 => "Assignment to a forbidden name",
        E2008 => "Keyword argument repeated",
        E2009 => "Unsupported construct",
        E2010 => "Invalid assignment target",
    }
    Internal {
        E9001 => "Internal error",
        E9002 => "Too many errors",
    }
}

impl ErrorCode {
    /// Lexer and parser errors. The queue keeps at most one of these per
    /// line, since later ones are usually follow-on noise.
    pub const fn is_syntax_error(self) -> bool {
        matches!(self.phase(), Phase::Lexer | Phase::Parser)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An `explain` argument that names no known code.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseErrorCodeError(pub String);

impl fmt::Display for ParseErrorCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code `{}`", self.0)
    }
}

impl std::error::Error for ParseErrorCodeError {}

impl FromStr for ErrorCode {
    type Err = ParseErrorCodeError;

    /// Accepts `E2003` or `e2003`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseErrorCodeError(s.to_owned()))
    }
}
