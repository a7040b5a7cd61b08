//! Diagnostic system for rich error reporting.
//!
//! - Error codes for searchability (`pyfront explain E2003`)
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes and suggestions (how to fix)
//!
//! # Error Guarantees
//!
//! `ErrorGuaranteed` is type-level proof that at least one error was
//! emitted. It can only be obtained from `DiagnosticQueue::emit_error`, so a
//! phase that returns `Err(ErrorGuaranteed)` cannot fail silently.

mod diagnostic;
pub mod emitter;
mod error_code;
mod guarantee;
pub mod queue;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Footer, Label, LabelStyle, Severity};
pub use error_code::{ErrorCode, ParseErrorCodeError, Phase};
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
