//! pyfront command line driver.
//!
//! Runs source text through the whole front end (lex, parse, AST build) and
//! reports diagnostics with the terminal emitter.
//!
//! # Debugging
//!
//! - `PYFRONT_LOG=debug pyfront check file.py` - phase summaries
//! - `PYFRONT_LOG=pyfront_ast=trace` - every call argument list
//!
//! `RUST_LOG` is read when `PYFRONT_LOG` is unset.

pub mod commands;
pub mod pipeline;
mod tracing_setup;

pub use pipeline::{compile, Compilation};
pub use tracing_setup::init_tracing;
