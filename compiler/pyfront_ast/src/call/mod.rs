//! Call argument construction.
//!
//! Two passes over a call's `arglist`:
//!
//! 1. [`ArgumentClassifier`] reads the children once, tags each argument with
//!    an [`ArgumentShape`] and counts them, rejecting a generator that is not
//!    the sole argument and calls with more than 255 arguments.
//! 2. [`CallArgumentBuilder`] sizes its sequences from the counts, lowers
//!    every argument through the [`ExpressionEvaluator`] and enforces the
//!    ordering and keyword rules as it goes.
//!
//! The first failure aborts the whole call; nothing partial escapes.

mod build;
mod classify;
mod shape;

pub use build::{CallArgumentBuilder, ExpressionEvaluator};
pub use classify::{ArgumentClassifier, Classified};
pub use shape::{ArgumentShape, ShapeCounts};
