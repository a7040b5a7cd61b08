//! Argument shapes.

use pyfront_ir::NodeId;

/// How one argument of an `arglist` is written.
///
/// Derived from the CST during classification and dropped once the call is
/// built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArgumentShape {
    /// `value`
    Positional { value: NodeId },
    /// `name=value`; `name` is any `test` until the builder checks it.
    Keyword {
        argument: NodeId,
        name: NodeId,
        value: NodeId,
    },
    /// `elt for ...` written without its own parentheses.
    GeneratorArgument { argument: NodeId },
    /// `*value`
    SplatPositional { value: NodeId },
    /// `**value`
    SplatKeyword { value: NodeId },
}

/// Per-shape argument counts from one classification pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShapeCounts {
    pub positional: usize,
    pub keyword: usize,
    pub generator: usize,
    pub splat_positional: usize,
    pub splat_keyword: usize,
}

impl ShapeCounts {
    /// Arguments that count toward the 255 limit. Splats do not.
    #[inline]
    pub fn counted(&self) -> usize {
        self.positional + self.keyword + self.generator
    }

    pub(crate) fn record(&mut self, shape: &ArgumentShape) {
        match shape {
            ArgumentShape::Positional { .. } => self.positional += 1,
            ArgumentShape::Keyword { .. } => self.keyword += 1,
            ArgumentShape::GeneratorArgument { .. } => self.generator += 1,
            ArgumentShape::SplatPositional { .. } => self.splat_positional += 1,
            ArgumentShape::SplatKeyword { .. } => self.splat_keyword += 1,
        }
    }
}
