//! First pass: tag and count the arguments of one `arglist`.

use pyfront_ir::{CallArguments, ConcreteTree, NodeId, Symbol, TokenKind};
use smallvec::SmallVec;
use tracing::trace;

use super::shape::{ArgumentShape, ShapeCounts};
use crate::error::{BuildError, BuildErrorKind, StructuralError};

/// Shapes in source order plus their counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classified {
    pub shapes: SmallVec<[ArgumentShape; 8]>,
    pub counts: ShapeCounts,
}

/// Reads an `arglist` node without lowering anything.
#[derive(Copy, Clone)]
pub struct ArgumentClassifier<'t> {
    tree: &'t ConcreteTree,
}

impl<'t> ArgumentClassifier<'t> {
    pub fn new(tree: &'t ConcreteTree) -> Self {
        ArgumentClassifier { tree }
    }

    /// Classify every child of `arglist`, then check the generator and arity
    /// rules. Both errors are located at the `arglist` node.
    pub fn classify(&self, arglist: NodeId) -> Result<Classified, BuildError> {
        let mut shapes = SmallVec::new();
        let mut counts = ShapeCounts::default();
        let mut children = self.tree.children(arglist).iter().copied();

        while let Some(child) = children.next() {
            let shape = if self.tree.is_token(child, &TokenKind::Comma) {
                continue;
            } else if self.tree.is_token(child, &TokenKind::Star) {
                let value = children.next().ok_or_else(|| self.malformed(child))?;
                ArgumentShape::SplatPositional { value }
            } else if self.tree.is_token(child, &TokenKind::DoubleStar) {
                let value = children.next().ok_or_else(|| self.malformed(child))?;
                ArgumentShape::SplatKeyword { value }
            } else {
                self.classify_argument(child)?
            };
            counts.record(&shape);
            shapes.push(shape);
        }

        trace!(?counts, "classified arguments");

        let span = self.tree.span(arglist);
        if counts.generator > 1
            || (counts.generator == 1 && counts.positional + counts.keyword > 0)
        {
            return Err(BuildError::new(
                StructuralError::AmbiguousGeneratorArgument,
                span,
            ));
        }
        if counts.counted() > CallArguments::MAX_CALL_ARGUMENTS {
            return Err(BuildError::new(
                StructuralError::TooManyArguments {
                    count: counts.counted(),
                },
                span,
            ));
        }
        Ok(Classified { shapes, counts })
    }

    fn classify_argument(&self, argument: NodeId) -> Result<ArgumentShape, BuildError> {
        if !self.tree.is_symbol(argument, Symbol::Argument) {
            return Err(self.malformed(argument));
        }
        match *self.tree.children(argument) {
            [value] => Ok(ArgumentShape::Positional { value }),
            [_, comp_for] if self.tree.is_symbol(comp_for, Symbol::CompFor) => {
                Ok(ArgumentShape::GeneratorArgument { argument })
            }
            [name, _, value] => Ok(ArgumentShape::Keyword {
                argument,
                name,
                value,
            }),
            _ => Err(self.malformed(argument)),
        }
    }

    #[cold]
    fn malformed(&self, node: NodeId) -> BuildError {
        BuildError::new(
            BuildErrorKind::Unsupported {
                what: "argument list shape",
            },
            self.tree.span(node),
        )
    }
}

#[cfg(test)]
mod tests;
