//! Second pass: lower classified arguments into `CallArguments`.

use pyfront_ir::{
    AstArena, CallArguments, ConcreteTree, Expr, ExprId, ExprKind, Keyword, Name, NodeId, Symbol,
};
use smallvec::SmallVec;
use tracing::trace;

use super::classify::{ArgumentClassifier, Classified};
use super::shape::ArgumentShape;
use crate::error::{BuildError, StructuralError};
use crate::forbidden::NameValidator;

/// Lowers argument sub-trees. Implemented by the AST builder, which
/// re-enters the call builder for nested calls.
pub trait ExpressionEvaluator {
    /// Lower any expression node.
    fn evaluate(&mut self, node: NodeId) -> Result<ExprId, BuildError>;

    /// Lower an `argument` node of the form `elt comp_for` as a generator
    /// expression.
    fn evaluate_generator(&mut self, argument: NodeId) -> Result<ExprId, BuildError>;

    fn arena(&self) -> &AstArena;

    fn arena_mut(&mut self) -> &mut AstArena;

    /// Source text of an interned identifier, for diagnostics.
    fn name_text(&self, name: Name) -> &'static str;
}

/// Where the walk over the shapes stands with respect to ordering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ArgState {
    AcceptingPositional,
    SeenKeyword,
    /// `after_keyword` keeps positional-after-keyword reported first when
    /// both rules are broken.
    SeenSplatPositional { after_keyword: bool },
}

impl ArgState {
    fn on_keyword(self) -> Self {
        match self {
            ArgState::AcceptingPositional | ArgState::SeenKeyword => ArgState::SeenKeyword,
            ArgState::SeenSplatPositional { .. } => ArgState::SeenSplatPositional {
                after_keyword: true,
            },
        }
    }

    fn on_splat_positional(self) -> Self {
        ArgState::SeenSplatPositional {
            after_keyword: !matches!(self, ArgState::AcceptingPositional),
        }
    }

    /// The ordering rule a plain positional would break here, if any.
    fn positional_error(self) -> Option<StructuralError> {
        match self {
            ArgState::AcceptingPositional => None,
            ArgState::SeenKeyword
            | ArgState::SeenSplatPositional {
                after_keyword: true,
            } => Some(StructuralError::PositionalAfterKeyword),
            ArgState::SeenSplatPositional {
                after_keyword: false,
            } => Some(StructuralError::PositionalAfterSplat),
        }
    }
}

/// Builds validated `CallArguments` and the enclosing `Call` node.
pub struct CallArgumentBuilder<'t, V> {
    tree: &'t ConcreteTree,
    validator: V,
}

impl<'t, V: NameValidator> CallArgumentBuilder<'t, V> {
    pub fn new(tree: &'t ConcreteTree, validator: V) -> Self {
        CallArgumentBuilder { tree, validator }
    }

    /// Lower a call trailer `'(' [arglist] ')'` applied to `callee`.
    ///
    /// The `Call` node starts where the callee starts and ends at `)`.
    pub fn build_call<E: ExpressionEvaluator>(
        &self,
        eval: &mut E,
        callee: ExprId,
        trailer: NodeId,
    ) -> Result<ExprId, BuildError> {
        let args = match self
            .tree
            .children(trailer)
            .iter()
            .copied()
            .find(|&child| self.tree.is_symbol(child, Symbol::Arglist))
        {
            Some(arglist) => self.build_arguments(eval, arglist)?,
            None => CallArguments::default(),
        };
        let span = eval
            .arena()
            .get_expr(callee)
            .span
            .merge(self.tree.span(trailer));
        let call = Expr::new(ExprKind::Call { func: callee, args }, span);
        Ok(eval.arena_mut().alloc_expr(call))
    }

    /// Classify and lower one `arglist`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn build_arguments<E: ExpressionEvaluator>(
        &self,
        eval: &mut E,
        arglist: NodeId,
    ) -> Result<CallArguments, BuildError> {
        let Classified { shapes, counts } = ArgumentClassifier::new(self.tree).classify(arglist)?;

        let mut positional: SmallVec<[ExprId; 8]> =
            SmallVec::with_capacity(counts.positional + counts.generator);
        let mut keywords: SmallVec<[Keyword; 4]> = SmallVec::with_capacity(counts.keyword);
        let mut splat_positional = None;
        let mut splat_keyword = None;
        let mut state = ArgState::AcceptingPositional;

        for shape in shapes {
            match shape {
                ArgumentShape::Positional { value } => {
                    if let Some(reason) = state.positional_error() {
                        return Err(BuildError::new(reason, self.tree.span(value)));
                    }
                    positional.push(eval.evaluate(value)?);
                }
                ArgumentShape::GeneratorArgument { argument } => {
                    positional.push(eval.evaluate_generator(argument)?);
                }
                ArgumentShape::Keyword {
                    argument,
                    name,
                    value,
                } => {
                    let keyword = self.build_keyword(eval, &keywords, argument, name, value)?;
                    keywords.push(keyword);
                    state = state.on_keyword();
                }
                ArgumentShape::SplatPositional { value } => {
                    splat_positional = Some(eval.evaluate(value)?);
                    state = state.on_splat_positional();
                }
                ArgumentShape::SplatKeyword { value } => {
                    splat_keyword = Some(eval.evaluate(value)?);
                }
            }
        }

        trace!(
            positional = positional.len(),
            keywords = keywords.len(),
            "built call arguments"
        );
        let overflow = |err| BuildError::arena_overflow(err, self.tree.span(arglist));
        let arena = eval.arena_mut();
        Ok(CallArguments {
            positional: arena.alloc_expr_list(positional).map_err(overflow)?,
            keywords: arena.alloc_keywords(keywords).map_err(overflow)?,
            splat_positional,
            splat_keyword,
        })
    }

    /// Lower `name=value`. The name must lower to a bare identifier that
    /// is neither forbidden nor already used in this call.
    fn build_keyword<E: ExpressionEvaluator>(
        &self,
        eval: &mut E,
        seen: &[Keyword],
        argument: NodeId,
        name: NodeId,
        value: NodeId,
    ) -> Result<Keyword, BuildError> {
        let name_span = self.tree.span(name);
        let name_expr = eval.evaluate(name)?;
        let arg = match eval.arena().get_expr(name_expr).kind {
            ExprKind::Name(arg) => arg,
            ExprKind::Lambda { .. } => {
                return Err(BuildError::new(StructuralError::KeywordIsLambda, name_span));
            }
            _ => {
                return Err(BuildError::new(
                    StructuralError::KeywordIsComplexExpression,
                    name_span,
                ));
            }
        };

        if let Some(text) = self.validator.forbidden(arg) {
            return Err(BuildError::new(
                StructuralError::ForbiddenKeywordName { name: text },
                name_span,
            ));
        }
        if seen.iter().any(|keyword| keyword.arg == arg) {
            return Err(BuildError::new(
                StructuralError::DuplicateKeywordName {
                    name: eval.name_text(arg),
                },
                name_span,
            ));
        }

        let value = eval.evaluate(value)?;
        Ok(Keyword {
            arg,
            value,
            span: self.tree.span(argument),
        })
    }
}
