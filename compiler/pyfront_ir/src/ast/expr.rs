//! Expression nodes.

use std::fmt;

use super::call::CallArguments;
use super::operators::{BinaryOp, BoolOp, CmpOp, UnaryOp};
use super::ranges::{ComparatorRange, ComprehensionRange, ParamRange};
use crate::{ExprId, ExprRange, Name, Span};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Identifier reference: `x`
    Name(Name),

    /// Numeric literal, raw source text: `42`, `0x1f`, `1.5j`
    Num(Name),

    /// String literal, raw source text; adjacent pieces are joined with a
    /// single space
    Str(Name),

    /// `value.attr`
    Attribute { value: ExprId, attr: Name },

    /// `value[index]`
    Subscript { value: ExprId, index: ExprId },

    /// `left op right`
    BinOp {
        left: ExprId,
        op: BinaryOp,
        right: ExprId,
    },

    /// `op operand`
    UnaryOp { op: UnaryOp, operand: ExprId },

    /// `a and b and c`
    BoolOp { op: BoolOp, values: ExprRange },

    /// `a < b <= c`
    Compare {
        left: ExprId,
        comparators: ComparatorRange,
    },

    /// `body if test else orelse`
    IfExp {
        test: ExprId,
        body: ExprId,
        orelse: ExprId,
    },

    /// `lambda params: body`
    Lambda { params: ParamRange, body: ExprId },

    /// `(elt for ... in ...)`, also the bare form passed as a sole argument
    GeneratorExp {
        elt: ExprId,
        generators: ComprehensionRange,
    },

    /// `[elt for ... in ...]`
    ListComp {
        elt: ExprId,
        generators: ComprehensionRange,
    },

    /// `[a, b]`
    List(ExprRange),

    /// `(a, b)` or bare `a, b`
    Tuple(ExprRange),

    /// `func(args)`
    Call { func: ExprId, args: CallArguments },
}

impl ExprKind {
    /// The identifier if this is a bare name.
    #[inline]
    pub fn as_name(&self) -> Option<Name> {
        match self {
            ExprKind::Name(name) => Some(*name),
            _ => None,
        }
    }

    /// Short description for "cannot assign to ..." style messages.
    pub const fn describe(&self) -> &'static str {
        match self {
            ExprKind::Name(_) => "name",
            ExprKind::Num(_) | ExprKind::Str(_) => "literal",
            ExprKind::Attribute { .. } => "attribute",
            ExprKind::Subscript { .. } => "subscript",
            ExprKind::BinOp { .. } | ExprKind::UnaryOp { .. } => "operator",
            ExprKind::BoolOp { .. } => "boolean operator",
            ExprKind::Compare { .. } => "comparison",
            ExprKind::IfExp { .. } => "conditional expression",
            ExprKind::Lambda { .. } => "lambda",
            ExprKind::GeneratorExp { .. } => "generator expression",
            ExprKind::ListComp { .. } => "list comprehension",
            ExprKind::List(_) => "list",
            ExprKind::Tuple(_) => "tuple",
            ExprKind::Call { .. } => "function call",
        }
    }
}

/// One `for target in iter if ...` clause.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Comprehension {
    pub target: ExprId,
    pub iter: ExprId,
    pub ifs: ExprRange,
}

/// One `op right` step of a chained comparison.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Comparator {
    pub op: CmpOp,
    pub right: ExprId,
}

/// A lambda parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: Name,
    pub span: Span,
}
