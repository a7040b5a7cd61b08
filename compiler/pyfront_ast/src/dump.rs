//! S-expression rendering of lowered expressions.
//!
//! ```text
//! f(a, *b, c=1)       =>  (call f a (* b) (c= 1))
//! [x for x in y if x] =>  (listcomp x (for x y (if x)))
//! ```

use std::fmt::Write;

use pyfront_ir::{AstArena, ComprehensionRange, ExprId, ExprKind, ExprRange, StringInterner};
use pyfront_stack::ensure_sufficient_stack;

/// Render one expression tree.
pub fn dump_expr(arena: &AstArena, interner: &StringInterner, id: ExprId) -> String {
    let mut printer = Printer {
        arena,
        interner,
        out: String::new(),
    };
    printer.expr(id);
    printer.out
}

struct Printer<'a> {
    arena: &'a AstArena,
    interner: &'a StringInterner,
    out: String,
}

impl Printer<'_> {
    fn expr(&mut self, id: ExprId) {
        ensure_sufficient_stack(|| self.expr_inner(id));
    }

    fn expr_inner(&mut self, id: ExprId) {
        let arena = self.arena;
        match arena.get_expr(id).kind {
            ExprKind::Name(text) | ExprKind::Num(text) | ExprKind::Str(text) => {
                self.out.push_str(self.interner.lookup(text));
            }
            ExprKind::Attribute { value, attr } => {
                self.out.push_str("(. ");
                self.expr(value);
                let _ = write!(self.out, " {})", self.interner.lookup(attr));
            }
            ExprKind::Subscript { value, index } => {
                self.out.push_str("(subscript ");
                self.expr(value);
                self.out.push(' ');
                self.expr(index);
                self.out.push(')');
            }
            ExprKind::BinOp { left, op, right } => {
                let _ = write!(self.out, "({} ", op.as_symbol());
                self.expr(left);
                self.out.push(' ');
                self.expr(right);
                self.out.push(')');
            }
            ExprKind::UnaryOp { op, operand } => {
                let _ = write!(self.out, "({} ", op.as_symbol());
                self.expr(operand);
                self.out.push(')');
            }
            ExprKind::BoolOp { op, values } => self.list(op.as_symbol(), values),
            ExprKind::Compare { left, comparators } => {
                self.out.push_str("(compare ");
                self.expr(left);
                for comparator in arena.get_comparators(comparators) {
                    let _ = write!(self.out, " {} ", comparator.op.as_symbol());
                    self.expr(comparator.right);
                }
                self.out.push(')');
            }
            ExprKind::IfExp { test, body, orelse } => {
                self.out.push_str("(if ");
                self.expr(test);
                self.out.push(' ');
                self.expr(body);
                self.out.push(' ');
                self.expr(orelse);
                self.out.push(')');
            }
            ExprKind::Lambda { params, body } => {
                let names: Vec<&str> = arena
                    .get_params(params)
                    .iter()
                    .map(|param| self.interner.lookup(param.name))
                    .collect();
                let _ = write!(self.out, "(lambda ({}) ", names.join(" "));
                self.expr(body);
                self.out.push(')');
            }
            ExprKind::GeneratorExp { elt, generators } => {
                self.comprehension("genexp", elt, generators);
            }
            ExprKind::ListComp { elt, generators } => {
                self.comprehension("listcomp", elt, generators);
            }
            ExprKind::List(elements) => self.list("list", elements),
            ExprKind::Tuple(elements) => self.list("tuple", elements),
            ExprKind::Call { func, args } => {
                self.out.push_str("(call ");
                self.expr(func);
                for &arg in arena.get_expr_list(args.positional) {
                    self.out.push(' ');
                    self.expr(arg);
                }
                if let Some(splat) = args.splat_positional {
                    self.out.push_str(" (* ");
                    self.expr(splat);
                    self.out.push(')');
                }
                for keyword in arena.get_keywords(args.keywords) {
                    let _ = write!(self.out, " ({}= ", self.interner.lookup(keyword.arg));
                    self.expr(keyword.value);
                    self.out.push(')');
                }
                if let Some(splat) = args.splat_keyword {
                    self.out.push_str(" (** ");
                    self.expr(splat);
                    self.out.push(')');
                }
                self.out.push(')');
            }
        }
    }

    fn list(&mut self, head: &str, elements: ExprRange) {
        let arena = self.arena;
        let _ = write!(self.out, "({head}");
        for &element in arena.get_expr_list(elements) {
            self.out.push(' ');
            self.expr(element);
        }
        self.out.push(')');
    }

    fn comprehension(&mut self, head: &str, elt: ExprId, generators: ComprehensionRange) {
        let arena = self.arena;
        let _ = write!(self.out, "({head} ");
        self.expr(elt);
        for clause in arena.get_comprehensions(generators) {
            self.out.push_str(" (for ");
            self.expr(clause.target);
            self.out.push(' ');
            self.expr(clause.iter);
            for &condition in arena.get_expr_list(clause.ifs) {
                self.out.push_str(" (if ");
                self.expr(condition);
                self.out.push(')');
            }
            self.out.push(')');
        }
        self.out.push(')');
    }
}
