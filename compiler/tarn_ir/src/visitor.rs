//! Open-recursion traversal of the surface tree.
//!
//! # Design
//!
//! A [`Visitor`] is a *descriptor*: one handler per syntactic category
//! (program, toplevel statement, expression, pattern, type, attribute).
//! Every handler receives `root`, the outermost descriptor of the
//! traversal, and recurses into children through `root`, never through
//! `self`. That is what lets wrapped descriptors see every node.
//!
//! [`DefaultVisitor`] performs plain structural recursion via the `walk_*`
//! functions and does nothing else.
//!
//! A pass is a [`VisitorLayer`]: each of its handlers gets the wrapped
//! `base` descriptor explicitly and, by default, delegates to it. A layer
//! overrides only the categories it cares about, does its work, and calls
//! `base` to continue the descent. [`Layered`] pairs a layer with its base
//! and is itself a `Visitor`, so layers nest like Russian dolls and one
//! traversal drives all of them.
//!
//! ```text
//! struct CountLambdas;
//!
//! impl VisitorLayer<usize> for CountLambdas {
//!     fn visit_expr(&self, base: &dyn Visitor<usize>, root: &dyn Visitor<usize>,
//!                   count: &mut usize, expr: &Expr) {
//!         if let ExprKind::Lambda { .. } = expr.kind {
//!             *count += 1;
//!         }
//!         base.visit_expr(root, count, expr);
//!     }
//! }
//!
//! let visitor = Layered::boxed(CountLambdas, Box::new(DefaultVisitor));
//! let mut count = 0;
//! visit_program(&*visitor, &mut count, &program);
//! ```
//!
//! The tree is immutable; state lives in the context `Cx` threaded through
//! every handler, or in the layer itself behind a `Cell`.

use crate::ast::{
    Attribute, AttributeTarget, DataDecl, DataKind, Expr, ExprKind, Pattern, PatternKind,
    Program, Toplevel, ToplevelKind, TypeExpr, TypeKind, ValueBinding,
};
use crate::stack::ensure_sufficient_stack;

/// A traversal descriptor over the surface tree.
pub trait Visitor<Cx> {
    fn visit_program(&self, root: &dyn Visitor<Cx>, cx: &mut Cx, program: &Program);

    fn visit_toplevel(&self, root: &dyn Visitor<Cx>, cx: &mut Cx, stmt: &Toplevel);

    fn visit_expr(&self, root: &dyn Visitor<Cx>, cx: &mut Cx, expr: &Expr);

    fn visit_pattern(&self, root: &dyn Visitor<Cx>, cx: &mut Cx, pattern: &Pattern);

    fn visit_type(&self, root: &dyn Visitor<Cx>, cx: &mut Cx, ty: &TypeExpr);

    fn visit_attribute(
        &self,
        root: &dyn Visitor<Cx>,
        cx: &mut Cx,
        attr: &Attribute,
        target: AttributeTarget,
    );
}

/// Run `visitor` over a whole program.
pub fn visit_program<Cx>(visitor: &dyn Visitor<Cx>, cx: &mut Cx, program: &Program) {
    visitor.visit_program(visitor, cx, program);
}

/// Structural recursion with no behaviour of its own.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultVisitor;

impl<Cx> Visitor<Cx> for DefaultVisitor {
    fn visit_program(&self, root: &dyn Visitor<Cx>, cx: &mut Cx, program: &Program) {
        walk_program(root, cx, program);
    }

    fn visit_toplevel(&self, root: &dyn Visitor<Cx>, cx: &mut Cx, stmt: &Toplevel) {
        walk_toplevel(root, cx, stmt);
    }

    fn visit_expr(&self, root: &dyn Visitor<Cx>, cx: &mut Cx, expr: &Expr) {
        walk_expr(root, cx, expr);
    }

    fn visit_pattern(&self, root: &dyn Visitor<Cx>, cx: &mut Cx, pattern: &Pattern) {
        walk_pattern(root, cx, pattern);
    }

    fn visit_type(&self, root: &dyn Visitor<Cx>, cx: &mut Cx, ty: &TypeExpr) {
        walk_type(root, cx, ty);
    }

    fn visit_attribute(
        &self,
        _root: &dyn Visitor<Cx>,
        _cx: &mut Cx,
        _attr: &Attribute,
        _target: AttributeTarget,
    ) {
        // Attribute arguments are plain strings; nothing to descend into.
    }
}

/// A derived descriptor: the deltas a pass adds on top of a base.
///
/// Every handler receives the wrapped `base` and delegates to it unless
/// overridden. An override that wants the subtree traversed must call the
/// matching `base` handler itself.
pub trait VisitorLayer<Cx> {
    fn visit_program(
        &self,
        base: &dyn Visitor<Cx>,
        root: &dyn Visitor<Cx>,
        cx: &mut Cx,
        program: &Program,
    ) {
        base.visit_program(root, cx, program);
    }

    fn visit_toplevel(
        &self,
        base: &dyn Visitor<Cx>,
        root: &dyn Visitor<Cx>,
        cx: &mut Cx,
        stmt: &Toplevel,
    ) {
        base.visit_toplevel(root, cx, stmt);
    }

    fn visit_expr(&self, base: &dyn Visitor<Cx>, root: &dyn Visitor<Cx>, cx: &mut Cx, expr: &Expr) {
        base.visit_expr(root, cx, expr);
    }

    fn visit_pattern(
        &self,
        base: &dyn Visitor<Cx>,
        root: &dyn Visitor<Cx>,
        cx: &mut Cx,
        pattern: &Pattern,
    ) {
        base.visit_pattern(root, cx, pattern);
    }

    fn visit_type(
        &self,
        base: &dyn Visitor<Cx>,
        root: &dyn Visitor<Cx>,
        cx: &mut Cx,
        ty: &TypeExpr,
    ) {
        base.visit_type(root, cx, ty);
    }

    fn visit_attribute(
        &self,
        base: &dyn Visitor<Cx>,
        root: &dyn Visitor<Cx>,
        cx: &mut Cx,
        attr: &Attribute,
        target: AttributeTarget,
    ) {
        base.visit_attribute(root, cx, attr, target);
    }
}

/// A layer together with the descriptor it wraps.
pub struct Layered<'a, L, Cx> {
    layer: L,
    base: Box<dyn Visitor<Cx> + 'a>,
}

impl<'a, L, Cx> Layered<'a, L, Cx>
where
    L: VisitorLayer<Cx> + 'a,
    Cx: 'a,
{
    pub fn new(layer: L, base: Box<dyn Visitor<Cx> + 'a>) -> Self {
        Layered { layer, base }
    }

    /// Wrap `base` and erase the result, ready to be wrapped again.
    pub fn boxed(layer: L, base: Box<dyn Visitor<Cx> + 'a>) -> Box<dyn Visitor<Cx> + 'a> {
        Box::new(Self::new(layer, base))
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }
}

impl<L: VisitorLayer<Cx>, Cx> Visitor<Cx> for Layered<'_, L, Cx> {
    fn visit_program(&self, root: &dyn Visitor<Cx>, cx: &mut Cx, program: &Program) {
        self.layer.visit_program(&*self.base, root, cx, program);
    }

    fn visit_toplevel(&self, root: &dyn Visitor<Cx>, cx: &mut Cx, stmt: &Toplevel) {
        self.layer.visit_toplevel(&*self.base, root, cx, stmt);
    }

    fn visit_expr(&self, root: &dyn Visitor<Cx>, cx: &mut Cx, expr: &Expr) {
        self.layer.visit_expr(&*self.base, root, cx, expr);
    }

    fn visit_pattern(&self, root: &dyn Visitor<Cx>, cx: &mut Cx, pattern: &Pattern) {
        self.layer.visit_pattern(&*self.base, root, cx, pattern);
    }

    fn visit_type(&self, root: &dyn Visitor<Cx>, cx: &mut Cx, ty: &TypeExpr) {
        self.layer.visit_type(&*self.base, root, cx, ty);
    }

    fn visit_attribute(
        &self,
        root: &dyn Visitor<Cx>,
        cx: &mut Cx,
        attr: &Attribute,
        target: AttributeTarget,
    ) {
        self.layer.visit_attribute(&*self.base, root, cx, attr, target);
    }
}

// Walk functions
//
// Children are visited in source order. Attributes come before the node
// they annotate.

pub fn walk_program<Cx>(root: &dyn Visitor<Cx>, cx: &mut Cx, program: &Program) {
    for attr in &program.attributes {
        root.visit_attribute(root, cx, attr, AttributeTarget::ModuleHeader);
    }
    for stmt in &program.statements {
        root.visit_toplevel(root, cx, stmt);
    }
}

pub fn walk_toplevel<Cx>(root: &dyn Visitor<Cx>, cx: &mut Cx, stmt: &Toplevel) {
    let target = match stmt.kind {
        ToplevelKind::Let { .. } => AttributeTarget::ToplevelLet,
        ToplevelKind::Foreign { .. } => AttributeTarget::ToplevelForeign,
        ToplevelKind::Data { .. } => AttributeTarget::ToplevelType,
        ToplevelKind::Expr(_)
        | ToplevelKind::Include { .. }
        | ToplevelKind::Use { .. }
        | ToplevelKind::Provide(_)
        | ToplevelKind::ProvideAll { .. } => AttributeTarget::ToplevelOther,
    };
    for attr in &stmt.attributes {
        root.visit_attribute(root, cx, attr, target);
    }

    match &stmt.kind {
        ToplevelKind::Let { bindings, .. } => walk_bindings(root, cx, bindings),
        ToplevelKind::Expr(expr) => root.visit_expr(root, cx, expr),
        ToplevelKind::Data { decls, .. } => {
            for decl in decls {
                walk_data_decl(root, cx, decl);
            }
        }
        ToplevelKind::Foreign { ty, .. } => root.visit_type(root, cx, ty),
        // Module paths and item lists hold no expressions, patterns or types.
        ToplevelKind::Include { .. }
        | ToplevelKind::Use { .. }
        | ToplevelKind::Provide(_)
        | ToplevelKind::ProvideAll { .. } => {}
    }
}

fn walk_bindings<Cx>(root: &dyn Visitor<Cx>, cx: &mut Cx, bindings: &[ValueBinding]) {
    for binding in bindings {
        root.visit_pattern(root, cx, &binding.pattern);
        root.visit_expr(root, cx, &binding.value);
    }
}

fn walk_data_decl<Cx>(root: &dyn Visitor<Cx>, cx: &mut Cx, decl: &DataDecl) {
    for param in &decl.params {
        root.visit_type(root, cx, param);
    }
    match &decl.kind {
        DataKind::Alias(manifest) => {
            if let Some(ty) = manifest {
                root.visit_type(root, cx, ty);
            }
        }
        DataKind::Variant(ctors) => {
            for ctor in ctors {
                for arg in &ctor.args {
                    root.visit_type(root, cx, arg);
                }
            }
        }
        DataKind::Record(labels) => {
            for label in labels {
                root.visit_type(root, cx, &label.ty);
            }
        }
    }
}

pub fn walk_expr<Cx>(root: &dyn Visitor<Cx>, cx: &mut Cx, expr: &Expr) {
    ensure_sufficient_stack(|| {
        for attr in &expr.attributes {
            root.visit_attribute(root, cx, attr, AttributeTarget::Expression);
        }

        match &expr.kind {
            ExprKind::Constant(_) | ExprKind::Ident(_) | ExprKind::Break | ExprKind::Continue => {}

            ExprKind::Tuple(items) | ExprKind::Array(items) | ExprKind::Block(items) => {
                for item in items {
                    root.visit_expr(root, cx, item);
                }
            }
            ExprKind::ArrayGet { array, index } => {
                root.visit_expr(root, cx, array);
                root.visit_expr(root, cx, index);
            }
            ExprKind::ArraySet {
                array,
                index,
                value,
            } => {
                root.visit_expr(root, cx, array);
                root.visit_expr(root, cx, index);
                root.visit_expr(root, cx, value);
            }
            ExprKind::Record { base, fields } => {
                if let Some(base) = base {
                    root.visit_expr(root, cx, base);
                }
                for field in fields {
                    root.visit_expr(root, cx, &field.value);
                }
            }
            ExprKind::RecordGet { record, .. } => root.visit_expr(root, cx, record),
            ExprKind::RecordSet { record, value, .. } => {
                root.visit_expr(root, cx, record);
                root.visit_expr(root, cx, value);
            }
            ExprKind::Let { bindings, .. } => walk_bindings(root, cx, bindings),
            ExprKind::Lambda { params, body } => {
                for param in params {
                    root.visit_pattern(root, cx, &param.pattern);
                    if let Some(default) = &param.default {
                        root.visit_expr(root, cx, default);
                    }
                }
                root.visit_expr(root, cx, body);
            }
            ExprKind::Apply { func, args } => {
                root.visit_expr(root, cx, func);
                for arg in args {
                    root.visit_expr(root, cx, &arg.value);
                }
            }
            ExprKind::Prefix { operand, .. } => root.visit_expr(root, cx, operand),
            ExprKind::Infix { left, right, .. } => {
                root.visit_expr(root, cx, left);
                root.visit_expr(root, cx, right);
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                root.visit_expr(root, cx, cond);
                root.visit_expr(root, cx, then_branch);
                if let Some(else_branch) = else_branch {
                    root.visit_expr(root, cx, else_branch);
                }
            }
            ExprKind::While { cond, body } => {
                root.visit_expr(root, cx, cond);
                root.visit_expr(root, cx, body);
            }
            ExprKind::For {
                init,
                cond,
                update,
                body,
            } => {
                for part in [init, cond, update].into_iter().flatten() {
                    root.visit_expr(root, cx, part);
                }
                root.visit_expr(root, cx, body);
            }
            ExprKind::Return(value) => {
                if let Some(value) = value {
                    root.visit_expr(root, cx, value);
                }
            }
            ExprKind::Match {
                scrutinee,
                branches,
            } => {
                root.visit_expr(root, cx, scrutinee);
                for branch in branches {
                    root.visit_pattern(root, cx, &branch.pattern);
                    if let Some(guard) = &branch.guard {
                        root.visit_expr(root, cx, guard);
                    }
                    root.visit_expr(root, cx, &branch.body);
                }
            }
            ExprKind::Assign { target, value } => {
                root.visit_expr(root, cx, target);
                root.visit_expr(root, cx, value);
            }
            ExprKind::Constraint { expr, ty } => {
                root.visit_expr(root, cx, expr);
                root.visit_type(root, cx, ty);
            }
        }
    });
}

pub fn walk_pattern<Cx>(root: &dyn Visitor<Cx>, cx: &mut Cx, pattern: &Pattern) {
    ensure_sufficient_stack(|| match &pattern.kind {
        PatternKind::Any | PatternKind::Var(_) | PatternKind::Constant(_) => {}
        PatternKind::Alias { pattern, .. } => root.visit_pattern(root, cx, pattern),
        PatternKind::Tuple(items) | PatternKind::Array(items) => {
            for item in items {
                root.visit_pattern(root, cx, item);
            }
        }
        PatternKind::Record { fields, .. } => {
            for field in fields {
                root.visit_pattern(root, cx, &field.pattern);
            }
        }
        PatternKind::Construct { args, .. } => {
            for arg in args {
                root.visit_pattern(root, cx, arg);
            }
        }
        PatternKind::Or(left, right) => {
            root.visit_pattern(root, cx, left);
            root.visit_pattern(root, cx, right);
        }
        PatternKind::Constraint { pattern, ty } => {
            root.visit_pattern(root, cx, pattern);
            root.visit_type(root, cx, ty);
        }
    });
}

pub fn walk_type<Cx>(root: &dyn Visitor<Cx>, cx: &mut Cx, ty: &TypeExpr) {
    ensure_sufficient_stack(|| match &ty.kind {
        TypeKind::Any | TypeKind::Var(_) => {}
        TypeKind::Arrow { params, ret } => {
            for param in params {
                root.visit_type(root, cx, param);
            }
            root.visit_type(root, cx, ret);
        }
        TypeKind::Tuple(items) => {
            for item in items {
                root.visit_type(root, cx, item);
            }
        }
        TypeKind::Constr { args, .. } => {
            for arg in args {
                root.visit_type(root, cx, arg);
            }
        }
    });
}
