//! Binding-shape checks: recursive lets and record patterns.

use tarn_ir::ast::{Expr, ExprKind, Pattern, PatternKind, Toplevel, ToplevelKind, ValueBinding};
use tarn_ir::visitor::{Visitor, VisitorLayer};
use tarn_ir::{MutFlag, RecFlag, Span};

use crate::{CheckContext, WellFormednessProblem};

/// A `let` group as written at toplevel or inside an expression.
struct LetGroup<'t> {
    rec_flag: RecFlag,
    mut_flag: MutFlag,
    bindings: &'t [ValueBinding],
    span: Span,
}

fn toplevel_let(stmt: &Toplevel) -> Option<LetGroup<'_>> {
    match &stmt.kind {
        ToplevelKind::Let {
            rec_flag,
            mut_flag,
            bindings,
            ..
        } => Some(LetGroup {
            rec_flag: *rec_flag,
            mut_flag: *mut_flag,
            bindings,
            span: stmt.span,
        }),
        _ => None,
    }
}

fn expr_let(expr: &Expr) -> Option<LetGroup<'_>> {
    match &expr.kind {
        ExprKind::Let {
            rec_flag,
            mut_flag,
            bindings,
        } => Some(LetGroup {
            rec_flag: *rec_flag,
            mut_flag: *mut_flag,
            bindings,
            span: expr.span,
        }),
        _ => None,
    }
}

/// Implements a layer that inspects every `let` group, toplevel or nested.
macro_rules! let_layer {
    ($layer:ident, $check:ident) => {
        impl<'n> VisitorLayer<CheckContext<'n>> for $layer {
            fn visit_toplevel(
                &self,
                base: &dyn Visitor<CheckContext<'n>>,
                root: &dyn Visitor<CheckContext<'n>>,
                cx: &mut CheckContext<'n>,
                stmt: &Toplevel,
            ) {
                if let Some(group) = toplevel_let(stmt) {
                    $check(cx, &group);
                }
                base.visit_toplevel(root, cx, stmt);
            }

            fn visit_expr(
                &self,
                base: &dyn Visitor<CheckContext<'n>>,
                root: &dyn Visitor<CheckContext<'n>>,
                cx: &mut CheckContext<'n>,
                expr: &Expr,
            ) {
                if let Some(group) = expr_let(expr) {
                    $check(cx, &group);
                }
                base.visit_expr(root, cx, expr);
            }
        }
    };
}

/// Every right-hand side of `let rec` is a function.
pub struct RecursiveLetFunctionCheck;

fn check_rec_rhs(cx: &mut CheckContext<'_>, group: &LetGroup<'_>) {
    if group.rec_flag != RecFlag::Recursive {
        return;
    }
    for binding in group.bindings {
        if !binding.value.is_lambda() {
            cx.report(WellFormednessProblem::RecursiveLetNotFunction {
                span: binding.value.span,
            });
        }
    }
}

let_layer!(RecursiveLetFunctionCheck, check_rec_rhs);

/// `let rec` is never `mut`.
pub struct RecursiveLetMutableCheck;

fn check_rec_mut(cx: &mut CheckContext<'_>, group: &LetGroup<'_>) {
    if group.rec_flag == RecFlag::Recursive && group.mut_flag == MutFlag::Mutable {
        cx.report(WellFormednessProblem::RecursiveLetMutable { span: group.span });
    }
}

let_layer!(RecursiveLetMutableCheck, check_rec_mut);

/// Record patterns name at least one field.
pub struct EmptyRecordPatternCheck;

impl<'n> VisitorLayer<CheckContext<'n>> for EmptyRecordPatternCheck {
    fn visit_pattern(
        &self,
        base: &dyn Visitor<CheckContext<'n>>,
        root: &dyn Visitor<CheckContext<'n>>,
        cx: &mut CheckContext<'n>,
        pattern: &Pattern,
    ) {
        if let PatternKind::Record { fields, .. } = &pattern.kind {
            if fields.is_empty() {
                cx.report(WellFormednessProblem::EmptyRecordPattern { span: pattern.span });
            }
        }
        base.visit_pattern(root, cx, pattern);
    }
}
