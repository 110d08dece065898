//! `break`/`continue` placement.

use std::cell::Cell;

use tarn_ir::ast::{Expr, ExprKind, Program};
use tarn_ir::visitor::{Visitor, VisitorLayer};

use crate::{CheckContext, LoopKeyword, WellFormednessProblem};

/// Loop-control statements need an enclosing loop in the same function.
///
/// Tracks loop nesting depth. A lambda body starts a fresh function, so the
/// depth drops to zero for its duration.
#[derive(Default)]
pub struct LoopControlCheck {
    depth: Cell<u32>,
}

impl LoopControlCheck {
    fn with_depth<R>(&self, depth: u32, f: impl FnOnce() -> R) -> R {
        let saved = self.depth.replace(depth);
        let result = f();
        self.depth.set(saved);
        result
    }
}

impl<'n> VisitorLayer<CheckContext<'n>> for LoopControlCheck {
    fn visit_program(
        &self,
        base: &dyn Visitor<CheckContext<'n>>,
        root: &dyn Visitor<CheckContext<'n>>,
        cx: &mut CheckContext<'n>,
        program: &Program,
    ) {
        self.with_depth(0, || base.visit_program(root, cx, program));
    }

    fn visit_expr(
        &self,
        base: &dyn Visitor<CheckContext<'n>>,
        root: &dyn Visitor<CheckContext<'n>>,
        cx: &mut CheckContext<'n>,
        expr: &Expr,
    ) {
        match expr.kind {
            ExprKind::While { .. } | ExprKind::For { .. } => {
                let depth = self.depth.get().saturating_add(1);
                self.with_depth(depth, || base.visit_expr(root, cx, expr));
            }
            ExprKind::Lambda { .. } => {
                self.with_depth(0, || base.visit_expr(root, cx, expr));
            }
            ExprKind::Break | ExprKind::Continue => {
                if self.depth.get() == 0 {
                    let keyword = if matches!(expr.kind, ExprKind::Break) {
                        LoopKeyword::Break
                    } else {
                        LoopKeyword::Continue
                    };
                    cx.report(WellFormednessProblem::LoopControlOutsideLoop {
                        span: expr.span,
                        keyword,
                    });
                }
                base.visit_expr(root, cx, expr);
            }
            _ => base.visit_expr(root, cx, expr),
        }
    }
}
