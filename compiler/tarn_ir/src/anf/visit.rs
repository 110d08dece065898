//! Read-only open-recursion traversal of the ANF IR.
//!
//! Same shape as the surface [`visitor`](crate::visitor): an [`AnfVisitor`]
//! descriptor with one handler per category (expression, computation,
//! immediate), a [`DefaultAnfVisitor`] doing plain structural recursion, and
//! [`AnfVisitorLayer`]s that receive their wrapped base explicitly.
//!
//! Binders (let identifiers, lambda parameters, assignment targets) are not
//! immediates and are never passed to `visit_imm`; only uses are.

use super::{AnfExpr, AnfExprKind, AnfProgram, CompExpr, CompKind, ImmExpr};
use crate::stack::ensure_sufficient_stack;

pub trait AnfVisitor<Cx> {
    fn visit_expr(&self, root: &dyn AnfVisitor<Cx>, cx: &mut Cx, expr: &AnfExpr);

    fn visit_comp(&self, root: &dyn AnfVisitor<Cx>, cx: &mut Cx, comp: &CompExpr);

    fn visit_imm(&self, root: &dyn AnfVisitor<Cx>, cx: &mut Cx, imm: &ImmExpr);
}

/// Run `visitor` over a whole program.
pub fn visit_anf_program<Cx>(visitor: &dyn AnfVisitor<Cx>, cx: &mut Cx, program: &AnfProgram) {
    visitor.visit_expr(visitor, cx, &program.body);
}

#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultAnfVisitor;

impl<Cx> AnfVisitor<Cx> for DefaultAnfVisitor {
    fn visit_expr(&self, root: &dyn AnfVisitor<Cx>, cx: &mut Cx, expr: &AnfExpr) {
        walk_expr(root, cx, expr);
    }

    fn visit_comp(&self, root: &dyn AnfVisitor<Cx>, cx: &mut Cx, comp: &CompExpr) {
        walk_comp(root, cx, comp);
    }

    fn visit_imm(&self, _root: &dyn AnfVisitor<Cx>, _cx: &mut Cx, _imm: &ImmExpr) {}
}

pub trait AnfVisitorLayer<Cx> {
    fn visit_expr(
        &self,
        base: &dyn AnfVisitor<Cx>,
        root: &dyn AnfVisitor<Cx>,
        cx: &mut Cx,
        expr: &AnfExpr,
    ) {
        base.visit_expr(root, cx, expr);
    }

    fn visit_comp(
        &self,
        base: &dyn AnfVisitor<Cx>,
        root: &dyn AnfVisitor<Cx>,
        cx: &mut Cx,
        comp: &CompExpr,
    ) {
        base.visit_comp(root, cx, comp);
    }

    fn visit_imm(
        &self,
        base: &dyn AnfVisitor<Cx>,
        root: &dyn AnfVisitor<Cx>,
        cx: &mut Cx,
        imm: &ImmExpr,
    ) {
        base.visit_imm(root, cx, imm);
    }
}

pub struct LayeredAnfVisitor<'a, L, Cx> {
    layer: L,
    base: Box<dyn AnfVisitor<Cx> + 'a>,
}

impl<'a, L, Cx> LayeredAnfVisitor<'a, L, Cx>
where
    L: AnfVisitorLayer<Cx> + 'a,
    Cx: 'a,
{
    pub fn new(layer: L, base: Box<dyn AnfVisitor<Cx> + 'a>) -> Self {
        LayeredAnfVisitor { layer, base }
    }

    pub fn boxed(layer: L, base: Box<dyn AnfVisitor<Cx> + 'a>) -> Box<dyn AnfVisitor<Cx> + 'a> {
        Box::new(Self::new(layer, base))
    }
}

impl<L: AnfVisitorLayer<Cx>, Cx> AnfVisitor<Cx> for LayeredAnfVisitor<'_, L, Cx> {
    fn visit_expr(&self, root: &dyn AnfVisitor<Cx>, cx: &mut Cx, expr: &AnfExpr) {
        self.layer.visit_expr(&*self.base, root, cx, expr);
    }

    fn visit_comp(&self, root: &dyn AnfVisitor<Cx>, cx: &mut Cx, comp: &CompExpr) {
        self.layer.visit_comp(&*self.base, root, cx, comp);
    }

    fn visit_imm(&self, root: &dyn AnfVisitor<Cx>, cx: &mut Cx, imm: &ImmExpr) {
        self.layer.visit_imm(&*self.base, root, cx, imm);
    }
}

pub fn walk_expr<Cx>(root: &dyn AnfVisitor<Cx>, cx: &mut Cx, expr: &AnfExpr) {
    ensure_sufficient_stack(|| match &expr.kind {
        AnfExprKind::Let { bindings, body, .. } => {
            for binding in bindings {
                root.visit_comp(root, cx, &binding.value);
            }
            root.visit_expr(root, cx, body);
        }
        AnfExprKind::Seq { first, rest } => {
            root.visit_comp(root, cx, first);
            root.visit_expr(root, cx, rest);
        }
        AnfExprKind::Comp(comp) => root.visit_comp(root, cx, comp),
    });
}

pub fn walk_comp<Cx>(root: &dyn AnfVisitor<Cx>, cx: &mut Cx, comp: &CompExpr) {
    ensure_sufficient_stack(|| match &comp.kind {
        CompKind::Break | CompKind::Continue | CompKind::String(_) => {}
        CompKind::Return(value) => {
            if let Some(value) = value {
                root.visit_imm(root, cx, value);
            }
        }
        CompKind::Imm(imm)
        | CompKind::Prim1 { arg: imm, .. }
        | CompKind::Assign { value: imm, .. }
        | CompKind::GetTupleItem { tuple: imm, .. }
        | CompKind::GetRecordItem { record: imm, .. } => root.visit_imm(root, cx, imm),
        CompKind::Prim2 { left, right, .. } => {
            root.visit_imm(root, cx, left);
            root.visit_imm(root, cx, right);
        }
        CompKind::SetTupleItem {
            tuple: target,
            value,
            ..
        }
        | CompKind::SetRecordItem {
            record: target,
            value,
            ..
        } => {
            root.visit_imm(root, cx, target);
            root.visit_imm(root, cx, value);
        }
        CompKind::ArrayGet { array, index } => {
            root.visit_imm(root, cx, array);
            root.visit_imm(root, cx, index);
        }
        CompKind::ArraySet {
            array,
            index,
            value,
        } => {
            root.visit_imm(root, cx, array);
            root.visit_imm(root, cx, index);
            root.visit_imm(root, cx, value);
        }
        CompKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            root.visit_imm(root, cx, cond);
            root.visit_expr(root, cx, then_branch);
            root.visit_expr(root, cx, else_branch);
        }
        CompKind::Loop { cond, update, body } => {
            if let Some(cond) = cond {
                root.visit_expr(root, cx, cond);
            }
            if let Some(update) = update {
                root.visit_expr(root, cx, update);
            }
            root.visit_expr(root, cx, body);
        }
        CompKind::Switch {
            scrutinee,
            branches,
            default,
        } => {
            root.visit_imm(root, cx, scrutinee);
            for branch in branches {
                root.visit_expr(root, cx, &branch.body);
            }
            root.visit_expr(root, cx, default);
        }
        CompKind::App { func, args, .. } => {
            root.visit_imm(root, cx, func);
            for arg in args {
                root.visit_imm(root, cx, arg);
            }
        }
        CompKind::Lambda(lambda) => root.visit_expr(root, cx, &lambda.body),
        CompKind::Tuple(items) | CompKind::Array(items) | CompKind::Adt { args: items, .. } => {
            for item in items {
                root.visit_imm(root, cx, item);
            }
        }
        CompKind::Record { fields, .. } => {
            for (_, value) in fields {
                root.visit_imm(root, cx, value);
            }
        }
    });
}

#[cfg(test)]
mod tests;
