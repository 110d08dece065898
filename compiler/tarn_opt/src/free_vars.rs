//! Free-variable analysis.
//!
//! A structural union over children, minus the identifiers bound at each
//! binding site: `let` binders scope over their group and body, lambda
//! parameters over the lambda body. Assignment targets are uses.

use rustc_hash::FxHashSet;
use tarn_ir::anf::{AnfExpr, AnfExprKind, CompExpr, CompKind, ImmExpr, LambdaComp};
use tarn_ir::stack::ensure_sufficient_stack;
use tarn_ir::Ident;

pub type FreeVars = FxHashSet<Ident>;

/// Identifiers used in `expr` that `expr` does not bind.
pub fn free_vars(expr: &AnfExpr) -> FreeVars {
    let mut out = FreeVars::default();
    expr_free_vars(expr, &mut out);
    out
}

/// Identifiers used in `comp` that `comp` does not bind.
pub fn comp_free_vars(comp: &CompExpr) -> FreeVars {
    let mut out = FreeVars::default();
    comp_into(comp, &mut out);
    out
}

/// Free variables of a lambda: its body minus its parameters.
pub fn lambda_free_vars(lambda: &LambdaComp) -> FreeVars {
    let mut out = free_vars(&lambda.body);
    for param in &lambda.params {
        out.remove(&param.ident);
    }
    out
}

fn expr_free_vars(expr: &AnfExpr, out: &mut FreeVars) {
    ensure_sufficient_stack(|| match &expr.kind {
        AnfExprKind::Let { bindings, body, .. } => {
            let mut inner = free_vars(body);
            for binding in bindings {
                comp_into(&binding.value, &mut inner);
            }
            for binding in bindings {
                inner.remove(&binding.ident);
            }
            out.extend(inner);
        }
        AnfExprKind::Seq { first, rest } => {
            comp_into(first, out);
            expr_free_vars(rest, out);
        }
        AnfExprKind::Comp(comp) => comp_into(comp, out),
    });
}

fn imm_into(imm: &ImmExpr, out: &mut FreeVars) {
    if let Some(ident) = imm.as_ident() {
        out.insert(ident);
    }
}

fn imms_into<'e>(imms: impl IntoIterator<Item = &'e ImmExpr>, out: &mut FreeVars) {
    for imm in imms {
        imm_into(imm, out);
    }
}

fn comp_into(comp: &CompExpr, out: &mut FreeVars) {
    ensure_sufficient_stack(|| match &comp.kind {
        CompKind::Break | CompKind::Continue | CompKind::String(_) => {}
        CompKind::Return(value) => imms_into(value, out),
        CompKind::Imm(imm)
        | CompKind::Prim1 { arg: imm, .. }
        | CompKind::GetTupleItem { tuple: imm, .. }
        | CompKind::GetRecordItem { record: imm, .. } => imm_into(imm, out),
        CompKind::Assign { target, value } => {
            out.insert(*target);
            imm_into(value, out);
        }
        CompKind::Prim2 { left, right, .. }
        | CompKind::ArrayGet {
            array: left,
            index: right,
        }
        | CompKind::SetTupleItem {
            tuple: left,
            value: right,
            ..
        }
        | CompKind::SetRecordItem {
            record: left,
            value: right,
            ..
        } => imms_into([left, right], out),
        CompKind::ArraySet {
            array,
            index,
            value,
        } => imms_into([array, index, value], out),
        CompKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            imm_into(cond, out);
            expr_free_vars(then_branch, out);
            expr_free_vars(else_branch, out);
        }
        CompKind::Loop { cond, update, body } => {
            for part in [cond, update].into_iter().flatten() {
                expr_free_vars(part, out);
            }
            expr_free_vars(body, out);
        }
        CompKind::Switch {
            scrutinee,
            branches,
            default,
        } => {
            imm_into(scrutinee, out);
            for branch in branches {
                expr_free_vars(&branch.body, out);
            }
            expr_free_vars(default, out);
        }
        CompKind::App { func, args, .. } => {
            imm_into(func, out);
            imms_into(args, out);
        }
        CompKind::Lambda(lambda) => out.extend(lambda_free_vars(lambda)),
        CompKind::Tuple(items) | CompKind::Array(items) | CompKind::Adt { args: items, .. } => {
            imms_into(items, out);
        }
        CompKind::Record { fields, .. } => imms_into(fields.iter().map(|(_, value)| value), out),
    });
}

#[cfg(test)]
mod tests;
