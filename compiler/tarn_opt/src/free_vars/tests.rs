use pretty_assertions::assert_eq;
use tarn_ir::anf::CompKind;

use super::*;
use crate::test_helpers::{add, call, comp, done, id, int, lambda, local, Idents};

fn sorted(vars: FreeVars) -> Vec<Ident> {
    let mut vars: Vec<Ident> = vars.into_iter().collect();
    vars.sort();
    vars
}

#[test]
fn let_binders_and_params_are_not_free() {
    let ids = Idents::new();
    let (x, f, y, z, t) = (ids.fresh(1), ids.fresh(2), ids.fresh(3), ids.fresh(4), ids.fresh(5));
    // let x = 1 in let f = (y) => { let t = x + y in t + z } in f(x)
    let body = local(t, add(id(x), id(y)), done(add(id(t), id(z))));
    let expr = local(
        x,
        CompKind::Imm(int(1)),
        local(f, lambda(&[y], body), done(call(f, vec![id(x)]))),
    );
    assert_eq!(sorted(free_vars(&expr)), vec![z]);
}

#[test]
fn lambda_params_bind_only_inside() {
    let ids = Idents::new();
    let (y, w) = (ids.fresh(1), ids.fresh(2));
    let func = comp(lambda(&[y], done(add(id(y), id(w)))));
    assert_eq!(sorted(comp_free_vars(&func)), vec![w]);

    let CompKind::Lambda(inner) = &func.kind else {
        panic!("expected a lambda");
    };
    assert_eq!(sorted(lambda_free_vars(inner)), vec![w]);
    assert_eq!(sorted(free_vars(&inner.body)), vec![y, w]);
}

#[test]
fn assignment_target_is_a_use() {
    let ids = Idents::new();
    let (a, b) = (ids.fresh(1), ids.fresh(2));
    let assign = comp(CompKind::Assign {
        target: a,
        value: id(b),
    });
    assert_eq!(sorted(comp_free_vars(&assign)), vec![a, b]);
}

#[test]
fn branches_contribute_but_their_binders_stay_inside() {
    let ids = Idents::new();
    let (c, a, b, t) = (ids.fresh(1), ids.fresh(2), ids.fresh(3), ids.fresh(4));
    let branch = comp(CompKind::If {
        cond: id(c),
        then_branch: Box::new(local(t, CompKind::Imm(id(a)), done(CompKind::Imm(id(t))))),
        else_branch: Box::new(done(CompKind::Return(Some(id(b))))),
    });
    assert_eq!(sorted(comp_free_vars(&branch)), vec![c, a, b]);
}

#[test]
fn loops_and_constants() {
    let ids = Idents::new();
    let (n, m) = (ids.fresh(1), ids.fresh(2));
    let looped = comp(CompKind::Loop {
        cond: Some(Box::new(done(CompKind::Imm(id(n))))),
        update: None,
        body: Box::new(done(CompKind::Tuple(vec![int(1), id(m)]))),
    });
    assert_eq!(sorted(comp_free_vars(&looped)), vec![n, m]);
    assert!(comp_free_vars(&comp(CompKind::Imm(int(3)))).is_empty());
}
