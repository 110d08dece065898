//! Rewriting traversal of the ANF IR.
//!
//! A [`Mapper`] takes nodes by value and returns their replacements. The
//! [`DefaultMapper`] rebuilds every node from its mapped children without
//! changing anything else, so a stack of [`MapperLayer`]s over it only touches
//! what some layer rewrites.
//!
//! Layers that call `base` first and then apply their own rule see children
//! that are already rewritten (post-order). Every handler is total: returning
//! the input unchanged is always valid.

use super::{
    AnfBinding, AnfExpr, AnfExprKind, AnfProgram, CompExpr, CompKind, ImmExpr, LambdaComp,
    SwitchBranch,
};
use crate::stack::ensure_sufficient_stack;

pub trait Mapper {
    fn map_expr(&self, root: &dyn Mapper, expr: AnfExpr) -> AnfExpr;

    fn map_comp(&self, root: &dyn Mapper, comp: CompExpr) -> CompExpr;

    fn map_imm(&self, root: &dyn Mapper, imm: ImmExpr) -> ImmExpr;
}

/// Rewrite a whole program with `mapper`.
pub fn map_program(mapper: &dyn Mapper, program: AnfProgram) -> AnfProgram {
    AnfProgram {
        module_name: program.module_name,
        body: mapper.map_expr(mapper, program.body),
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultMapper;

impl Mapper for DefaultMapper {
    fn map_expr(&self, root: &dyn Mapper, expr: AnfExpr) -> AnfExpr {
        walk_expr(root, expr)
    }

    fn map_comp(&self, root: &dyn Mapper, comp: CompExpr) -> CompExpr {
        walk_comp(root, comp)
    }

    fn map_imm(&self, _root: &dyn Mapper, imm: ImmExpr) -> ImmExpr {
        imm
    }
}

pub trait MapperLayer {
    fn map_expr(&self, base: &dyn Mapper, root: &dyn Mapper, expr: AnfExpr) -> AnfExpr {
        base.map_expr(root, expr)
    }

    fn map_comp(&self, base: &dyn Mapper, root: &dyn Mapper, comp: CompExpr) -> CompExpr {
        base.map_comp(root, comp)
    }

    fn map_imm(&self, base: &dyn Mapper, root: &dyn Mapper, imm: ImmExpr) -> ImmExpr {
        base.map_imm(root, imm)
    }
}

pub struct LayeredMapper<'a, L> {
    layer: L,
    base: Box<dyn Mapper + 'a>,
}

impl<'a, L: MapperLayer + 'a> LayeredMapper<'a, L> {
    pub fn new(layer: L, base: Box<dyn Mapper + 'a>) -> Self {
        LayeredMapper { layer, base }
    }

    pub fn boxed(layer: L, base: Box<dyn Mapper + 'a>) -> Box<dyn Mapper + 'a> {
        Box::new(Self::new(layer, base))
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }
}

impl<L: MapperLayer> Mapper for LayeredMapper<'_, L> {
    fn map_expr(&self, root: &dyn Mapper, expr: AnfExpr) -> AnfExpr {
        self.layer.map_expr(&*self.base, root, expr)
    }

    fn map_comp(&self, root: &dyn Mapper, comp: CompExpr) -> CompExpr {
        self.layer.map_comp(&*self.base, root, comp)
    }

    fn map_imm(&self, root: &dyn Mapper, imm: ImmExpr) -> ImmExpr {
        self.layer.map_imm(&*self.base, root, imm)
    }
}

fn map_boxed(root: &dyn Mapper, expr: Box<AnfExpr>) -> Box<AnfExpr> {
    Box::new(root.map_expr(root, *expr))
}

fn map_imms(root: &dyn Mapper, imms: Vec<ImmExpr>) -> Vec<ImmExpr> {
    imms.into_iter().map(|imm| root.map_imm(root, imm)).collect()
}

/// Rebuild `expr` from its children mapped through `root`.
pub fn walk_expr(root: &dyn Mapper, expr: AnfExpr) -> AnfExpr {
    let AnfExpr { kind, span } = expr;
    let kind = ensure_sufficient_stack(|| match kind {
        AnfExprKind::Let {
            rec_flag,
            mut_flag,
            global,
            bindings,
            body,
        } => AnfExprKind::Let {
            rec_flag,
            mut_flag,
            global,
            bindings: bindings
                .into_iter()
                .map(|binding| AnfBinding {
                    value: root.map_comp(root, binding.value),
                    ..binding
                })
                .collect(),
            body: map_boxed(root, body),
        },
        AnfExprKind::Seq { first, rest } => AnfExprKind::Seq {
            first: root.map_comp(root, first),
            rest: map_boxed(root, rest),
        },
        AnfExprKind::Comp(comp) => AnfExprKind::Comp(root.map_comp(root, comp)),
    });
    AnfExpr { kind, span }
}

/// Rebuild `comp` from its children mapped through `root`.
pub fn walk_comp(root: &dyn Mapper, comp: CompExpr) -> CompExpr {
    let CompExpr { kind, span } = comp;
    let imm = |imm: ImmExpr| root.map_imm(root, imm);
    let kind = ensure_sufficient_stack(|| match kind {
        CompKind::Break => CompKind::Break,
        CompKind::Continue => CompKind::Continue,
        CompKind::String(text) => CompKind::String(text),
        CompKind::Return(value) => CompKind::Return(value.map(imm)),
        CompKind::Imm(value) => CompKind::Imm(imm(value)),
        CompKind::Prim1 { op, arg } => CompKind::Prim1 { op, arg: imm(arg) },
        CompKind::Prim2 { op, left, right } => CompKind::Prim2 {
            op,
            left: imm(left),
            right: imm(right),
        },
        CompKind::Assign { target, value } => CompKind::Assign {
            target,
            value: imm(value),
        },
        CompKind::If {
            cond,
            then_branch,
            else_branch,
        } => CompKind::If {
            cond: imm(cond),
            then_branch: map_boxed(root, then_branch),
            else_branch: map_boxed(root, else_branch),
        },
        CompKind::Loop { cond, update, body } => CompKind::Loop {
            cond: cond.map(|cond| map_boxed(root, cond)),
            update: update.map(|update| map_boxed(root, update)),
            body: map_boxed(root, body),
        },
        CompKind::Switch {
            scrutinee,
            branches,
            default,
        } => CompKind::Switch {
            scrutinee: imm(scrutinee),
            branches: branches
                .into_iter()
                .map(|branch| SwitchBranch {
                    tag: branch.tag,
                    body: root.map_expr(root, branch.body),
                })
                .collect(),
            default: map_boxed(root, default),
        },
        CompKind::App { func, args, tail } => CompKind::App {
            func: imm(func),
            args: map_imms(root, args),
            tail,
        },
        CompKind::Lambda(lambda) => CompKind::Lambda(LambdaComp {
            body: map_boxed(root, lambda.body),
            ..lambda
        }),
        CompKind::Tuple(items) => CompKind::Tuple(map_imms(root, items)),
        CompKind::Array(items) => CompKind::Array(map_imms(root, items)),
        CompKind::Record { type_name, fields } => CompKind::Record {
            type_name,
            fields: fields
                .into_iter()
                .map(|(name, value)| (name, imm(value)))
                .collect(),
        },
        CompKind::Adt {
            type_name,
            variant,
            args,
        } => CompKind::Adt {
            type_name,
            variant,
            args: map_imms(root, args),
        },
        CompKind::GetTupleItem { index, tuple } => CompKind::GetTupleItem {
            index,
            tuple: imm(tuple),
        },
        CompKind::SetTupleItem {
            index,
            tuple,
            value,
        } => CompKind::SetTupleItem {
            index,
            tuple: imm(tuple),
            value: imm(value),
        },
        CompKind::GetRecordItem { index, record } => CompKind::GetRecordItem {
            index,
            record: imm(record),
        },
        CompKind::SetRecordItem {
            index,
            record,
            value,
        } => CompKind::SetRecordItem {
            index,
            record: imm(record),
            value: imm(value),
        },
        CompKind::ArrayGet { array, index } => CompKind::ArrayGet {
            array: imm(array),
            index: imm(index),
        },
        CompKind::ArraySet {
            array,
            index,
            value,
        } => CompKind::ArraySet {
            array: imm(array),
            index: imm(index),
            value: imm(value),
        },
    });
    CompExpr { kind, span }
}

#[cfg(test)]
mod tests;
