//! ANF builders shared by the analysis and optimizer tests.

use tarn_ir::anf::{
    AnfBinding, AnfConstant, AnfExpr, AnfExprKind, AnfParam, AnfProgram, CaptureClass, CompExpr,
    CompKind, GlobalFlag, ImmExpr, LambdaComp, Prim2, StorageClass,
};
use tarn_ir::{Ident, IdentRegistry, MutFlag, Name, RecFlag, Span};

/// Fresh identifiers for one test program.
pub(crate) struct Idents {
    registry: IdentRegistry,
}

impl Idents {
    pub(crate) fn new() -> Self {
        Idents {
            registry: IdentRegistry::new(),
        }
    }

    /// A fresh identifier; `tag` only shows up in debug output.
    pub(crate) fn fresh(&self, tag: u32) -> Ident {
        self.registry.fresh(Name::from_raw(tag))
    }
}

pub(crate) fn id(ident: Ident) -> ImmExpr {
    ImmExpr::id(ident, Span::DUMMY)
}

pub(crate) fn int(value: i64) -> ImmExpr {
    ImmExpr::constant(AnfConstant::Int(value), Span::DUMMY)
}

pub(crate) fn comp(kind: CompKind) -> CompExpr {
    CompExpr::new(kind, Span::DUMMY)
}

/// A terminal computation as an expression.
pub(crate) fn done(kind: CompKind) -> AnfExpr {
    AnfExpr::new(AnfExprKind::Comp(comp(kind)), Span::DUMMY)
}

pub(crate) fn add(left: ImmExpr, right: ImmExpr) -> CompKind {
    CompKind::Prim2 {
        op: Prim2::Add,
        left,
        right,
    }
}

pub(crate) fn call(func: Ident, args: Vec<ImmExpr>) -> CompKind {
    CompKind::App {
        func: id(func),
        args,
        tail: false,
    }
}

pub(crate) fn lambda(params: &[Ident], body: AnfExpr) -> CompKind {
    CompKind::Lambda(LambdaComp {
        name: None,
        params: params
            .iter()
            .map(|ident| AnfParam {
                ident: *ident,
                storage: StorageClass::Heap,
            })
            .collect(),
        body: Box::new(body),
        ret: StorageClass::Heap,
        captures: CaptureClass::Unanalyzed,
    })
}

pub(crate) fn let_in(
    global: GlobalFlag,
    mut_flag: MutFlag,
    bindings: Vec<(Ident, CompKind)>,
    body: AnfExpr,
) -> AnfExpr {
    AnfExpr::new(
        AnfExprKind::Let {
            rec_flag: RecFlag::Nonrecursive,
            mut_flag,
            global,
            bindings: bindings
                .into_iter()
                .map(|(ident, value)| AnfBinding::new(ident, comp(value)))
                .collect(),
            body: Box::new(body),
        },
        Span::DUMMY,
    )
}

/// `let ident = value in body`, local and immutable.
pub(crate) fn local(ident: Ident, value: CompKind, body: AnfExpr) -> AnfExpr {
    let_in(GlobalFlag::Local, MutFlag::Immutable, vec![(ident, value)], body)
}

/// `let ident = value in body` on the toplevel spine.
pub(crate) fn global(ident: Ident, value: CompKind, body: AnfExpr) -> AnfExpr {
    let_in(GlobalFlag::Global, MutFlag::Immutable, vec![(ident, value)], body)
}

pub(crate) fn seq(first: CompKind, rest: AnfExpr) -> AnfExpr {
    AnfExpr::new(
        AnfExprKind::Seq {
            first: comp(first),
            rest: Box::new(rest),
        },
        Span::DUMMY,
    )
}

pub(crate) fn program(body: AnfExpr) -> AnfProgram {
    AnfProgram {
        module_name: Name::from_raw(1),
        body,
    }
}

/// Find the binding of `ident` anywhere in `expr`.
pub(crate) fn find_binding(expr: &AnfExpr, ident: Ident) -> Option<&AnfBinding> {
    match &expr.kind {
        AnfExprKind::Let { bindings, body, .. } => bindings
            .iter()
            .find_map(|binding| {
                if binding.ident == ident {
                    Some(binding)
                } else {
                    find_in_comp(&binding.value, ident)
                }
            })
            .or_else(|| find_binding(body, ident)),
        AnfExprKind::Seq { first, rest } => {
            find_in_comp(first, ident).or_else(|| find_binding(rest, ident))
        }
        AnfExprKind::Comp(comp) => find_in_comp(comp, ident),
    }
}

fn find_in_comp(comp: &CompExpr, ident: Ident) -> Option<&AnfBinding> {
    match &comp.kind {
        CompKind::Lambda(lambda) => find_binding(&lambda.body, ident),
        CompKind::If {
            then_branch,
            else_branch,
            ..
        } => find_binding(then_branch, ident).or_else(|| find_binding(else_branch, ident)),
        CompKind::Loop { body, .. } => find_binding(body, ident),
        _ => None,
    }
}
