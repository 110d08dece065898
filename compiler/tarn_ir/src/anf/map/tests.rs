use pretty_assertions::assert_eq;

use super::*;
use crate::anf::{
    AnfConstant, AnfParam, CaptureClass, GlobalFlag, ImmKind, LambdaComp, StorageClass,
};
use crate::{Ident, IdentRegistry, MutFlag, Name, RecFlag, Span};

fn int(n: i64) -> ImmExpr {
    ImmExpr::constant(AnfConstant::Int(n), Span::DUMMY)
}

fn comp(kind: CompKind) -> CompExpr {
    CompExpr::new(kind, Span::DUMMY)
}

fn terminal(kind: CompKind) -> AnfExpr {
    AnfExpr::new(AnfExprKind::Comp(comp(kind)), Span::DUMMY)
}

fn lambda(param: Ident, body: AnfExpr) -> CompExpr {
    comp(CompKind::Lambda(LambdaComp {
        name: None,
        params: vec![AnfParam {
            ident: param,
            storage: StorageClass::Heap,
        }],
        body: Box::new(body),
        ret: StorageClass::Heap,
        captures: CaptureClass::Unanalyzed,
    }))
}

/// `let g = (a) => let h = (b) => (1, 2) in h in g`
fn nested() -> AnfProgram {
    let idents = IdentRegistry::new();
    let g = idents.fresh(Name::from_raw(1));
    let h = idents.fresh(Name::from_raw(2));
    let a = idents.fresh(Name::from_raw(3));
    let b = idents.fresh(Name::from_raw(4));

    let inner = lambda(b, terminal(CompKind::Tuple(vec![int(1), int(2)])));
    let outer_body = AnfExpr::new(
        AnfExprKind::Let {
            rec_flag: RecFlag::Nonrecursive,
            mut_flag: MutFlag::Immutable,
            global: GlobalFlag::Local,
            bindings: vec![AnfBinding::new(h, inner)],
            body: Box::new(terminal(CompKind::Imm(ImmExpr::id(h, Span::DUMMY)))),
        },
        Span::DUMMY,
    );
    AnfProgram {
        module_name: Name::from_raw(9),
        body: AnfExpr::new(
            AnfExprKind::Let {
                rec_flag: RecFlag::Nonrecursive,
                mut_flag: MutFlag::Immutable,
                global: GlobalFlag::Global,
                bindings: vec![AnfBinding::new(g, lambda(a, outer_body))],
                body: Box::new(terminal(CompKind::Imm(ImmExpr::id(g, Span::DUMMY)))),
            },
            Span::DUMMY,
        ),
    }
}

struct Increment;

impl MapperLayer for Increment {
    fn map_imm(&self, base: &dyn Mapper, root: &dyn Mapper, imm: ImmExpr) -> ImmExpr {
        let imm = base.map_imm(root, imm);
        match imm.kind {
            ImmKind::Const(AnfConstant::Int(n)) => int(n + 1),
            _ => imm,
        }
    }
}

/// Marks a lambda `NoCapture` only when every lambda inside it already is.
struct MarkInnermostFirst;

fn lambdas_marked(expr: &AnfExpr) -> bool {
    let comps: Vec<&CompExpr> = match &expr.kind {
        AnfExprKind::Let { bindings, .. } => bindings.iter().map(|b| &b.value).collect(),
        AnfExprKind::Seq { first, .. } => vec![first],
        AnfExprKind::Comp(comp) => vec![comp],
    };
    comps.into_iter().all(|comp| match &comp.kind {
        CompKind::Lambda(lambda) => lambda.captures == CaptureClass::NoCapture,
        _ => true,
    })
}

impl MapperLayer for MarkInnermostFirst {
    fn map_comp(&self, base: &dyn Mapper, root: &dyn Mapper, comp: CompExpr) -> CompExpr {
        let mut comp = base.map_comp(root, comp);
        if let CompKind::Lambda(lambda) = &mut comp.kind {
            if lambdas_marked(&lambda.body) {
                lambda.captures = CaptureClass::NoCapture;
            }
        }
        comp
    }
}

fn count_marked(expr: &AnfExpr) -> usize {
    let mut count = 0;
    if let AnfExprKind::Let { bindings, body, .. } = &expr.kind {
        for binding in bindings {
            if let CompKind::Lambda(lambda) = &binding.value.kind {
                if lambda.captures == CaptureClass::NoCapture {
                    count += 1;
                }
                count += count_marked(&lambda.body);
            }
        }
        count += count_marked(body);
    }
    count
}

#[test]
fn default_mapper_is_identity() {
    let program = nested();
    let mapped = map_program(&DefaultMapper, program.clone());
    assert_eq!(mapped, program);
}

#[test]
fn layer_rewrites_every_immediate() {
    let mapper = LayeredMapper::boxed(Increment, Box::new(DefaultMapper));
    let mapped = map_program(&*mapper, nested());

    let expected = map_program(&DefaultMapper, nested());
    assert_ne!(mapped, expected);

    let twice = LayeredMapper::boxed(
        Increment,
        LayeredMapper::boxed(Increment, Box::new(DefaultMapper)),
    );
    let once_more = map_program(&*mapper, mapped);
    assert_eq!(map_program(&*twice, nested()), once_more);
}

#[test]
fn children_are_rewritten_before_parents() {
    let mapper = LayeredMapper::boxed(MarkInnermostFirst, Box::new(DefaultMapper));
    let mapped = map_program(&*mapper, nested());
    assert_eq!(count_marked(&mapped.body), 2);
}

#[test]
fn bindings_keep_their_storage_and_identity() {
    let program = nested();
    let mapper = LayeredMapper::boxed(Increment, Box::new(DefaultMapper));
    let mapped = map_program(&*mapper, program.clone());
    let (AnfExprKind::Let { bindings: before, .. }, AnfExprKind::Let { bindings: after, .. }) =
        (&program.body.kind, &mapped.body.kind)
    else {
        panic!("expected a let at the root");
    };
    assert_eq!(before[0].ident, after[0].ident);
    assert_eq!(before[0].storage, after[0].storage);
}
