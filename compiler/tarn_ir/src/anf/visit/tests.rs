use pretty_assertions::assert_eq;

use super::*;
use crate::anf::{
    AnfBinding, AnfConstant, AnfParam, CaptureClass, GlobalFlag, ImmKind, LambdaComp, Prim2,
    StorageClass,
};
use crate::{Ident, IdentRegistry, MutFlag, Name, RecFlag, Span};

fn sp(n: u32) -> Span {
    Span::new(n, n + 1)
}

fn id(ident: Ident) -> ImmExpr {
    ImmExpr::id(ident, Span::DUMMY)
}

fn comp(kind: CompKind) -> CompExpr {
    CompExpr::new(kind, Span::DUMMY)
}

fn let_in(ident: Ident, value: CompExpr, body: AnfExpr) -> AnfExpr {
    AnfExpr::new(
        AnfExprKind::Let {
            rec_flag: RecFlag::Nonrecursive,
            mut_flag: MutFlag::Immutable,
            global: GlobalFlag::Local,
            bindings: vec![AnfBinding::new(ident, value)],
            body: Box::new(body),
        },
        Span::DUMMY,
    )
}

/// `let x = 1 in let f = (y) => x + y in f(x)`
fn sample() -> (AnfProgram, [Ident; 3]) {
    let idents = IdentRegistry::new();
    let x = idents.fresh(Name::from_raw(1));
    let f = idents.fresh(Name::from_raw(2));
    let y = idents.fresh(Name::from_raw(3));

    let lambda = comp(CompKind::Lambda(LambdaComp {
        name: Some(Name::from_raw(2)),
        params: vec![AnfParam {
            ident: y,
            storage: StorageClass::Heap,
        }],
        body: Box::new(AnfExpr::new(
            AnfExprKind::Comp(comp(CompKind::Prim2 {
                op: Prim2::Add,
                left: id(x),
                right: id(y),
            })),
            sp(4),
        )),
        ret: StorageClass::Heap,
        captures: CaptureClass::Unanalyzed,
    }));
    let call = AnfExpr::new(
        AnfExprKind::Comp(comp(CompKind::App {
            func: id(f),
            args: vec![id(x)],
            tail: false,
        })),
        sp(6),
    );
    let body = let_in(
        x,
        comp(CompKind::Imm(ImmExpr::constant(
            AnfConstant::Int(1),
            Span::DUMMY,
        ))),
        let_in(f, lambda, call),
    );
    let program = AnfProgram {
        module_name: Name::from_raw(9),
        body,
    };
    (program, [x, f, y])
}

struct Uses;

impl AnfVisitorLayer<Vec<Ident>> for Uses {
    fn visit_imm(
        &self,
        base: &dyn AnfVisitor<Vec<Ident>>,
        root: &dyn AnfVisitor<Vec<Ident>>,
        cx: &mut Vec<Ident>,
        imm: &ImmExpr,
    ) {
        if let ImmKind::Id(ident) = imm.kind {
            cx.push(ident);
        }
        base.visit_imm(root, cx, imm);
    }
}

#[derive(Default)]
struct Shapes {
    exprs: usize,
    comps: usize,
    imms: usize,
}

struct ShapeCounter;

impl AnfVisitorLayer<Shapes> for ShapeCounter {
    fn visit_expr(
        &self,
        base: &dyn AnfVisitor<Shapes>,
        root: &dyn AnfVisitor<Shapes>,
        cx: &mut Shapes,
        expr: &AnfExpr,
    ) {
        cx.exprs += 1;
        base.visit_expr(root, cx, expr);
    }

    fn visit_comp(
        &self,
        base: &dyn AnfVisitor<Shapes>,
        root: &dyn AnfVisitor<Shapes>,
        cx: &mut Shapes,
        comp: &CompExpr,
    ) {
        cx.comps += 1;
        base.visit_comp(root, cx, comp);
    }

    fn visit_imm(
        &self,
        base: &dyn AnfVisitor<Shapes>,
        root: &dyn AnfVisitor<Shapes>,
        cx: &mut Shapes,
        imm: &ImmExpr,
    ) {
        cx.imms += 1;
        base.visit_imm(root, cx, imm);
    }
}

#[test]
fn uses_are_visited_in_order_and_binders_are_not() {
    let (program, [x, f, y]) = sample();
    let visitor = LayeredAnfVisitor::boxed(Uses, Box::new(DefaultAnfVisitor));
    let mut uses = Vec::new();
    visit_anf_program(&*visitor, &mut uses, &program);
    assert_eq!(uses, vec![x, y, f, x]);
}

#[test]
fn every_node_is_visited_once() {
    let (program, _) = sample();
    let visitor = LayeredAnfVisitor::boxed(ShapeCounter, Box::new(DefaultAnfVisitor));
    let mut shapes = Shapes::default();
    visit_anf_program(&*visitor, &mut shapes, &program);
    // let, let, lambda body, call
    assert_eq!(shapes.exprs, 4);
    // 1, lambda, x + y, f(x)
    assert_eq!(shapes.comps, 4);
    // 1, x, y, f, x
    assert_eq!(shapes.imms, 5);
}

#[test]
fn stacked_layers_share_one_traversal() {
    let (program, _) = sample();
    let visitor = LayeredAnfVisitor::boxed(
        ShapeCounter,
        LayeredAnfVisitor::boxed(ShapeCounter, Box::new(DefaultAnfVisitor)),
    );
    let mut shapes = Shapes::default();
    visit_anf_program(&*visitor, &mut shapes, &program);
    assert_eq!(shapes.exprs, 8);
    assert_eq!(shapes.imms, 10);
}

#[test]
fn layer_can_prune_children() {
    struct SkipLambdas;
    impl AnfVisitorLayer<Vec<Ident>> for SkipLambdas {
        fn visit_comp(
            &self,
            base: &dyn AnfVisitor<Vec<Ident>>,
            root: &dyn AnfVisitor<Vec<Ident>>,
            cx: &mut Vec<Ident>,
            comp: &CompExpr,
        ) {
            if comp.as_lambda().is_none() {
                base.visit_comp(root, cx, comp);
            }
        }
    }

    let (program, [x, f, _]) = sample();
    let visitor = LayeredAnfVisitor::boxed(
        SkipLambdas,
        LayeredAnfVisitor::boxed(Uses, Box::new(DefaultAnfVisitor)),
    );
    let mut uses = Vec::new();
    visit_anf_program(&*visitor, &mut uses, &program);
    assert_eq!(uses, vec![f, x]);
}
