//! Administrative normal form IR.
//!
//! Every non-trivial subexpression is named by a binding before use, so
//! operands are always [`ImmExpr`]s (identifiers or constants) and the tree
//! has only three expression shapes: a binding group, a sequence, and a
//! terminal computation.
//!
//! The IR is produced by lowering (outside this crate). Passes here read it
//! through [`visit`] and rewrite it through [`map`]. The only fields any pass
//! in this workspace changes are [`AnfBinding::storage`] and
//! [`LambdaComp::captures`], and only together.

pub mod map;
pub mod visit;

use smallvec::SmallVec;

use crate::{Ident, MutFlag, Name, RecFlag, Span};

/// How a bound value is represented at runtime.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum StorageClass {
    /// Boxed, garbage-collected, traced.
    #[default]
    Heap,
    /// A single untraced machine word, such as a bare function pointer.
    Scalar,
}

/// Identifiers captured by a closure, ordered by stamp.
pub type Captures = SmallVec<[Ident; 4]>;

/// What a lambda needs from its enclosing scopes.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum CaptureClass {
    /// Not yet analyzed, or analysis could not prove anything.
    #[default]
    Unanalyzed,
    /// Needs only globals and its own parameters.
    NoCapture,
    /// Needs exactly these identifiers.
    Explicit(Captures),
}

impl CaptureClass {
    pub fn is_unanalyzed(&self) -> bool {
        matches!(self, CaptureClass::Unanalyzed)
    }
}

/// Whether a binding lives in the unit's static symbol table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum GlobalFlag {
    #[default]
    Local,
    Global,
}

/// A lowered compilation unit.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AnfProgram {
    pub module_name: Name,
    pub body: AnfExpr,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AnfExpr {
    pub kind: AnfExprKind,
    pub span: Span,
}

impl AnfExpr {
    pub fn new(kind: AnfExprKind, span: Span) -> Self {
        AnfExpr { kind, span }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum AnfExprKind {
    /// A binding group scoping over `body`.
    Let {
        rec_flag: RecFlag,
        mut_flag: MutFlag,
        global: GlobalFlag,
        bindings: Vec<AnfBinding>,
        body: Box<AnfExpr>,
    },
    /// Evaluate `first` for effect, then continue with `rest`.
    Seq {
        first: CompExpr,
        rest: Box<AnfExpr>,
    },
    /// Terminal computation.
    Comp(CompExpr),
}

/// `ident = value` inside a binding group.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AnfBinding {
    pub ident: Ident,
    pub storage: StorageClass,
    pub value: CompExpr,
}

impl AnfBinding {
    pub fn new(ident: Ident, value: CompExpr) -> Self {
        AnfBinding {
            ident,
            storage: StorageClass::Heap,
            value,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CompExpr {
    pub kind: CompKind,
    pub span: Span,
}

impl CompExpr {
    pub fn new(kind: CompKind, span: Span) -> Self {
        CompExpr { kind, span }
    }

    pub fn as_lambda(&self) -> Option<&LambdaComp> {
        match &self.kind {
            CompKind::Lambda(lambda) => Some(lambda),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Prim1 {
    Not,
    Negate,
    Box,
    Unbox,
    Ignore,
    ArrayLength,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Prim2 {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompKind {
    Imm(ImmExpr),
    Prim1 {
        op: Prim1,
        arg: ImmExpr,
    },
    Prim2 {
        op: Prim2,
        left: ImmExpr,
        right: ImmExpr,
    },
    /// Reassign a mutable binding.
    Assign {
        target: Ident,
        value: ImmExpr,
    },
    If {
        cond: ImmExpr,
        then_branch: Box<AnfExpr>,
        else_branch: Box<AnfExpr>,
    },
    /// `while`/`for` after lowering; `cond` and `update` are absent for
    /// infinite loops.
    Loop {
        cond: Option<Box<AnfExpr>>,
        update: Option<Box<AnfExpr>>,
        body: Box<AnfExpr>,
    },
    Break,
    Continue,
    Return(Option<ImmExpr>),
    Switch {
        scrutinee: ImmExpr,
        branches: Vec<SwitchBranch>,
        default: Box<AnfExpr>,
    },
    App {
        func: ImmExpr,
        args: Vec<ImmExpr>,
        tail: bool,
    },
    Lambda(LambdaComp),
    Tuple(Vec<ImmExpr>),
    Array(Vec<ImmExpr>),
    Record {
        type_name: Name,
        fields: Vec<(Name, ImmExpr)>,
    },
    Adt {
        type_name: Name,
        variant: u32,
        args: Vec<ImmExpr>,
    },
    GetTupleItem {
        index: u32,
        tuple: ImmExpr,
    },
    SetTupleItem {
        index: u32,
        tuple: ImmExpr,
        value: ImmExpr,
    },
    GetRecordItem {
        index: u32,
        record: ImmExpr,
    },
    SetRecordItem {
        index: u32,
        record: ImmExpr,
        value: ImmExpr,
    },
    ArrayGet {
        array: ImmExpr,
        index: ImmExpr,
    },
    ArraySet {
        array: ImmExpr,
        index: ImmExpr,
        value: ImmExpr,
    },
    String(String),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SwitchBranch {
    pub tag: u32,
    pub body: AnfExpr,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AnfParam {
    pub ident: Ident,
    pub storage: StorageClass,
}

/// A function literal.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LambdaComp {
    /// Source name, when the lambda was bound directly to one.
    pub name: Option<Name>,
    pub params: Vec<AnfParam>,
    pub body: Box<AnfExpr>,
    pub ret: StorageClass,
    pub captures: CaptureClass,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ImmExpr {
    pub kind: ImmKind,
    pub span: Span,
}

impl ImmExpr {
    pub fn id(ident: Ident, span: Span) -> Self {
        ImmExpr {
            kind: ImmKind::Id(ident),
            span,
        }
    }

    pub fn constant(constant: AnfConstant, span: Span) -> Self {
        ImmExpr {
            kind: ImmKind::Const(constant),
            span,
        }
    }

    pub fn as_ident(&self) -> Option<Ident> {
        match self.kind {
            ImmKind::Id(ident) => Some(ident),
            ImmKind::Const(_) | ImmKind::Trap => None,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ImmKind {
    Id(Ident),
    Const(AnfConstant),
    /// Unreachable; traps at runtime.
    Trap,
}

/// Constants small enough to be immediates. Floats are IEEE bits.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum AnfConstant {
    Int(i64),
    Float(u64),
    Bool(bool),
    Char(char),
    Void,
}
