use super::{Attribute, Path, Pattern, TypeExpr, ValueBinding};
use crate::{MutFlag, Name, RecFlag, Span};

/// A literal constant, as written.
///
/// String literals keep their raw bytes so that ill-formed input survives
/// parsing and can be reported by the checker. Floats are stored as IEEE bits
/// so the tree stays `Eq + Hash`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Constant {
    Int(i64),
    Float(u64),
    Rational { numerator: i64, denominator: i64 },
    String(Vec<u8>),
    Bytes(Vec<u8>),
    /// The literal's contents between the quotes, after escape processing.
    Char(String),
    Bool(bool),
    Void,
}

impl Constant {
    pub fn float(value: f64) -> Self {
        Constant::Float(value.to_bits())
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr {
            kind,
            attributes: Vec::new(),
            span,
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Whether this is a function literal, looking through type constraints.
    pub fn is_lambda(&self) -> bool {
        match &self.kind {
            ExprKind::Lambda { .. } => true,
            ExprKind::Constraint { expr, .. } => expr.is_lambda(),
            _ => false,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Constant(Constant),
    Ident(Path),
    Tuple(Vec<Expr>),
    Array(Vec<Expr>),
    ArrayGet {
        array: Box<Expr>,
        index: Box<Expr>,
    },
    ArraySet {
        array: Box<Expr>,
        index: Box<Expr>,
        value: Box<Expr>,
    },
    /// `{ ...base, field: value }`.
    Record {
        base: Option<Box<Expr>>,
        fields: Vec<RecordField>,
    },
    RecordGet {
        record: Box<Expr>,
        field: Name,
    },
    RecordSet {
        record: Box<Expr>,
        field: Name,
        value: Box<Expr>,
    },
    /// A `let` inside a block; scopes over the rest of the block.
    Let {
        rec_flag: RecFlag,
        mut_flag: MutFlag,
        bindings: Vec<ValueBinding>,
    },
    Block(Vec<Expr>),
    Lambda {
        params: Vec<LambdaParam>,
        body: Box<Expr>,
    },
    Apply {
        func: Box<Expr>,
        args: Vec<ApplyArg>,
    },
    Prefix {
        op: Name,
        operand: Box<Expr>,
    },
    Infix {
        op: Name,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Option<Box<Expr>>,
    },
    While {
        cond: Box<Expr>,
        body: Box<Expr>,
    },
    For {
        init: Option<Box<Expr>>,
        cond: Option<Box<Expr>>,
        update: Option<Box<Expr>>,
        body: Box<Expr>,
    },
    Break,
    Continue,
    Return(Option<Box<Expr>>),
    Match {
        scrutinee: Box<Expr>,
        branches: Vec<MatchBranch>,
    },
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    /// `expr: Type`.
    Constraint {
        expr: Box<Expr>,
        ty: TypeExpr,
    },
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RecordField {
    pub name: Name,
    pub value: Expr,
    pub span: Span,
}

/// A lambda parameter, optionally labeled and defaulted.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LambdaParam {
    pub pattern: Pattern,
    pub default: Option<Expr>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ApplyArg {
    pub label: Option<Name>,
    pub value: Expr,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MatchBranch {
    pub pattern: Pattern,
    pub guard: Option<Expr>,
    pub body: Expr,
    pub span: Span,
}
