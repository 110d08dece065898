use super::{Constant, Path, TypeExpr};
use crate::{Name, Span};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Pattern {
    pub kind: PatternKind,
    pub span: Span,
}

impl Pattern {
    pub fn new(kind: PatternKind, span: Span) -> Self {
        Pattern { kind, span }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PatternKind {
    /// `_`
    Any,
    Var(Name),
    /// `pattern as name`
    Alias {
        pattern: Box<Pattern>,
        name: Name,
    },
    Constant(Constant),
    Tuple(Vec<Pattern>),
    Array(Vec<Pattern>),
    /// `{ a, b: p, _ }`; `closed` is false when a trailing `_` is present.
    Record {
        fields: Vec<RecordPatternField>,
        closed: bool,
    },
    Construct {
        name: Path,
        args: Vec<Pattern>,
    },
    Or(Box<Pattern>, Box<Pattern>),
    Constraint {
        pattern: Box<Pattern>,
        ty: TypeExpr,
    },
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RecordPatternField {
    pub name: Name,
    pub pattern: Pattern,
    pub span: Span,
}
