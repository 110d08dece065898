use super::Path;
use crate::{Name, Span};

/// A type annotation as written in source.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeExpr {
    pub kind: TypeKind,
    pub span: Span,
}

impl TypeExpr {
    pub fn new(kind: TypeKind, span: Span) -> Self {
        TypeExpr { kind, span }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    /// `_`
    Any,
    /// A type variable such as `a`.
    Var(Name),
    Arrow {
        params: Vec<TypeExpr>,
        ret: Box<TypeExpr>,
    },
    Tuple(Vec<TypeExpr>),
    /// `List<a>`, `Number`.
    Constr {
        path: Path,
        args: Vec<TypeExpr>,
    },
}
