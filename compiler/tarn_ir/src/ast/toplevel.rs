use super::{Attribute, Expr, Path, Pattern, TypeExpr};
use crate::{ExportFlag, MutFlag, Name, RecFlag, Span};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Toplevel {
    pub kind: ToplevelKind,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

impl Toplevel {
    pub fn new(kind: ToplevelKind, span: Span) -> Self {
        Toplevel {
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
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ToplevelKind {
    Let {
        export: ExportFlag,
        rec_flag: RecFlag,
        mut_flag: MutFlag,
        bindings: Vec<ValueBinding>,
    },
    Expr(Expr),
    /// `type` / `enum` / `record` declarations, possibly mutually recursive.
    Data {
        export: ExportFlag,
        decls: Vec<DataDecl>,
    },
    /// `foreign wasm name: Type from "module"`.
    Foreign {
        export: ExportFlag,
        name: Name,
        ty: TypeExpr,
        module: String,
    },
    /// `include "path" as Alias`.
    Include {
        module: String,
        alias: Option<Path>,
    },
    /// `from Module use { ... }`.
    Use {
        module: Path,
        items: UseItems,
    },
    /// `provide { ... }`.
    Provide(Vec<ProvideItem>),
    /// `provide *`, optionally `except { ... }`.
    ProvideAll { exceptions: Vec<Name> },
}

/// `pattern = value` inside a `let`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ValueBinding {
    pub pattern: Pattern,
    pub value: Expr,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DataDecl {
    pub name: Name,
    /// Type parameters; each is expected to be a [`TypeKind::Var`](super::TypeKind::Var).
    pub params: Vec<TypeExpr>,
    pub kind: DataKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DataKind {
    /// `type T = U`, or an abstract `type T` with no manifest.
    Alias(Option<TypeExpr>),
    Variant(Vec<ConstructorDecl>),
    Record(Vec<LabelDecl>),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConstructorDecl {
    pub name: Name,
    pub args: Vec<TypeExpr>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LabelDecl {
    pub name: Name,
    pub ty: TypeExpr,
    pub mutable: bool,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum UseItems {
    /// `use *`.
    All,
    Items(Vec<UseItem>),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum UseItem {
    Value {
        name: Name,
        alias: Option<Name>,
        span: Span,
    },
    Type {
        name: Name,
        alias: Option<Name>,
        span: Span,
    },
    /// `module Inner` or `module Inner as Alias`.
    Module {
        path: Path,
        alias: Option<Name>,
        span: Span,
    },
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ProvideKind {
    Value,
    Type,
    Module,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ProvideItem {
    pub kind: ProvideKind,
    pub name: Name,
    pub alias: Option<Name>,
    pub span: Span,
}
