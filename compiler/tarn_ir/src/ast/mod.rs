//! Surface syntax tree.
//!
//! Produced by the parser and consumed read-only by the well-formedness
//! checker. Nodes own their children directly (`Box`/`Vec`); the tree is
//! built once and never rewritten, so there is no arena.
//!
//! Every node carries a [`Span`]. Identifiers are interned [`Name`]s; binding
//! identity is not resolved at this level.

mod attribute;
mod expr;
mod pattern;
mod toplevel;
mod types;

pub use attribute::{Attribute, AttributeArg, AttributeTarget};
pub use expr::{ApplyArg, Constant, Expr, ExprKind, LambdaParam, MatchBranch, RecordField};
pub use pattern::{Pattern, PatternKind, RecordPatternField};
pub use toplevel::{
    ConstructorDecl, DataDecl, DataKind, LabelDecl, ProvideItem, ProvideKind, Toplevel,
    ToplevelKind, UseItem, UseItems, ValueBinding,
};
pub use types::{TypeExpr, TypeKind};

use crate::{Name, Span};

/// A dotted identifier path such as `List.map` or `Option`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Path {
    pub segments: Vec<Name>,
    pub span: Span,
}

impl Path {
    /// Single-segment path.
    pub fn ident(name: Name, span: Span) -> Self {
        Path {
            segments: vec![name],
            span,
        }
    }

    /// Last segment, or [`Name::EMPTY`] for a malformed empty path.
    pub fn last(&self) -> Name {
        self.segments.last().copied().unwrap_or(Name::EMPTY)
    }

    pub fn is_single(&self) -> bool {
        self.segments.len() == 1
    }
}

/// A source comment. Carried through from the parser; ignored by this crate.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Comment {
    pub text: String,
    pub span: Span,
}

/// One parsed compilation unit.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Program {
    pub module_name: Name,
    /// Attributes written on the `module` header.
    pub attributes: Vec<Attribute>,
    pub statements: Vec<Toplevel>,
    pub comments: Vec<Comment>,
    pub span: Span,
}
