use crate::{Name, Span};

/// `@name` or `@name("arg", ...)` attached to a toplevel statement, an
/// expression, or the module header.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Attribute {
    pub name: Name,
    pub args: Vec<AttributeArg>,
    pub span: Span,
}

/// A string argument of an attribute.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AttributeArg {
    pub value: String,
    pub span: Span,
}

/// The syntactic position an attribute was written in.
///
/// The traversal engine passes this to `visit_attribute` so placement rules
/// do not have to track their parent node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AttributeTarget {
    /// `@attr module Foo`.
    ModuleHeader,
    /// `@attr let ...` at toplevel.
    ToplevelLet,
    /// `@attr foreign wasm ...` at toplevel.
    ToplevelForeign,
    /// `@attr type ...` at toplevel.
    ToplevelType,
    /// Any other toplevel statement.
    ToplevelOther,
    /// An attribute on an expression.
    Expression,
}
