//! Binding flags shared by the surface tree and the ANF IR.

/// Whether a binding group may refer to itself.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum RecFlag {
    #[default]
    Nonrecursive,
    Recursive,
}

/// Whether a binding may be reassigned.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum MutFlag {
    #[default]
    Immutable,
    Mutable,
}

/// Whether a toplevel item is visible outside its module.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ExportFlag {
    #[default]
    NotExported,
    Exported,
}
