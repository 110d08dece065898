//! The known-attribute table.
//!
//! Attribute names are matched as text; the table is small and fixed.

use bitflags::bitflags;
use tarn_ir::ast::AttributeTarget;

bitflags! {
    /// Positions an attribute may appear in.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct AttributeSites: u8 {
        const MODULE_HEADER = 1 << 0;
        const TOPLEVEL_LET = 1 << 1;
        const TOPLEVEL_FOREIGN = 1 << 2;
        const TOPLEVEL_TYPE = 1 << 3;
        const TOPLEVEL_OTHER = 1 << 4;
        const EXPRESSION = 1 << 5;
    }
}

impl AttributeSites {
    pub fn of(target: AttributeTarget) -> Self {
        match target {
            AttributeTarget::ModuleHeader => AttributeSites::MODULE_HEADER,
            AttributeTarget::ToplevelLet => AttributeSites::TOPLEVEL_LET,
            AttributeTarget::ToplevelForeign => AttributeSites::TOPLEVEL_FOREIGN,
            AttributeTarget::ToplevelType => AttributeSites::TOPLEVEL_TYPE,
            AttributeTarget::ToplevelOther => AttributeSites::TOPLEVEL_OTHER,
            AttributeTarget::Expression => AttributeSites::EXPRESSION,
        }
    }
}

/// One row of the known-attribute table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct AttributeInfo {
    pub name: &'static str,
    pub arity: usize,
    pub sites: AttributeSites,
}

impl AttributeInfo {
    pub fn allowed_on(&self, target: AttributeTarget) -> bool {
        self.sites.contains(AttributeSites::of(target))
    }
}

pub const KNOWN_ATTRIBUTES: &[AttributeInfo] = &[
    AttributeInfo {
        name: "disableGC",
        arity: 0,
        sites: AttributeSites::TOPLEVEL_LET
            .union(AttributeSites::TOPLEVEL_FOREIGN)
            .union(AttributeSites::EXPRESSION),
    },
    AttributeInfo {
        name: "unsafe",
        arity: 0,
        sites: AttributeSites::TOPLEVEL_LET.union(AttributeSites::EXPRESSION),
    },
    AttributeInfo {
        name: "externalName",
        arity: 1,
        sites: AttributeSites::TOPLEVEL_LET.union(AttributeSites::TOPLEVEL_FOREIGN),
    },
    AttributeInfo {
        name: "noPervasives",
        arity: 0,
        sites: AttributeSites::MODULE_HEADER,
    },
    AttributeInfo {
        name: "runtimeMode",
        arity: 0,
        sites: AttributeSites::MODULE_HEADER,
    },
];

pub fn lookup(name: &str) -> Option<&'static AttributeInfo> {
    KNOWN_ATTRIBUTES.iter().find(|info| info.name == name)
}
