//! The individual well-formedness checks and their composition.
//!
//! Each check is a [`VisitorLayer`](tarn_ir::visitor::VisitorLayer) over
//! [`CheckContext`]. [`compose`] stacks the selected layers on top of
//! [`DefaultVisitor`] so a single traversal runs all of them.

mod attributes;
mod bindings;
mod literals;
mod loops;
mod modules;
mod types;

use std::fmt;

use tarn_ir::visitor::{DefaultVisitor, Layered, Visitor};

use crate::CheckContext;

pub use attributes::{AttributeArityCheck, AttributePlacementCheck};
pub use bindings::{EmptyRecordPatternCheck, RecursiveLetFunctionCheck, RecursiveLetMutableCheck};
pub use literals::{CharLiteralCheck, RationalLiteralCheck, StringLiteralCheck};
pub use loops::LoopControlCheck;
pub use modules::{IncludeAliasCheck, SingleExportAllCheck, UseModuleItemCheck};
pub use types::TypeVarCheck;

/// A boxed checking descriptor over [`CheckContext`].
pub type CheckVisitor<'n> = Box<dyn Visitor<CheckContext<'n>> + 'n>;

/// One well-formedness rule.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WellFormednessCheck {
    MalformedString,
    MalformedCharacter,
    SingleExportAll,
    NoEmptyRecordPattern,
    RecursiveLetIsFunction,
    RecursiveLetNotMutable,
    RationalDenominator,
    AttributeArity,
    AttributePlacement,
    LoopControlInLoop,
    IncludeAliasSingleSegment,
    UseModuleSingleSegment,
    TypeVarLowercase,
}

impl WellFormednessCheck {
    /// Every check, in the order they are stacked by default.
    pub const ALL: &'static [WellFormednessCheck] = &[
        WellFormednessCheck::MalformedString,
        WellFormednessCheck::MalformedCharacter,
        WellFormednessCheck::SingleExportAll,
        WellFormednessCheck::NoEmptyRecordPattern,
        WellFormednessCheck::RecursiveLetIsFunction,
        WellFormednessCheck::RecursiveLetNotMutable,
        WellFormednessCheck::RationalDenominator,
        WellFormednessCheck::AttributeArity,
        WellFormednessCheck::AttributePlacement,
        WellFormednessCheck::LoopControlInLoop,
        WellFormednessCheck::IncludeAliasSingleSegment,
        WellFormednessCheck::UseModuleSingleSegment,
        WellFormednessCheck::TypeVarLowercase,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WellFormednessCheck::MalformedString => "malformed-string",
            WellFormednessCheck::MalformedCharacter => "malformed-character",
            WellFormednessCheck::SingleExportAll => "single-export-all",
            WellFormednessCheck::NoEmptyRecordPattern => "no-empty-record-pattern",
            WellFormednessCheck::RecursiveLetIsFunction => "recursive-let-is-function",
            WellFormednessCheck::RecursiveLetNotMutable => "recursive-let-not-mutable",
            WellFormednessCheck::RationalDenominator => "rational-denominator",
            WellFormednessCheck::AttributeArity => "attribute-arity",
            WellFormednessCheck::AttributePlacement => "attribute-placement",
            WellFormednessCheck::LoopControlInLoop => "loop-control-in-loop",
            WellFormednessCheck::IncludeAliasSingleSegment => "include-alias-single-segment",
            WellFormednessCheck::UseModuleSingleSegment => "use-module-single-segment",
            WellFormednessCheck::TypeVarLowercase => "type-var-lowercase",
        }
    }

    /// Wrap `base` in this check's layer.
    pub fn wrap<'n>(self, base: CheckVisitor<'n>) -> CheckVisitor<'n> {
        match self {
            WellFormednessCheck::MalformedString => Layered::boxed(StringLiteralCheck, base),
            WellFormednessCheck::MalformedCharacter => Layered::boxed(CharLiteralCheck, base),
            WellFormednessCheck::SingleExportAll => {
                Layered::boxed(SingleExportAllCheck::default(), base)
            }
            WellFormednessCheck::NoEmptyRecordPattern => {
                Layered::boxed(EmptyRecordPatternCheck, base)
            }
            WellFormednessCheck::RecursiveLetIsFunction => {
                Layered::boxed(RecursiveLetFunctionCheck, base)
            }
            WellFormednessCheck::RecursiveLetNotMutable => {
                Layered::boxed(RecursiveLetMutableCheck, base)
            }
            WellFormednessCheck::RationalDenominator => Layered::boxed(RationalLiteralCheck, base),
            WellFormednessCheck::AttributeArity => Layered::boxed(AttributeArityCheck, base),
            WellFormednessCheck::AttributePlacement => {
                Layered::boxed(AttributePlacementCheck, base)
            }
            WellFormednessCheck::LoopControlInLoop => {
                Layered::boxed(LoopControlCheck::default(), base)
            }
            WellFormednessCheck::IncludeAliasSingleSegment => {
                Layered::boxed(IncludeAliasCheck, base)
            }
            WellFormednessCheck::UseModuleSingleSegment => Layered::boxed(UseModuleItemCheck, base),
            WellFormednessCheck::TypeVarLowercase => Layered::boxed(TypeVarCheck, base),
        }
    }
}

impl fmt::Display for WellFormednessCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stack `checks` over [`DefaultVisitor`], first check innermost.
///
/// With no checks the result is the default visitor itself: a traversal
/// that reports nothing.
pub fn compose<'n>(checks: &[WellFormednessCheck]) -> CheckVisitor<'n> {
    let default: CheckVisitor<'n> = Box::new(DefaultVisitor);
    checks.iter().fold(default, |base, check| check.wrap(base))
}
