//! Well-formedness problem definitions.
//!
//! Each variant carries the span it is reported at. Rendering to a
//! [`Diagnostic`] happens separately, once the problems to report are known.

use std::fmt;

use tarn_diagnostic::{Diagnostic, ErrorCode};
use tarn_ir::{Name, Span, StringLookup};

/// Which loop-control keyword was misplaced.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LoopKeyword {
    Break,
    Continue,
}

impl LoopKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            LoopKeyword::Break => "break",
            LoopKeyword::Continue => "continue",
        }
    }
}

impl fmt::Display for LoopKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Problems found by the well-formedness checks.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum WellFormednessProblem {
    /// String literal bytes are not valid UTF-8.
    MalformedString { span: Span },

    /// Character literal holds zero or several scalar values.
    IllegalCharacterLiteral { span: Span, literal: String },

    /// `include "m" as A.B`: aliases are a single name.
    ModuleAliasTooDeep { span: Span },

    /// `from M use { module A.B }`: the imported module is a single name.
    ModuleImportNameNotSingleSegment { span: Span },

    /// Type variable starting with something other than a lowercase letter.
    TypeVarNotLowercase { span: Span, name: Name },

    /// Second or later `provide *` in one module.
    ExportAllRepeated { span: Span, first: Span },

    /// `{}` as a record pattern.
    EmptyRecordPattern { span: Span },

    /// Right-hand side of `let rec` is not a function.
    RecursiveLetNotFunction { span: Span },

    /// `let rec mut`.
    RecursiveLetMutable { span: Span },

    /// Rational literal `n/0`.
    RationalZeroDenominator { span: Span },

    /// Attribute name not in the known-attribute table.
    UnknownAttribute { span: Span, name: Name },

    /// Known attribute with the wrong number of arguments.
    AttributeArity {
        span: Span,
        name: Name,
        expected: usize,
        found: usize,
    },

    /// Known attribute in a position it does not apply to.
    AttributeDisallowed { span: Span, name: Name },

    /// `break` or `continue` with no enclosing loop in the same function.
    LoopControlOutsideLoop { span: Span, keyword: LoopKeyword },
}

impl WellFormednessProblem {
    /// Primary location of the problem.
    pub fn span(&self) -> Span {
        match self {
            WellFormednessProblem::MalformedString { span }
            | WellFormednessProblem::IllegalCharacterLiteral { span, .. }
            | WellFormednessProblem::ModuleAliasTooDeep { span }
            | WellFormednessProblem::ModuleImportNameNotSingleSegment { span }
            | WellFormednessProblem::TypeVarNotLowercase { span, .. }
            | WellFormednessProblem::ExportAllRepeated { span, .. }
            | WellFormednessProblem::EmptyRecordPattern { span }
            | WellFormednessProblem::RecursiveLetNotFunction { span }
            | WellFormednessProblem::RecursiveLetMutable { span }
            | WellFormednessProblem::RationalZeroDenominator { span }
            | WellFormednessProblem::UnknownAttribute { span, .. }
            | WellFormednessProblem::AttributeArity { span, .. }
            | WellFormednessProblem::AttributeDisallowed { span, .. }
            | WellFormednessProblem::LoopControlOutsideLoop { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WellFormednessProblem::MalformedString { .. } => ErrorCode::E1001,
            WellFormednessProblem::IllegalCharacterLiteral { .. } => ErrorCode::E1002,
            WellFormednessProblem::ModuleAliasTooDeep { .. } => ErrorCode::E1003,
            WellFormednessProblem::ModuleImportNameNotSingleSegment { .. } => ErrorCode::E1004,
            WellFormednessProblem::TypeVarNotLowercase { .. } => ErrorCode::E1005,
            WellFormednessProblem::ExportAllRepeated { .. } => ErrorCode::E1006,
            WellFormednessProblem::EmptyRecordPattern { .. } => ErrorCode::E1007,
            WellFormednessProblem::RecursiveLetNotFunction { .. } => ErrorCode::E1008,
            WellFormednessProblem::RecursiveLetMutable { .. } => ErrorCode::E1009,
            WellFormednessProblem::RationalZeroDenominator { .. } => ErrorCode::E1010,
            WellFormednessProblem::UnknownAttribute { .. } => ErrorCode::E1011,
            WellFormednessProblem::AttributeArity { .. } => ErrorCode::E1012,
            WellFormednessProblem::AttributeDisallowed { .. } => ErrorCode::E1013,
            WellFormednessProblem::LoopControlOutsideLoop { .. } => ErrorCode::E1014,
        }
    }

    /// Convert this problem into a diagnostic.
    ///
    /// Uses `names` to resolve interned `Name` fields to display strings.
    #[cold]
    pub fn into_diagnostic(&self, names: &dyn StringLookup) -> Diagnostic {
        let diag = Diagnostic::error(self.code());
        match self {
            WellFormednessProblem::MalformedString { span } => diag
                .with_message("malformed string literal")
                .with_label(*span, "not valid UTF-8")
                .with_note("string literals must decode as UTF-8"),

            WellFormednessProblem::IllegalCharacterLiteral { span, literal } => {
                let message = if literal.is_empty() {
                    "empty character literal".to_owned()
                } else {
                    format!("character literal `'{literal}'` contains more than one character")
                };
                diag.with_message(message)
                    .with_label(*span, "expected exactly one character")
                    .with_suggestion(format!("use a string literal instead: \"{literal}\""))
            }

            WellFormednessProblem::ModuleAliasTooDeep { span } => diag
                .with_message("module alias is too deep")
                .with_label(*span, "an alias must be a single name")
                .with_suggestion("remove the dots from the alias"),

            WellFormednessProblem::ModuleImportNameNotSingleSegment { span } => diag
                .with_message("module import names a nested path")
                .with_label(*span, "expected a single module name")
                .with_note("import the enclosing module and refer to the nested one through it"),

            WellFormednessProblem::TypeVarNotLowercase { span, name } => {
                let name = names.lookup(*name);
                diag.with_message(format!(
                    "type variable `{name}` must start with a lowercase letter"
                ))
                .with_label(*span, "not a valid type variable")
            }

            WellFormednessProblem::ExportAllRepeated { span, first } => diag
                .with_message("`provide *` appears more than once")
                .with_label(*span, "repeated here")
                .with_secondary_label(*first, "first `provide *` here")
                .with_suggestion("remove this statement"),

            WellFormednessProblem::EmptyRecordPattern { span } => diag
                .with_message("record pattern has no fields")
                .with_label(*span, "empty record pattern")
                .with_suggestion("use `_` to match any record"),

            WellFormednessProblem::RecursiveLetNotFunction { span } => diag
                .with_message("`let rec` must bind a function")
                .with_label(*span, "not a function")
                .with_note("only function definitions may refer to themselves"),

            WellFormednessProblem::RecursiveLetMutable { span } => diag
                .with_message("`let rec` bindings cannot be mutable")
                .with_label(*span, "declared `rec` and `mut`")
                .with_suggestion("remove `mut`"),

            WellFormednessProblem::RationalZeroDenominator { span } => diag
                .with_message("rational literal has a zero denominator")
                .with_label(*span, "division by zero"),

            WellFormednessProblem::UnknownAttribute { span, name } => {
                let name = names.lookup(*name);
                diag.with_message(format!("unknown attribute `@{name}`"))
                    .with_label(*span, "not a known attribute")
            }

            WellFormednessProblem::AttributeArity {
                span,
                name,
                expected,
                found,
            } => {
                let name = names.lookup(*name);
                let plural = if *expected == 1 { "" } else { "s" };
                diag.with_message(format!(
                    "attribute `@{name}` takes {expected} argument{plural}, found {found}"
                ))
                .with_label(*span, format!("expected {expected} argument{plural}"))
            }

            WellFormednessProblem::AttributeDisallowed { span, name } => {
                let name = names.lookup(*name);
                diag.with_message(format!("attribute `@{name}` is not allowed here"))
                    .with_label(*span, "misplaced attribute")
            }

            WellFormednessProblem::LoopControlOutsideLoop { span, keyword } => diag
                .with_message(format!("`{keyword}` outside of a loop"))
                .with_label(*span, format!("cannot `{keyword}` here"))
                .with_note("a loop does not extend into the functions defined inside it"),
        }
    }
}

#[cfg(test)]
mod tests;
