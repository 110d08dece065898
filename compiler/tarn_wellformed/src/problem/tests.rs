use pretty_assertions::assert_eq;
use tarn_diagnostic::Severity;
use tarn_ir::StringInterner;

use super::*;

#[test]
fn every_problem_is_an_error_with_a_wellformedness_code() {
    let names = StringInterner::new();
    let name = names.intern("Foo");
    let span = Span::new(3, 8);
    let problems = [
        WellFormednessProblem::MalformedString { span },
        WellFormednessProblem::IllegalCharacterLiteral {
            span,
            literal: "ab".to_owned(),
        },
        WellFormednessProblem::ModuleAliasTooDeep { span },
        WellFormednessProblem::ModuleImportNameNotSingleSegment { span },
        WellFormednessProblem::TypeVarNotLowercase { span, name },
        WellFormednessProblem::ExportAllRepeated {
            span,
            first: Span::new(0, 2),
        },
        WellFormednessProblem::EmptyRecordPattern { span },
        WellFormednessProblem::RecursiveLetNotFunction { span },
        WellFormednessProblem::RecursiveLetMutable { span },
        WellFormednessProblem::RationalZeroDenominator { span },
        WellFormednessProblem::UnknownAttribute { span, name },
        WellFormednessProblem::AttributeArity {
            span,
            name,
            expected: 1,
            found: 0,
        },
        WellFormednessProblem::AttributeDisallowed { span, name },
        WellFormednessProblem::LoopControlOutsideLoop {
            span,
            keyword: LoopKeyword::Break,
        },
    ];
    for problem in &problems {
        let diag = problem.into_diagnostic(&names);
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.code, problem.code());
        assert!(diag.code.is_wellformedness_error());
        assert_eq!(diag.primary_span(), Some(span));
        assert_eq!(problem.span(), span);
    }
}

#[test]
fn repeated_export_points_at_both_statements() {
    let names = StringInterner::new();
    let problem = WellFormednessProblem::ExportAllRepeated {
        span: Span::new(20, 29),
        first: Span::new(0, 9),
    };
    let diag = problem.into_diagnostic(&names);
    assert_eq!(diag.message, "`provide *` appears more than once");
    assert_eq!(diag.labels.len(), 2);
    assert!(diag.labels[0].is_primary);
    assert_eq!(diag.labels[1].span, Span::new(0, 9));
    assert!(!diag.labels[1].is_primary);
}

#[test]
fn names_are_resolved_in_messages() {
    let names = StringInterner::new();
    let problem = WellFormednessProblem::AttributeArity {
        span: Span::new(0, 13),
        name: names.intern("externalName"),
        expected: 1,
        found: 2,
    };
    assert_eq!(
        problem.into_diagnostic(&names).message,
        "attribute `@externalName` takes 1 argument, found 2"
    );

    let problem = WellFormednessProblem::TypeVarNotLowercase {
        span: Span::new(0, 1),
        name: names.intern("T"),
    };
    assert_eq!(
        problem.into_diagnostic(&names).message,
        "type variable `T` must start with a lowercase letter"
    );
}

#[test]
fn loop_keyword_renders_in_message() {
    let names = StringInterner::new();
    let problem = WellFormednessProblem::LoopControlOutsideLoop {
        span: Span::new(4, 12),
        keyword: LoopKeyword::Continue,
    };
    let diag = problem.into_diagnostic(&names);
    assert_eq!(diag.message, "`continue` outside of a loop");
    assert_eq!(diag.labels[0].message, "cannot `continue` here");
}

#[test]
fn character_literal_message_distinguishes_empty_from_wide() {
    let names = StringInterner::new();
    let empty = WellFormednessProblem::IllegalCharacterLiteral {
        span: Span::new(0, 2),
        literal: String::new(),
    };
    assert_eq!(empty.into_diagnostic(&names).message, "empty character literal");

    let wide = WellFormednessProblem::IllegalCharacterLiteral {
        span: Span::new(0, 4),
        literal: "ab".to_owned(),
    };
    assert_eq!(
        wide.into_diagnostic(&names).message,
        "character literal `'ab'` contains more than one character"
    );
}
