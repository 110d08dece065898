use pretty_assertions::assert_eq;
use tarn_diagnostic::ErrorCode;
use tarn_ir::{Span, StringInterner};

use super::*;

fn discovered() -> Vec<WellFormednessProblem> {
    vec![
        WellFormednessProblem::EmptyRecordPattern {
            span: Span::new(30, 32),
        },
        WellFormednessProblem::MalformedString {
            span: Span::new(4, 9),
        },
        WellFormednessProblem::RationalZeroDenominator {
            span: Span::new(4, 7),
        },
        WellFormednessProblem::RecursiveLetMutable {
            span: Span::new(4, 7),
        },
    ]
}

#[test]
fn all_sorts_by_span_then_discovery() {
    let selected = select(discovered(), ReportMode::All);
    assert_eq!(
        selected,
        vec![
            WellFormednessProblem::RationalZeroDenominator {
                span: Span::new(4, 7),
            },
            WellFormednessProblem::RecursiveLetMutable {
                span: Span::new(4, 7),
            },
            WellFormednessProblem::MalformedString {
                span: Span::new(4, 9),
            },
            WellFormednessProblem::EmptyRecordPattern {
                span: Span::new(30, 32),
            },
        ]
    );
}

#[test]
fn first_is_earliest_in_source() {
    assert_eq!(
        select(discovered(), ReportMode::First),
        vec![WellFormednessProblem::RationalZeroDenominator {
            span: Span::new(4, 7),
        }]
    );
}

#[test]
fn most_recent_is_last_discovered() {
    assert_eq!(
        select(discovered(), ReportMode::MostRecent),
        vec![WellFormednessProblem::RecursiveLetMutable {
            span: Span::new(4, 7),
        }]
    );
}

#[test]
fn empty_input_selects_nothing() {
    for mode in [ReportMode::All, ReportMode::First, ReportMode::MostRecent] {
        assert!(select(Vec::new(), mode).is_empty());
    }
}

#[test]
fn diagnostics_keep_order() {
    let interner = StringInterner::new();
    let selected = select(discovered(), ReportMode::All);
    let codes: Vec<ErrorCode> = into_diagnostics(&selected, &interner)
        .into_iter()
        .map(|diag| diag.code)
        .collect();
    assert_eq!(
        codes,
        vec![
            ErrorCode::E1010,
            ErrorCode::E1009,
            ErrorCode::E1001,
            ErrorCode::E1007
        ]
    );
}
