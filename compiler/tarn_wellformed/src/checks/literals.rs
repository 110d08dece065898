//! Literal checks: string encoding, character width, rational denominators.
//!
//! Literals appear both as expressions and as patterns; each check looks
//! at both.

use tarn_ir::ast::{Constant, Expr, ExprKind, Pattern, PatternKind};
use tarn_ir::visitor::{Visitor, VisitorLayer};
use tarn_ir::Span;

use crate::{CheckContext, WellFormednessProblem};

/// Run `check` on the constant held by `expr` or `pattern`, if any, then
/// continue the descent.
macro_rules! constant_layer {
    ($layer:ident, $check:ident) => {
        impl<'n> VisitorLayer<CheckContext<'n>> for $layer {
            fn visit_expr(
                &self,
                base: &dyn Visitor<CheckContext<'n>>,
                root: &dyn Visitor<CheckContext<'n>>,
                cx: &mut CheckContext<'n>,
                expr: &Expr,
            ) {
                if let ExprKind::Constant(constant) = &expr.kind {
                    $check(cx, constant, expr.span);
                }
                base.visit_expr(root, cx, expr);
            }

            fn visit_pattern(
                &self,
                base: &dyn Visitor<CheckContext<'n>>,
                root: &dyn Visitor<CheckContext<'n>>,
                cx: &mut CheckContext<'n>,
                pattern: &Pattern,
            ) {
                if let PatternKind::Constant(constant) = &pattern.kind {
                    $check(cx, constant, pattern.span);
                }
                base.visit_pattern(root, cx, pattern);
            }
        }
    };
}

pub struct StringLiteralCheck;

fn check_string(cx: &mut CheckContext<'_>, constant: &Constant, span: Span) {
    if let Constant::String(bytes) = constant {
        if std::str::from_utf8(bytes).is_err() {
            cx.report(WellFormednessProblem::MalformedString { span });
        }
    }
}

constant_layer!(StringLiteralCheck, check_string);

pub struct CharLiteralCheck;

fn check_char(cx: &mut CheckContext<'_>, constant: &Constant, span: Span) {
    if let Constant::Char(text) = constant {
        let mut chars = text.chars();
        let single = chars.next().is_some() && chars.next().is_none();
        if !single {
            cx.report(WellFormednessProblem::IllegalCharacterLiteral {
                span,
                literal: text.clone(),
            });
        }
    }
}

constant_layer!(CharLiteralCheck, check_char);

pub struct RationalLiteralCheck;

fn check_rational(cx: &mut CheckContext<'_>, constant: &Constant, span: Span) {
    if let Constant::Rational { denominator: 0, .. } = constant {
        cx.report(WellFormednessProblem::RationalZeroDenominator { span });
    }
}

constant_layer!(RationalLiteralCheck, check_rational);
