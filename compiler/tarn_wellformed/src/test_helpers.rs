//! Surface-tree builders for tests.

use tarn_ir::ast::{
    Attribute, AttributeArg, Constant, Expr, ExprKind, LambdaParam, Path, Pattern, PatternKind,
    Program, Toplevel, ToplevelKind, TypeExpr, TypeKind, ValueBinding,
};
use tarn_ir::{ExportFlag, MutFlag, Name, RecFlag, Span, StringInterner};

pub(crate) fn sp(start: u32, end: u32) -> Span {
    Span::new(start, end)
}

pub(crate) fn constant(constant: Constant, span: Span) -> Expr {
    Expr::new(ExprKind::Constant(constant), span)
}

pub(crate) fn int(value: i64, span: Span) -> Expr {
    constant(Constant::Int(value), span)
}

pub(crate) fn ident(name: Name, span: Span) -> Expr {
    Expr::new(ExprKind::Ident(Path::ident(name, span)), span)
}

pub(crate) fn block(exprs: Vec<Expr>, span: Span) -> Expr {
    Expr::new(ExprKind::Block(exprs), span)
}

pub(crate) fn lambda(params: Vec<Pattern>, body: Expr, span: Span) -> Expr {
    let params = params
        .into_iter()
        .map(|pattern| LambdaParam {
            span: pattern.span,
            pattern,
            default: None,
        })
        .collect();
    Expr::new(
        ExprKind::Lambda {
            params,
            body: Box::new(body),
        },
        span,
    )
}

pub(crate) fn while_loop(cond: Expr, body: Expr, span: Span) -> Expr {
    Expr::new(
        ExprKind::While {
            cond: Box::new(cond),
            body: Box::new(body),
        },
        span,
    )
}

pub(crate) fn var_pat(name: Name, span: Span) -> Pattern {
    Pattern::new(PatternKind::Var(name), span)
}

pub(crate) fn type_var(name: Name, span: Span) -> TypeExpr {
    TypeExpr::new(TypeKind::Var(name), span)
}

pub(crate) fn path(names: &[Name], span: Span) -> Path {
    Path {
        segments: names.to_vec(),
        span,
    }
}

pub(crate) fn attribute(name: Name, args: &[&str], span: Span) -> Attribute {
    Attribute {
        name,
        args: args
            .iter()
            .map(|value| AttributeArg {
                value: (*value).to_owned(),
                span,
            })
            .collect(),
        span,
    }
}

pub(crate) fn binding(pattern: Pattern, value: Expr) -> ValueBinding {
    ValueBinding {
        span: pattern.span.merge(value.span),
        pattern,
        value,
    }
}

pub(crate) fn let_stmt(
    rec_flag: RecFlag,
    mut_flag: MutFlag,
    bindings: Vec<ValueBinding>,
    span: Span,
) -> Toplevel {
    Toplevel::new(
        ToplevelKind::Let {
            export: ExportFlag::NotExported,
            rec_flag,
            mut_flag,
            bindings,
        },
        span,
    )
}

pub(crate) fn expr_stmt(expr: Expr) -> Toplevel {
    let span = expr.span;
    Toplevel::new(ToplevelKind::Expr(expr), span)
}

pub(crate) fn provide_all(span: Span) -> Toplevel {
    Toplevel::new(
        ToplevelKind::ProvideAll {
            exceptions: Vec::new(),
        },
        span,
    )
}

pub(crate) fn program(names: &StringInterner, statements: Vec<Toplevel>) -> Program {
    let end = statements.last().map_or(0, |stmt| stmt.span.end);
    Program {
        module_name: names.intern("Main"),
        attributes: Vec::new(),
        statements,
        comments: Vec::new(),
        span: sp(0, end),
    }
}
