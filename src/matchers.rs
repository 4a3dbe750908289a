//! Call-shape predicates over swc AST nodes.
//!
//! Pure functions with no state dependencies. A rule driver walks the AST it
//! owns and asks these predicates whether a node is the call it wants to
//! flag; nothing here allocates or reports.

use regex::Regex;
use swc_ecma_ast::{CallExpr, Callee, Expr, Lit, MemberProp, Stmt};

/// Check whether a call expression has the exact shape `object.method(...)`.
///
/// Only a plain identifier selector matches: `t.skip(...)` matches
/// `("t", "skip")`, while `skip(...)`, `a.t.skip(...)` and `t["skip"](...)`
/// do not. Names are compared case-sensitively and arguments are ignored.
pub fn match_call_expr(call: &CallExpr, object: &str, method: &str) -> bool {
    if let Callee::Expr(expr) = &call.callee
        && let Expr::Member(member) = &**expr
        && let Expr::Ident(obj_ident) = &*member.obj
        && let MemberProp::Ident(method_ident) = &member.prop
    {
        return obj_ident.sym.as_str() == object && method_ident.sym.as_str() == method;
    }
    false
}

/// Check whether the call's single string-literal argument matches `pattern`.
///
/// The pattern is a regular expression searched against the literal's raw
/// source text, quotes included, so `^"` can distinguish double- from
/// single-quoted arguments. Calls with zero or several arguments, spread or
/// non-string arguments, and empty patterns never match. A pattern that
/// fails to compile is treated as no match rather than an error.
pub fn match_call_args(call: &CallExpr, pattern: &str) -> bool {
    if call.args.len() != 1 || pattern.is_empty() {
        return false;
    }
    let arg = &call.args[0];
    if arg.spread.is_none()
        && let Expr::Lit(Lit::Str(s)) = &*arg.expr
        && let Some(raw) = &s.raw
    {
        return Regex::new(pattern).is_ok_and(|re| re.is_match(raw.as_str()));
    }
    false
}

/// Check whether a statement is a bare `object.method(...)` call.
///
/// Matches an expression statement whose expression is a call with
/// [`match_call_expr`]'s shape, and returns the call node so the caller can
/// go on to inspect its arguments. Declarations, control flow, assignments
/// and optional-chain calls return `None`.
pub fn match_call_stmt<'a>(stmt: &'a Stmt, object: &str, method: &str) -> Option<&'a CallExpr> {
    if let Stmt::Expr(expr_stmt) = stmt
        && let Expr::Call(call) = &*expr_stmt.expr
        && match_call_expr(call, object, method)
    {
        return Some(call);
    }
    None
}
