//! Diagnostic line formatting.
//!
//! Once a rule has matched a disallowed call, it renders the finding as a
//! single `file:line:col:message` line. The format is stable so editors and
//! CI log scrapers can parse it as `path:int:int:text`.

use swc_common::{BytePos, SourceMap};

/// Render a diagnostic line for the source position `pos`.
///
/// The position is resolved through `source_map` to the file it belongs to,
/// with 1-based line and column numbers. The message is appended verbatim
/// after the final colon.
///
/// # Example
///
/// ```ignore
/// fn visit_call_expr(&mut self, node: &CallExpr) {
///     if match_call_expr(node, "console", "log") {
///         let line = lint_report(node.span.lo, self.source_map, "console.log is not allowed");
///         self.findings.push(line);
///     }
/// }
/// ```
pub fn lint_report(pos: BytePos, source_map: &SourceMap, message: &str) -> String {
    let loc = source_map.lookup_char_pos(pos);
    format!(
        "{}:{}:{}:{}",
        loc.file.name,
        loc.line,
        loc.col_display + 1,
        message
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use swc_common::{FileName, SourceMap};
    use swc_ecma_ast::{CallExpr, Expr, Module, ModuleItem, Stmt};
    use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

    use super::*;

    fn parse(file_name: &str, code: &str) -> (SourceMap, Module) {
        let source_map = SourceMap::default();
        let source_file =
            source_map.new_source_file(FileName::Real(file_name.into()).into(), code.to_string());

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
        let module = parser.parse_module().unwrap();
        (source_map, module)
    }

    fn first_call(module: &Module) -> &CallExpr {
        for item in &module.body {
            if let ModuleItem::Stmt(Stmt::Expr(expr_stmt)) = item
                && let Expr::Call(call) = &*expr_stmt.expr
            {
                return call;
            }
        }
        panic!("no call statement in module");
    }

    #[test]
    fn test_report_line_and_column_are_one_based() {
        // Nine blank lines, then a call indented four columns.
        let code = format!("{}    bad()", "\n".repeat(9));
        let (source_map, module) = parse("a.go", &code);
        let call = first_call(&module);

        assert_eq!(
            lint_report(call.span.lo, &source_map, "bad call"),
            "a.go:10:5:bad call"
        );
    }

    #[test]
    fn test_report_at_file_start() {
        let (source_map, module) = parse("check.ts", "bad()");
        let call = first_call(&module);

        assert_eq!(
            lint_report(call.span.lo, &source_map, "not allowed"),
            "check.ts:1:1:not allowed"
        );
    }

    #[test]
    fn test_report_keeps_message_verbatim() {
        let (source_map, module) = parse("src/app.test.tsx", "t.skip()");
        let call = first_call(&module);

        assert_eq!(
            lint_report(call.span.lo, &source_map, "skip: see issue #42"),
            "src/app.test.tsx:1:1:skip: see issue #42"
        );
        assert_eq!(
            lint_report(call.span.lo, &source_map, ""),
            "src/app.test.tsx:1:1:"
        );
    }
}
