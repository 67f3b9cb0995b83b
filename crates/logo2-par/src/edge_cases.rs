//! Edge case tests for logo2-par

use crate::ast::{Expr, Stmt};
use crate::{ParseError, ParseErrorKind, Parser};

fn parse(source: &str) -> (Result<crate::ast::Statements, ParseError>, Vec<ParseError>) {
    let mut parser = Parser::new();
    let program = parser.parse(source);
    (program, parser.errors().to_vec())
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_input() {
    let (program, errors) = parse("");
    assert!(program.unwrap().stmts.is_empty());
    assert!(errors.is_empty());
}

#[test]
fn test_edge_comment_only_input() {
    let (program, _) = parse("// nothing here\n// or here");
    assert!(program.unwrap().stmts.is_empty());
}

#[test]
fn test_edge_deeply_nested_grouping() {
    let source = format!("{}1{}", "(".repeat(64), ")".repeat(64));
    let (program, errors) = parse(&source);
    assert!(program.is_ok());
    assert!(errors.is_empty());
}

#[test]
fn test_edge_deeply_nested_blocks() {
    let source = format!("{}{}", "{ ".repeat(32), "} ".repeat(32));
    let (program, errors) = parse(&source);
    assert!(program.is_ok());
    assert!(errors.is_empty());
}

#[test]
fn test_edge_unknown_operator_aborts_expression() {
    let (result, _) = parse("var x = 1; x = x ?? 2;");
    assert_eq!(result.unwrap_err().kind, ParseErrorKind::UnknownOperator);
}

#[test]
fn test_edge_unterminated_string_reports_syntax_error() {
    let (result, _) = parse("var s = \"abc\n;");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Missing closing quote"));
}

#[test]
fn test_edge_missing_close_paren_recovers() {
    let (program, errors) = parse("var x = (1 + 2;");
    assert!(program.is_ok());
    assert!(errors
        .iter()
        .any(|e| e.kind == ParseErrorKind::CloseParenExpected));
}

#[test]
fn test_edge_missing_while_condition_recovers() {
    let (program, errors) = parse("while { break; }");
    assert!(program.is_ok());
    assert!(errors
        .iter()
        .any(|e| e.kind == ParseErrorKind::ConditionExpressionExpected));
}

#[test]
fn test_edge_enum_recovery_continues_parsing() {
    let (program, errors) = parse("enum 7 { a } var ok = 1;");
    let program = program.unwrap();
    assert!(errors
        .iter()
        .any(|e| e.kind == ParseErrorKind::IdentifierExpected));
    // the declaration after the malformed enum still parses
    assert!(program
        .stmts
        .iter()
        .any(|s| matches!(s, Stmt::Var(v) if v.name == "ok")));
}

#[test]
fn test_edge_enum_missing_comma() {
    let (_, errors) = parse("enum E { a b }");
    assert!(errors.iter().any(|e| e.kind == ParseErrorKind::CommaExpected));
}

#[test]
fn test_edge_function_duplicate_name_is_recoverable() {
    let (program, errors) = parse("fn f() => 1; fn f() => 2;");
    assert!(program.is_ok());
    assert!(errors
        .iter()
        .any(|e| e.kind == ParseErrorKind::DuplicateDefinition));
}

#[test]
fn test_edge_call_of_non_name_is_fatal() {
    let (result, _) = parse("(1 + 2)(3)");
    assert_eq!(result.unwrap_err().kind, ParseErrorKind::Syntax);
}

#[test]
fn test_edge_params_need_commas() {
    let (result, _) = parse("fn f(a b) => a;");
    assert_eq!(
        result.unwrap_err().kind,
        ParseErrorKind::CommaOrCloseParenExpected
    );
}

#[test]
fn test_edge_args_need_commas() {
    let (result, _) = parse("fn f(a, b) => a; f(1 2)");
    assert_eq!(result.unwrap_err().kind, ParseErrorKind::CommaExpected);
}

#[test]
fn test_edge_assignment_is_right_associative() {
    let (program, _) = parse("var a = 0; var b = 0; a = b = 5;");
    let program = program.unwrap();
    let Stmt::ExprStmt(Expr::Assign(outer)) = &program.stmts[2] else {
        panic!("expected assignment");
    };
    assert_eq!(outer.name, "a");
    assert!(matches!(&*outer.value, Expr::Assign(inner) if inner.name == "b"));
}

#[test]
fn test_edge_break_in_anonymous_fn_body_parses() {
    // anonymous-function bodies admit break/continue like loop bodies
    let (program, errors) = parse("var f = fn() { break; };");
    assert!(program.is_ok());
    assert!(errors.is_empty());
}

#[test]
fn test_edge_break_in_named_fn_body_is_error() {
    let (_, errors) = parse("fn f() { break; }");
    assert!(errors
        .iter()
        .any(|e| e.kind == ParseErrorKind::BreakContinueNoLoop));
}

#[test]
fn test_edge_nested_loops_track_depth() {
    let (program, errors) = parse(
        "var x = 0; repeat(2) { while x < 3 { x = x + 1; continue; } break; }",
    );
    assert!(program.is_ok());
    assert!(errors.is_empty());

    let (_, errors) = parse("repeat(2) { } break;");
    assert!(errors
        .iter()
        .any(|e| e.kind == ParseErrorKind::BreakContinueNoLoop));
}

#[test]
fn test_edge_error_location_reported() {
    let (result, _) = parse("var a = 1;\nvar a = 2;");
    let err = result.unwrap_err();
    assert_eq!(err.token.span.line, 2);
    assert_eq!(err.token.span.column, 5);
}

#[test]
fn test_edge_precedence_pairwise() {
    // for every pair with p(op1) > p(op2), `1 op2 2 op1 3` groups as
    // `1 op2 (2 op1 3)`
    let ops = [
        ("==", 90),
        ("+", 100),
        ("*", 200),
        ("**", 350),
        ("|", 390),
        ("^", 390),
        ("&", 400),
    ];
    for (op1, p1) in ops {
        for (op2, p2) in ops {
            if p1 <= p2 {
                continue;
            }
            let source = format!("1 {op2} 2 {op1} 3");
            let (program, errors) = parse(&source);
            let program = program.unwrap_or_else(|e| panic!("{source}: {e}"));
            assert!(errors.is_empty(), "{source}: {errors:?}");

            let Some(Stmt::Expr(Expr::Binary(top))) = program.stmts.last() else {
                panic!("{source}: expected binary at top");
            };
            assert_eq!(top.op.lexeme, op2, "wrong top operator for {source}");
            assert!(
                matches!(&*top.right, Expr::Binary(inner) if inner.op.lexeme == op1),
                "wrong grouping for {source}"
            );
        }
    }
}

#[test]
fn test_edge_keyword_operators() {
    let (program, errors) = parse("true and false or true");
    assert!(errors.is_empty());
    let program = program.unwrap();
    let Some(Stmt::Expr(Expr::Binary(or))) = program.stmts.last() else {
        panic!("expected binary");
    };
    assert_eq!(or.op.lexeme, "or");
    assert!(matches!(&*or.left, Expr::Binary(and) if and.op.lexeme == "and"));
}
