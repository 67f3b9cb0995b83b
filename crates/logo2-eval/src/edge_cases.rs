//! Edge case tests for logo2-eval

use crate::{EvalResult, Exit, Interpreter, RuntimeErrorKind, Value};
use logo2_par::Parser;

fn run(source: &str) -> EvalResult {
    let mut parser = Parser::new();
    let program = parser.parse(source).expect("parse failed");
    Interpreter::new().eval(&program)
}

fn run_value(source: &str) -> Value {
    run(source).expect("evaluation failed")
}

fn run_error(source: &str) -> RuntimeErrorKind {
    match run(source) {
        Err(Exit::Error(err)) => err.kind,
        other => panic!("expected runtime error, got {other:?}"),
    }
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_program_is_null() {
    assert!(run_value("").is_null());
}

#[test]
fn test_edge_var_without_initializer_is_null() {
    assert!(run_value("var x; x").is_null());
}

#[test]
fn test_edge_nested_loops_break_inner_only() {
    let result = run_value(
        "var n = 0; repeat(3) { repeat(10) { break; } n = n + 1; } n",
    );
    assert!(result.equals(&Value::Integer(3)));
}

#[test]
fn test_edge_continue_in_while_reevaluates_condition() {
    let result = run_value(
        "var i = 0; var hits = 0; while i < 4 { i = i + 1; if i == 2 { continue; } hits = hits + 1; } hits",
    );
    assert!(result.equals(&Value::Integer(3)));
}

#[test]
fn test_edge_return_through_nested_loops() {
    let result = run_value(
        "fn find() { repeat(10) { repeat(10) { return 42; } } 0; } find()",
    );
    assert!(result.equals(&Value::Integer(42)));
}

#[test]
fn test_edge_recursion() {
    let result = run_value(
        "fn fact(n) { if n < 2 { 1; } else { n * fact(n - 1); } } fact(6)",
    );
    assert!(result.equals(&Value::Integer(720)));
}

#[test]
fn test_edge_mutual_recursion() {
    let result = run_value(
        "fn is_even(n) { if n == 0 { true; } else { is_odd(n - 1); } } \
         fn is_odd(n) { if n == 0 { false; } else { is_even(n - 1); } } \
         is_even(10)",
    );
    assert!(result.equals(&Value::Boolean(true)));
}

#[test]
fn test_edge_function_redefinition_wins() {
    // the parser flags the duplicate; the evaluator takes the latest body
    let mut parser = Parser::new();
    let program = parser.parse("fn f() => 1; fn f() => 2; f()").unwrap();
    assert!(parser.has_errors());
    let result = Interpreter::new().eval(&program).unwrap();
    assert!(result.equals(&Value::Integer(2)));
}

#[test]
fn test_edge_closures_are_independent() {
    let result = run_value(
        "fn adder(x) { fn(y) => x + y; } \
         var add1 = adder(1); var add9 = adder(9); \
         add1(0) * 100 + add9(0)",
    );
    assert!(result.equals(&Value::Integer(109)));
}

#[test]
fn test_edge_closure_returned_from_block_scope() {
    // the captured chain keeps block-scoped bindings alive past the block
    let result = run_value("var f = null; { var secret = 7; f = fn() => secret; } f()");
    assert!(result.equals(&Value::Integer(7)));
}

#[test]
fn test_edge_shadowed_variable_restored_after_block() {
    let result = run_value("var x = 1; { var x = 2; x = 3; } x");
    assert!(result.equals(&Value::Integer(1)));
}

#[test]
fn test_edge_assignment_value_chains() {
    let result = run_value("var a = 0; var b = 0; a = b = 5; a + b");
    assert!(result.equals(&Value::Integer(10)));
}

#[test]
fn test_edge_compound_assignment() {
    let result = run_value("var a = 10; a += 5; a -= 3; a *= 2; a /= 4; a");
    assert!(result.equals(&Value::Integer(6)));
}

#[test]
fn test_edge_compound_power_assignment() {
    let result = run_value("var a = 2; a **= 3; a");
    assert!(result.equals(&Value::Integer(8)));
}

#[test]
fn test_edge_string_repeat_concat() {
    let result = run_value(
        "var s = \"\"; repeat(3) { s = s + \"ab\"; } s",
    );
    assert!(result.equals(&Value::Str("ababab".into())));
}

#[test]
fn test_edge_hex_literal() {
    assert!(run_value("0xFF & 0x0F").equals(&Value::Integer(15)));
}

#[test]
fn test_edge_mod_sign_follows_dividend() {
    assert!(run_value("0 - 7 % 2").equals(&Value::Integer(-1)));
    assert!(run_value("(0 - 7) % 2").equals(&Value::Integer(-1)));
}

#[test]
fn test_edge_error_inside_loop_aborts() {
    assert_eq!(
        run_error("var i = 0; repeat(5) { i = i + 1; var x = 1 / (2 - i * 2); }"),
        RuntimeErrorKind::DivisionByZero
    );
}

#[test]
fn test_edge_error_in_argument_aborts_call() {
    // arguments evaluate before the callee is even resolved
    assert_eq!(
        run_error("fn f(a) => a; f(1 / 0)"),
        RuntimeErrorKind::DivisionByZero
    );
}

#[test]
fn test_edge_condition_type_mismatch() {
    assert_eq!(run_error("if \"yes\" { 1; }"), RuntimeErrorKind::TypeMismatch);
    assert_eq!(run_error("while null { }"), RuntimeErrorKind::TypeMismatch);
}

#[test]
fn test_edge_enum_value_in_arithmetic() {
    let result = run_value("enum Dir { north, east, south, west } Dir::west * 90");
    assert!(result.equals(&Value::Integer(270)));
}

#[test]
fn test_edge_deep_recursion_moderate_depth() {
    let result = run_value("fn down(n) { if n == 0 { 0; } else { down(n - 1); } } down(200)");
    assert!(result.equals(&Value::Integer(0)));
}

#[test]
fn test_edge_for_loop_with_postfix_increment() {
    let result = run_value("var sum = 0; for var i = 0; i < 5; i++ { sum += i; } sum");
    assert!(result.equals(&Value::Integer(10)));
}
