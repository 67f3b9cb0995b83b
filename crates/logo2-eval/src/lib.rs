//! logo2-eval - Tree-walking evaluator
//!
//! Executes the AST produced by `logo2-par`. The [`Interpreter`] maintains
//! a stack of [`Scope`]s (the bottom entry is the global scope) and a
//! table of named functions, looked up before variables on invocation.
//! Non-local control flow (`return`, `break`, `continue`, runtime errors,
//! host quit) propagates as the [`Exit`] variant of [`EvalResult`] and is
//! consumed at function-call and loop frames.
//!
//! # Example
//!
//! ```
//! use logo2_eval::{Interpreter, Value};
//! use logo2_par::Parser;
//!
//! let mut parser = Parser::new();
//! let program = parser.parse("fn sq(n) => n * n; sq(7)").unwrap();
//!
//! let mut interp = Interpreter::new();
//! let result = interp.eval(&program).unwrap();
//! assert!(result.equals(&Value::Integer(49)));
//! ```

mod error;
mod exit;
mod function;
mod scope;
mod value;

#[cfg(test)]
mod edge_cases;

pub use error::{RuntimeError, RuntimeErrorKind};
pub use exit::{EvalResult, Exit};
pub use function::{Function, FunctionKind, NativeFn, UserFunction};
pub use scope::{AssignOutcome, Scope, ScopeRef, Variable};
pub use value::Value;

use std::cmp::Ordering;
use std::rc::Rc;

use logo2_lex::{Literal, TokenKind};
use logo2_par::ast::{
    BlockExpr, Expr, ForStmt, RepeatStmt, Statements, Stmt, WhileStmt,
};
use logo2_util::FxHashMap;

/// The Logo2 evaluator.
pub struct Interpreter {
    /// Stack of scope frames; the bottom entry is the global scope.
    scopes: Vec<ScopeRef>,
    /// Named functions; consulted before variables on invocation by name.
    functions: FxHashMap<String, Rc<Function>>,
}

impl Interpreter {
    /// Creates an interpreter with an empty global scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new().into_ref()],
            functions: FxHashMap::default(),
        }
    }

    /// Evaluates a program; the result is the last statement's value.
    pub fn eval(&mut self, program: &Statements) -> EvalResult {
        self.eval_stmts(&program.stmts)
    }

    // =========================================================================
    // Host interface
    // =========================================================================

    /// Registers a native function; false if the name is already taken.
    pub fn add_native_function(
        &mut self,
        name: impl Into<String>,
        arity: usize,
        f: impl Fn(&mut Interpreter, &[Value]) -> EvalResult + 'static,
    ) -> bool {
        use std::collections::hash_map::Entry;
        match self.functions.entry(name.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(Rc::new(Function::native(arity, Rc::new(f))));
                true
            }
        }
    }

    /// Binds a variable in the current scope; false on duplicate.
    pub fn add_variable(&mut self, name: impl Into<String>, var: Variable) -> bool {
        self.top_scope().borrow_mut().add_variable(name, var)
    }

    /// Reads a variable through the scope chain.
    pub fn find_variable(&self, name: &str) -> Option<Value> {
        self.top_scope().borrow().get(name)
    }

    /// Invokes a function value with already-evaluated arguments.
    pub fn invoke(&mut self, function: &Function, args: Vec<Value>) -> EvalResult {
        if function.arity != args.len() {
            return Err(RuntimeErrorKind::ArgumentCountMismatch.into());
        }
        match &function.kind {
            FunctionKind::Native(native) => {
                let native = Rc::clone(native);
                native.as_ref()(self, &args)
            }
            FunctionKind::User(user) => self.invoke_user(user, args),
        }
    }

    // =========================================================================
    // Statements
    // =========================================================================

    /// Evaluates statements in order; the block value is the last child's
    /// value, or null when empty.
    fn eval_stmts(&mut self, stmts: &[Stmt]) -> EvalResult {
        let mut result = Value::Null;
        for stmt in stmts {
            result = self.eval_stmt(stmt)?;
        }
        Ok(result)
    }

    pub fn eval_stmt(&mut self, stmt: &Stmt) -> EvalResult {
        match stmt {
            Stmt::Var(v) => {
                let value = match &v.init {
                    Some(init) => self.eval_expr(init)?,
                    None => Value::Null,
                };
                let var = if v.is_const {
                    Variable::constant(value)
                } else {
                    Variable::new(value)
                };
                self.top_scope().borrow_mut().add_variable(v.name.clone(), var);
                Ok(Value::Null)
            }

            Stmt::Repeat(r) => self.eval_repeat(r),
            Stmt::While(w) => self.eval_while(w),
            Stmt::For(l) => {
                self.push_scope();
                let result = self.run_for(l);
                self.pop_scope();
                result
            }

            Stmt::Function(decl) => {
                let function = Function::user(decl.params.clone(), Rc::clone(&decl.body), None);
                self.functions.insert(decl.name.clone(), Rc::new(function));
                Ok(Value::Null)
            }

            Stmt::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Null,
                };
                Err(Exit::Return(value))
            }

            Stmt::BreakOrContinue { is_continue: true } => Err(Exit::Continue),
            Stmt::BreakOrContinue { is_continue: false } => Err(Exit::Break),

            Stmt::Enum(decl) => {
                let scope = self.top_scope();
                let mut scope = scope.borrow_mut();
                for (member, value) in &decl.members {
                    let name = format!("{}::{}", decl.name, member);
                    scope.add_variable(name, Variable::constant(Value::Integer(*value)));
                }
                Ok(Value::Null)
            }

            Stmt::ExprStmt(expr) | Stmt::Expr(expr) => self.eval_expr(expr),
        }
    }

    fn eval_repeat(&mut self, r: &RepeatStmt) -> EvalResult {
        let count = self.eval_expr(&r.count)?;
        let Value::Integer(n) = count else {
            return Err(RuntimeErrorKind::TypeMismatch.into());
        };
        self.push_scope();
        let result = self.run_repeat(n, &r.body);
        self.pop_scope();
        result
    }

    fn run_repeat(&mut self, n: i64, body: &BlockExpr) -> EvalResult {
        for _ in 0..n {
            match self.eval_block(body) {
                Ok(_) | Err(Exit::Continue) => {}
                Err(Exit::Break) => break,
                Err(e) => return Err(e),
            }
        }
        Ok(Value::Null)
    }

    fn eval_while(&mut self, w: &WhileStmt) -> EvalResult {
        self.push_scope();
        let result = self.run_while(w);
        self.pop_scope();
        result
    }

    fn run_while(&mut self, w: &WhileStmt) -> EvalResult {
        loop {
            if !self.eval_expr(&w.cond)?.truthy().map_err(Exit::from)? {
                break;
            }
            match self.eval_block(&w.body) {
                Ok(_) | Err(Exit::Continue) => {}
                Err(Exit::Break) => break,
                Err(e) => return Err(e),
            }
        }
        Ok(Value::Null)
    }

    fn run_for(&mut self, l: &ForStmt) -> EvalResult {
        self.eval_stmt(&l.init)?;
        loop {
            if !self.eval_expr(&l.cond)?.truthy().map_err(Exit::from)? {
                break;
            }
            match self.eval_block(&l.body) {
                // continue still runs the increment
                Ok(_) | Err(Exit::Continue) => {}
                Err(Exit::Break) => break,
                Err(e) => return Err(e),
            }
            self.eval_expr(&l.increment)?;
        }
        Ok(Value::Null)
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal(token) => Ok(match token.value {
                Some(Literal::Int(v)) => Value::Integer(v),
                Some(Literal::Real(v)) => Value::Real(v),
                Some(Literal::Bool(b)) => Value::Boolean(b),
                None => match token.kind {
                    TokenKind::String => Value::Str(token.lexeme.clone()),
                    _ => Value::Null,
                },
            }),

            Expr::Name(name) => self
                .find_variable(name)
                .ok_or_else(|| RuntimeErrorKind::UndefinedSymbol.into()),

            Expr::Unary(u) => {
                let value = self.eval_expr(&u.operand)?;
                let result = match u.op.kind {
                    TokenKind::Sub => value.neg(),
                    TokenKind::Not | TokenKind::KeywordNot => value.not(),
                    TokenKind::Complement => value.complement(),
                    _ => Err(RuntimeErrorKind::UndefinedOperator.into()),
                };
                result.map_err(Exit::from)
            }

            Expr::Binary(b) => {
                let left = self.eval_expr(&b.left)?;
                let right = self.eval_expr(&b.right)?;
                self.apply_binary(b.op.kind, &left, &right).map_err(Exit::from)
            }

            Expr::Postfix(p) => self.eval_postfix(p),

            Expr::Assign(a) => {
                let value = self.eval_expr(&a.value)?;
                match self.top_scope().borrow_mut().set(&a.name, value.clone()) {
                    AssignOutcome::Assigned => Ok(value),
                    AssignOutcome::Const => Err(RuntimeErrorKind::CannotAssignConst.into()),
                    AssignOutcome::Undefined => Err(RuntimeErrorKind::UndefinedSymbol.into()),
                }
            }

            Expr::Invoke(call) => {
                let mut args = Vec::with_capacity(call.args.len());
                for arg in &call.args {
                    args.push(self.eval_expr(arg)?);
                }
                let function = self.resolve_function(&call.name)?;
                self.invoke(&function, args)
            }

            Expr::If(ifx) => {
                let cond = self.eval_expr(&ifx.cond)?.truthy().map_err(Exit::from)?;
                let branch = if cond {
                    Some(&ifx.then)
                } else {
                    ifx.else_branch.as_ref()
                };
                match branch {
                    Some(expr) => {
                        self.push_scope();
                        let result = self.eval_expr(expr);
                        self.pop_scope();
                        result
                    }
                    None => Ok(Value::Null),
                }
            }

            Expr::Block(block) => self.eval_block(block),

            Expr::AnonymousFn(a) => {
                let captured = Scope::clone_lineage(self.top_scope(), None);
                let function =
                    Function::user(a.params.clone(), Rc::clone(&a.body), Some(captured));
                Ok(Value::Function(Rc::new(function)))
            }
        }
    }

    fn apply_binary(
        &mut self,
        op: TokenKind,
        left: &Value,
        right: &Value,
    ) -> Result<Value, RuntimeError> {
        match op {
            TokenKind::Add => left.add(right),
            TokenKind::Sub => left.sub(right),
            TokenKind::Mul => left.mul(right),
            TokenKind::Div => left.div(right),
            TokenKind::Mod => left.rem(right),
            TokenKind::Power => left.pow(right),
            TokenKind::And | TokenKind::KeywordAnd => left.bit_and(right),
            TokenKind::Or | TokenKind::KeywordOr => left.bit_or(right),
            TokenKind::Xor => left.bit_xor(right),
            TokenKind::Equal => Ok(Value::Boolean(left.equals(right))),
            TokenKind::NotEqual => Ok(Value::Boolean(!left.equals(right))),
            TokenKind::LessThan => left
                .compare(right)
                .map(|o| Value::Boolean(o == Ordering::Less)),
            TokenKind::LessThanOrEqual => left
                .compare(right)
                .map(|o| Value::Boolean(o != Ordering::Greater)),
            TokenKind::GreaterThan => left
                .compare(right)
                .map(|o| Value::Boolean(o == Ordering::Greater)),
            TokenKind::GreaterThanOrEqual => left
                .compare(right)
                .map(|o| Value::Boolean(o != Ordering::Less)),
            _ => Err(RuntimeErrorKind::UndefinedOperator.into()),
        }
    }

    /// `x++` / `x--`: store back the stepped value, yield the old one.
    fn eval_postfix(&mut self, p: &logo2_par::ast::PostfixExpr) -> EvalResult {
        let Expr::Name(name) = p.operand.as_ref() else {
            return Err(RuntimeErrorKind::TypeMismatch.into());
        };
        let old = self
            .find_variable(name)
            .ok_or_else(|| Exit::from(RuntimeErrorKind::UndefinedSymbol))?;
        if !old.is_integer() && !old.is_real() {
            return Err(RuntimeErrorKind::TypeMismatch.into());
        }
        let one = Value::Integer(1);
        let stepped = match p.op.kind {
            TokenKind::Increment => old.add(&one),
            TokenKind::Decrement => old.sub(&one),
            _ => Err(RuntimeErrorKind::UndefinedOperator.into()),
        }
        .map_err(Exit::from)?;
        match self.top_scope().borrow_mut().set(name, stepped) {
            AssignOutcome::Assigned => Ok(old),
            AssignOutcome::Const => Err(RuntimeErrorKind::CannotAssignConst.into()),
            AssignOutcome::Undefined => Err(RuntimeErrorKind::UndefinedSymbol.into()),
        }
    }

    // =========================================================================
    // Invocation and scopes
    // =========================================================================

    fn resolve_function(&self, name: &str) -> Result<Rc<Function>, Exit> {
        if let Some(f) = self.functions.get(name) {
            return Ok(Rc::clone(f));
        }
        match self.find_variable(name) {
            Some(Value::Function(f)) => Ok(f),
            Some(_) => Err(RuntimeErrorKind::NotCallable.into()),
            None => Err(RuntimeErrorKind::UndefinedFunction.into()),
        }
    }

    fn invoke_user(&mut self, user: &UserFunction, args: Vec<Value>) -> EvalResult {
        let depth = self.scopes.len();

        // captured lineage first, re-rooted onto the live chain so globals
        // defined after capture stay visible
        if let Some(env) = &user.environment {
            let rerooted = Scope::clone_lineage(env, self.scopes.last().cloned());
            self.scopes.push(rerooted);
        }

        self.push_scope();
        {
            let scope = self.top_scope();
            let mut scope = scope.borrow_mut();
            for (param, value) in user.params.iter().zip(args) {
                scope.add_variable(param.clone(), Variable::new(value));
            }
        }

        let result = self.eval_expr(&user.body);
        self.scopes.truncate(depth);

        match result {
            Ok(value) => Ok(value),
            Err(Exit::Return(value)) => Ok(value),
            // a loose break/continue ends the call quietly
            Err(Exit::Break) | Err(Exit::Continue) => Ok(Value::Null),
            Err(other) => Err(other),
        }
    }

    fn eval_block(&mut self, block: &BlockExpr) -> EvalResult {
        self.push_scope();
        let result = self.eval_stmts(&block.stmts);
        self.pop_scope();
        result
    }

    fn top_scope(&self) -> &ScopeRef {
        self.scopes.last().expect("scope stack never empty")
    }

    fn push_scope(&mut self) {
        let parent = self.scopes.last().cloned();
        self.scopes.push(Scope::with_parent(parent).into_ref());
    }

    fn pop_scope(&mut self) {
        debug_assert!(self.scopes.len() > 1);
        self.scopes.pop();
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logo2_par::Parser;

    /// Lexes, parses, and evaluates a source string with a fresh
    /// interpreter.
    fn run(source: &str) -> EvalResult {
        let mut parser = Parser::new();
        let program = parser.parse(source).expect("parse failed");
        assert!(
            !parser.has_errors(),
            "unexpected parse errors: {:?}",
            parser.errors()
        );
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

    #[test]
    fn test_arithmetic_program() {
        let result = run_value("var a = 2 * 3; var b = a + 4; a = b + 1; 6 + b * a");
        // a = 6, b = 10, a = 11, 6 + 10 * 11
        assert!(result.equals(&Value::Integer(116)));
    }

    #[test]
    fn test_repeat_counts() {
        let result = run_value("var x = 0; repeat(3) { x = x + 1; } x");
        assert!(result.equals(&Value::Integer(3)));
    }

    #[test]
    fn test_function_declaration_and_call() {
        let result = run_value("fn sq(n) => n * n; sq(7)");
        assert!(result.equals(&Value::Integer(49)));
    }

    #[test]
    fn test_closure_over_parameter() {
        let result = run_value("fn adder(x) { fn(y) => x + y; } var add3 = adder(3); add3(4)");
        assert!(result.equals(&Value::Integer(7)));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(run_error("1/0"), RuntimeErrorKind::DivisionByZero);
    }

    #[test]
    fn test_string_concatenation() {
        let result = run_value("\"ab\" + \"cd\"");
        assert!(result.equals(&Value::Str("abcd".into())));
    }

    #[test]
    fn test_numeric_promotion() {
        assert!(run_value("1 + 2.5").equals(&Value::Real(3.5)));
        assert!(run_value("2.5 * 2").equals(&Value::Real(5.0)));
        assert!(run_value("7 / 2").equals(&Value::Integer(3)));
    }

    #[test]
    fn test_power_operator() {
        assert!(run_value("2 ** 10").is_integer());
        assert!(run_value("2 ** 3 ** 2").equals(&Value::Integer(512)));
        assert!(run_value("2.0 ** 2").is_real());
    }

    #[test]
    fn test_if_expression_value() {
        assert!(run_value("if 1 < 2 { 10; } else { 20; }").equals(&Value::Integer(10)));
        assert!(run_value("if 2 < 1 { 10; } else { 20; }").equals(&Value::Integer(20)));
    }

    #[test]
    fn test_if_without_else_yields_null() {
        assert!(run_value("if false { 10; }").is_null());
    }

    #[test]
    fn test_block_value_is_last_child() {
        assert!(run_value("{ 1; 2; 3; }").equals(&Value::Integer(3)));
        assert!(run_value("{ }").is_null());
    }

    #[test]
    fn test_scope_isolation() {
        // inner declaration is invisible outside the block
        assert_eq!(
            run_error("{ var inner = 1; } inner"),
            RuntimeErrorKind::UndefinedSymbol
        );
        // outer variables are assignable from inner scopes
        let result = run_value("var x = 1; { x = 5; } x");
        assert!(result.equals(&Value::Integer(5)));
    }

    #[test]
    fn test_loop_body_scope_fresh_per_iteration() {
        let result = run_value("var total = 0; repeat(3) { var t = 1; total = total + t; } total");
        assert!(result.equals(&Value::Integer(3)));
    }

    #[test]
    fn test_while_loop() {
        let result = run_value("var i = 0; var sum = 0; while i < 5 { sum = sum + i; i = i + 1; } sum");
        assert!(result.equals(&Value::Integer(10)));
    }

    #[test]
    fn test_for_loop() {
        let result = run_value(
            "var sum = 0; for var i = 0; i < 4; i = i + 1 { sum = sum + i; } sum",
        );
        assert!(result.equals(&Value::Integer(6)));
    }

    #[test]
    fn test_break_exits_loop() {
        let result = run_value(
            "var i = 0; while true { i = i + 1; if i == 3 { break; } } i",
        );
        assert!(result.equals(&Value::Integer(3)));
    }

    #[test]
    fn test_continue_skips_iteration() {
        let result = run_value(
            "var sum = 0; for var i = 0; i < 5; i = i + 1 { if i == 2 { continue; } sum = sum + i; } sum",
        );
        // 0 + 1 + 3 + 4
        assert!(result.equals(&Value::Integer(8)));
    }

    #[test]
    fn test_return_unwinds_to_call() {
        let result = run_value("fn f() { return 3; 99; } f()");
        assert!(result.equals(&Value::Integer(3)));
    }

    #[test]
    fn test_return_without_value_is_null() {
        assert!(run_value("fn f() { return; } f()").is_null());
    }

    #[test]
    fn test_function_body_value_without_return() {
        let result = run_value("fn f() { 1; 2; } f()");
        assert!(result.equals(&Value::Integer(2)));
    }

    #[test]
    fn test_arity_mismatch() {
        assert_eq!(
            run_error("fn f(a) => a; f(1, 2)"),
            RuntimeErrorKind::ArgumentCountMismatch
        );
        assert_eq!(
            run_error("fn f(a) => a; f()"),
            RuntimeErrorKind::ArgumentCountMismatch
        );
    }

    #[test]
    fn test_undefined_function() {
        assert_eq!(run_error("nope(1)"), RuntimeErrorKind::UndefinedFunction);
    }

    #[test]
    fn test_not_callable() {
        assert_eq!(run_error("var x = 5; x(1)"), RuntimeErrorKind::NotCallable);
    }

    #[test]
    fn test_repeat_count_must_be_integer() {
        assert_eq!(run_error("repeat(true) { }"), RuntimeErrorKind::TypeMismatch);
        assert_eq!(run_error("repeat(1.5) { }"), RuntimeErrorKind::TypeMismatch);
    }

    #[test]
    fn test_negative_repeat_runs_zero_times() {
        let result = run_value("var x = 0; repeat(0 - 2) { x = x + 1; } x");
        assert!(result.equals(&Value::Integer(0)));
    }

    #[test]
    fn test_unary_minus_on_boolean_is_type_mismatch() {
        assert_eq!(run_error("-true"), RuntimeErrorKind::TypeMismatch);
    }

    #[test]
    fn test_enum_members_are_const_values() {
        let result = run_value("enum Color { red, green = 3, blue } Color::blue");
        assert!(result.equals(&Value::Integer(4)));
    }

    #[test]
    fn test_postfix_increment_yields_old_value() {
        assert!(run_value("var i = 5; i++").equals(&Value::Integer(5)));
        assert!(run_value("var i = 5; i++; i").equals(&Value::Integer(6)));
        assert!(run_value("var r = 1.5; r--; r").equals(&Value::Real(0.5)));
    }

    #[test]
    fn test_postfix_on_string_is_type_mismatch() {
        assert_eq!(
            run_error("var s = \"x\"; s++"),
            RuntimeErrorKind::TypeMismatch
        );
    }

    #[test]
    fn test_closure_sees_globals_defined_after_capture() {
        let result = run_value("var f = fn() => g + 1; var g = 10; f()");
        assert!(result.equals(&Value::Integer(11)));
    }

    #[test]
    fn test_closure_captures_value_at_definition() {
        // the captured chain is cloned, so later writes to the original do
        // not leak into the capture
        let result = run_value(
            "var x = 1; var f = fn() => x; x = 2; f()",
        );
        assert!(result.equals(&Value::Integer(1)));
    }

    #[test]
    fn test_anonymous_function_as_argument_value() {
        let result = run_value(
            "fn apply(f, v) => f(v); apply(fn(n) => n * 2, 21)",
        );
        assert!(result.equals(&Value::Integer(42)));
    }

    #[test]
    fn test_top_level_return_signal() {
        let mut parser = Parser::new();
        let program = parser.parse("return 5;").unwrap();
        let result = Interpreter::new().eval(&program);
        assert!(matches!(result, Err(Exit::Return(v)) if v.equals(&Value::Integer(5))));
    }

    #[test]
    fn test_native_function_invocation() {
        let mut parser = Parser::new();
        let program = parser.parse("double(21)").unwrap();

        let mut interp = Interpreter::new();
        assert!(interp.add_native_function("double", 1, |_, args| {
            args[0].mul(&Value::Integer(2)).map_err(Exit::from)
        }));
        // duplicate registration is rejected
        assert!(!interp.add_native_function("double", 1, |_, _| Ok(Value::Null)));

        let result = interp.eval(&program).unwrap();
        assert!(result.equals(&Value::Integer(42)));
    }

    #[test]
    fn test_native_arity_checked() {
        let mut parser = Parser::new();
        let program = parser.parse("one(1, 2)").unwrap();
        let mut interp = Interpreter::new();
        interp.add_native_function("one", 1, |_, _| Ok(Value::Null));
        let result = interp.eval(&program);
        assert!(matches!(
            result,
            Err(Exit::Error(e)) if e.kind == RuntimeErrorKind::ArgumentCountMismatch
        ));
    }

    #[test]
    fn test_host_variables() {
        let mut interp = Interpreter::new();
        assert!(interp.add_variable("answer", Variable::new(Value::Integer(42))));
        assert!(interp
            .find_variable("answer")
            .unwrap()
            .equals(&Value::Integer(42)));

        let mut parser = Parser::new();
        let program = parser.parse("answer + 1").unwrap();
        let result = interp.eval(&program).unwrap();
        assert!(result.equals(&Value::Integer(43)));
    }

    #[test]
    fn test_comparisons() {
        assert!(run_value("1 < 2").equals(&Value::Boolean(true)));
        assert!(run_value("2 <= 2").equals(&Value::Boolean(true)));
        assert!(run_value("2 > 2").equals(&Value::Boolean(false)));
        assert!(run_value("2 >= 2.0").equals(&Value::Boolean(true)));
        assert!(run_value("\"abc\" < \"abd\"").equals(&Value::Boolean(true)));
        assert!(run_value("1 == 1.0").equals(&Value::Boolean(true)));
        assert!(run_value("1 != \"1\"").equals(&Value::Boolean(true)));
        assert!(run_value("1 == \"1\"").equals(&Value::Boolean(false)));
    }

    #[test]
    fn test_bitwise_operators() {
        assert!(run_value("6 & 3").equals(&Value::Integer(2)));
        assert!(run_value("6 | 1").equals(&Value::Integer(7)));
        assert!(run_value("6 ^ 3").equals(&Value::Integer(5)));
        assert!(run_value("true and false").equals(&Value::Boolean(false)));
        assert!(run_value("true or false").equals(&Value::Boolean(true)));
    }

    #[test]
    fn test_unary_operators() {
        assert!(run_value("-5").equals(&Value::Integer(-5)));
        assert!(run_value("!0").equals(&Value::Boolean(true)));
        assert!(run_value("!3").equals(&Value::Boolean(false)));
        assert!(run_value("not false").equals(&Value::Boolean(true)));
        assert!(run_value("~0").equals(&Value::Integer(-1)));
    }

    #[test]
    fn test_null_literal() {
        assert!(run_value("null").is_null());
    }
}
