//! Runtime functions.

use std::fmt;
use std::rc::Rc;

use logo2_par::ast::Expr;

use crate::exit::EvalResult;
use crate::scope::ScopeRef;
use crate::value::Value;
use crate::Interpreter;

/// A host-registered callable: receives the evaluator and the evaluated
/// arguments, returns a value (null permitted).
pub type NativeFn = Rc<dyn Fn(&mut Interpreter, &[Value]) -> EvalResult>;

/// A callable function value.
pub struct Function {
    /// Number of parameters; invocation checks this strictly.
    pub arity: usize,
    pub kind: FunctionKind,
}

pub enum FunctionKind {
    /// Host-provided.
    Native(NativeFn),
    /// Declared in script.
    User(UserFunction),
}

/// A script-defined function body.
pub struct UserFunction {
    pub params: Vec<String>,
    pub body: Rc<Expr>,
    /// Scope lineage captured at definition time; `None` for named
    /// declarations, which resolve against the live scope chain.
    pub environment: Option<ScopeRef>,
}

impl Function {
    pub fn native(arity: usize, f: NativeFn) -> Self {
        Self {
            arity,
            kind: FunctionKind::Native(f),
        }
    }

    pub fn user(params: Vec<String>, body: Rc<Expr>, environment: Option<ScopeRef>) -> Self {
        Self {
            arity: params.len(),
            kind: FunctionKind::User(UserFunction {
                params,
                body,
                environment,
            }),
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            FunctionKind::Native(_) => "native",
            FunctionKind::User(_) => "user",
        };
        f.debug_struct("Function")
            .field("arity", &self.arity)
            .field("kind", &kind)
            .finish()
    }
}
