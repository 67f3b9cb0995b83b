//! Runtime error types.

use thiserror::Error;

/// Named runtime error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    CannotAssignConst,
    TypeMismatch,
    ArgumentCountMismatch,
    UndefinedFunction,
    DivisionByZero,
    UndefinedOperator,
    UndefinedSymbol,
    NotCallable,
}

/// A runtime error; surfaces immediately and terminates evaluation of the
/// current top-level form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("Runtime error: {kind:?}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind) -> Self {
        Self { kind }
    }
}

impl From<RuntimeErrorKind> for RuntimeError {
    fn from(kind: RuntimeErrorKind) -> Self {
        Self { kind }
    }
}
