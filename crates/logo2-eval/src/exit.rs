//! Non-local control flow.
//!
//! `return`, `break`, and `continue` are not errors; they are exceptional
//! control signals that ride the `Err` channel so `?` propagates them up
//! to the frame that consumes them: function calls unwrap [`Exit::Return`],
//! loops consume [`Exit::Break`] / [`Exit::Continue`]. Real runtime errors
//! and the host-requested quit travel the same way but are consumed by
//! nobody short of the driver.

use crate::error::{RuntimeError, RuntimeErrorKind};
use crate::value::Value;

/// Why evaluation of a node did not produce a value.
#[derive(Clone, Debug)]
pub enum Exit {
    /// `return` with its (possibly null) value; caught by the nearest
    /// function call.
    Return(Value),
    /// `break`; caught by the nearest loop.
    Break,
    /// `continue`; caught by the nearest loop.
    Continue,
    /// A runtime error; terminates the current top-level form.
    Error(RuntimeError),
    /// Host-requested application quit with an exit code; observed by the
    /// REPL.
    Quit(i32),
}

/// Result of evaluating a node.
pub type EvalResult = Result<Value, Exit>;

impl From<RuntimeError> for Exit {
    fn from(err: RuntimeError) -> Self {
        Exit::Error(err)
    }
}

impl From<RuntimeErrorKind> for Exit {
    fn from(kind: RuntimeErrorKind) -> Self {
        Exit::Error(RuntimeError::new(kind))
    }
}
