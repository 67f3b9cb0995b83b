//! Runtime values and their operations.
//!
//! [`Value`] is a tagged union; the tag never changes once constructed, and
//! mutating a variable replaces its value wholesale. Binary operations
//! dispatch on the pair of tags with integer/real promotion: the result is
//! real when either side is real, except that `**` of two integers stays
//! integral (for a non-negative exponent). Everything outside the defined
//! table is a `TypeMismatch`.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::error::{RuntimeError, RuntimeErrorKind};
use crate::function::Function;

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Str(String),
    Function(Rc<Function>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Value::Real(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// The integer payload, if this is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric payload widened to real, for integers and reals.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(*v as f64),
            Value::Real(v) => Some(*v),
            _ => None,
        }
    }

    /// Boolean coercion: booleans are themselves, numerics are true when
    /// non-zero. Anything else is a `TypeMismatch`.
    pub fn truthy(&self) -> Result<bool, RuntimeError> {
        match self {
            Value::Boolean(b) => Ok(*b),
            Value::Integer(v) => Ok(*v != 0),
            Value::Real(v) => Ok(*v != 0.0),
            _ => Err(RuntimeErrorKind::TypeMismatch.into()),
        }
    }

    // =========================================================================
    // Binary arithmetic
    // =========================================================================

    pub fn add(&self, other: &Value) -> Result<Value, RuntimeError> {
        use Value::*;
        match (self, other) {
            (Integer(a), Integer(b)) => Ok(Integer(a.wrapping_add(*b))),
            (Integer(a), Real(b)) => Ok(Real(*a as f64 + b)),
            (Real(a), Integer(b)) => Ok(Real(a + *b as f64)),
            (Real(a), Real(b)) => Ok(Real(a + b)),
            (Str(a), Str(b)) => Ok(Str(format!("{a}{b}"))),
            _ => Err(RuntimeErrorKind::TypeMismatch.into()),
        }
    }

    pub fn sub(&self, other: &Value) -> Result<Value, RuntimeError> {
        use Value::*;
        match (self, other) {
            (Integer(a), Integer(b)) => Ok(Integer(a.wrapping_sub(*b))),
            (Integer(a), Real(b)) => Ok(Real(*a as f64 - b)),
            (Real(a), Integer(b)) => Ok(Real(a - *b as f64)),
            (Real(a), Real(b)) => Ok(Real(a - b)),
            _ => Err(RuntimeErrorKind::TypeMismatch.into()),
        }
    }

    pub fn mul(&self, other: &Value) -> Result<Value, RuntimeError> {
        use Value::*;
        match (self, other) {
            (Integer(a), Integer(b)) => Ok(Integer(a.wrapping_mul(*b))),
            (Integer(a), Real(b)) => Ok(Real(*a as f64 * b)),
            (Real(a), Integer(b)) => Ok(Real(a * *b as f64)),
            (Real(a), Real(b)) => Ok(Real(a * b)),
            _ => Err(RuntimeErrorKind::TypeMismatch.into()),
        }
    }

    /// Division; a zero divisor (of either numeric tag) is an error.
    pub fn div(&self, other: &Value) -> Result<Value, RuntimeError> {
        use Value::*;
        if matches!(other, Integer(0)) || matches!(other, Real(r) if *r == 0.0) {
            return Err(RuntimeErrorKind::DivisionByZero.into());
        }
        match (self, other) {
            (Integer(a), Integer(b)) => Ok(Integer(a.wrapping_div(*b))),
            (Integer(a), Real(b)) => Ok(Real(*a as f64 / b)),
            (Real(a), Integer(b)) => Ok(Real(a / *b as f64)),
            (Real(a), Real(b)) => Ok(Real(a / b)),
            _ => Err(RuntimeErrorKind::TypeMismatch.into()),
        }
    }

    /// Modulo; defined on two integers only.
    pub fn rem(&self, other: &Value) -> Result<Value, RuntimeError> {
        use Value::*;
        match (self, other) {
            (Integer(_), Integer(0)) => Err(RuntimeErrorKind::DivisionByZero.into()),
            (Integer(a), Integer(b)) => Ok(Integer(a.wrapping_rem(*b))),
            _ => Err(RuntimeErrorKind::TypeMismatch.into()),
        }
    }

    /// Exponentiation. Two integers stay integral for a non-negative
    /// exponent; a negative exponent (or overflow) promotes to real.
    pub fn pow(&self, other: &Value) -> Result<Value, RuntimeError> {
        use Value::*;
        match (self, other) {
            (Integer(a), Integer(b)) => {
                if *b >= 0 {
                    match u32::try_from(*b).ok().and_then(|e| a.checked_pow(e)) {
                        Some(v) => Ok(Integer(v)),
                        None => Ok(Real((*a as f64).powf(*b as f64))),
                    }
                } else {
                    Ok(Real((*a as f64).powf(*b as f64)))
                }
            }
            (Integer(a), Real(b)) => Ok(Real((*a as f64).powf(*b))),
            (Real(a), Integer(b)) => Ok(Real(a.powf(*b as f64))),
            (Real(a), Real(b)) => Ok(Real(a.powf(*b))),
            _ => Err(RuntimeErrorKind::TypeMismatch.into()),
        }
    }

    // =========================================================================
    // Bitwise / logical
    // =========================================================================

    pub fn bit_and(&self, other: &Value) -> Result<Value, RuntimeError> {
        use Value::*;
        match (self, other) {
            (Integer(a), Integer(b)) => Ok(Integer(a & b)),
            (Boolean(a), Boolean(b)) => Ok(Boolean(a & b)),
            _ => Err(RuntimeErrorKind::TypeMismatch.into()),
        }
    }

    pub fn bit_or(&self, other: &Value) -> Result<Value, RuntimeError> {
        use Value::*;
        match (self, other) {
            (Integer(a), Integer(b)) => Ok(Integer(a | b)),
            (Boolean(a), Boolean(b)) => Ok(Boolean(a | b)),
            _ => Err(RuntimeErrorKind::TypeMismatch.into()),
        }
    }

    pub fn bit_xor(&self, other: &Value) -> Result<Value, RuntimeError> {
        use Value::*;
        match (self, other) {
            (Integer(a), Integer(b)) => Ok(Integer(a ^ b)),
            (Boolean(a), Boolean(b)) => Ok(Boolean(a ^ b)),
            _ => Err(RuntimeErrorKind::TypeMismatch.into()),
        }
    }

    // =========================================================================
    // Unary
    // =========================================================================

    /// Arithmetic negation; only numerics negate (booleans do not).
    pub fn neg(&self) -> Result<Value, RuntimeError> {
        match self {
            Value::Integer(v) => Ok(Value::Integer(v.wrapping_neg())),
            Value::Real(v) => Ok(Value::Real(-v)),
            _ => Err(RuntimeErrorKind::TypeMismatch.into()),
        }
    }

    /// Logical negation of the boolean coercion.
    pub fn not(&self) -> Result<Value, RuntimeError> {
        Ok(Value::Boolean(!self.truthy()?))
    }

    /// Bitwise complement of an integer, logical complement of a boolean.
    pub fn complement(&self) -> Result<Value, RuntimeError> {
        match self {
            Value::Integer(v) => Ok(Value::Integer(!v)),
            Value::Boolean(b) => Ok(Value::Boolean(!b)),
            _ => Err(RuntimeErrorKind::TypeMismatch.into()),
        }
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Equality after numeric promotion; values of incompatible tags are
    /// simply unequal.
    pub fn equals(&self, other: &Value) -> bool {
        use Value::*;
        match (self, other) {
            (Null, Null) => true,
            (Integer(a), Integer(b)) => a == b,
            (Integer(a), Real(b)) => (*a as f64) == *b,
            (Real(a), Integer(b)) => *a == (*b as f64),
            (Real(a), Real(b)) => a == b,
            (Boolean(a), Boolean(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Function(a), Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Ordering after numeric promotion; strings compare lexicographically.
    /// Incompatible tags (and NaN) are a `TypeMismatch`.
    pub fn compare(&self, other: &Value) -> Result<Ordering, RuntimeError> {
        use Value::*;
        let ordering = match (self, other) {
            (Integer(a), Integer(b)) => a.partial_cmp(b),
            (Integer(a), Real(b)) => (*a as f64).partial_cmp(b),
            (Real(a), Integer(b)) => a.partial_cmp(&(*b as f64)),
            (Real(a), Real(b)) => a.partial_cmp(b),
            (Str(a), Str(b)) => a.partial_cmp(b),
            _ => None,
        };
        ordering.ok_or_else(|| RuntimeErrorKind::TypeMismatch.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Real(v) => write!(f, "{v}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Function(func) => write!(f, "<fn/{}>", func.arity),
        }
    }
}
