//! Runtime value representation
//!
//! This module defines the [`Value`] enum, the tagged values stored in an
//! [`Environment`](crate::env::Environment) binding.
//!
//! # Value Types
//!
//! - [`Value::Int`]: 64-bit signed integer
//! - [`Value::Float`]: 64-bit IEEE-754 float
//! - [`Value::Vector`]: ordered sequence of values, may nest
//!
//! Values are plain data: cloning is deep and there is no interior
//! mutability. Element access goes through [`Value::index`] and
//! [`Value::index_mut`], which report type and bounds failures instead of
//! panicking.

use crate::errors::EvalError;

/// Runtime values held by environment bindings
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Vector(Vec<Value>),
}

impl Value {
    /// Build an integer vector from anything yielding `i64`s
    pub fn ints<I: IntoIterator<Item = i64>>(values: I) -> Value {
        Value::Vector(values.into_iter().map(Value::Int).collect())
    }

    /// Build a float vector from anything yielding `f64`s
    pub fn floats<I: IntoIterator<Item = f64>>(values: I) -> Value {
        Value::Vector(values.into_iter().map(Value::Float).collect())
    }

    /// Name of this value's type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Vector(_) => "vector",
        }
    }

    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the float value, returns None if not a Float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Coerce a numeric scalar to f64, returns None for vectors
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            Value::Vector(_) => None,
        }
    }

    /// Get the elements, returns None if not a Vector
    pub fn as_vector(&self) -> Option<&[Value]> {
        match self {
            Value::Vector(elements) => Some(elements),
            _ => None,
        }
    }

    /// Borrow one element of a vector
    pub fn index(&self, idx: usize) -> Result<&Value, EvalError> {
        match self {
            Value::Vector(elements) => {
                elements.get(idx).ok_or(EvalError::IndexOutOfBounds {
                    index: idx,
                    len: elements.len(),
                })
            }
            _ => Err(EvalError::TypeError {
                expected: "vector".to_string(),
                got: self.type_name().to_string(),
            }),
        }
    }

    /// Mutably borrow one element of a vector
    pub fn index_mut(&mut self, idx: usize) -> Result<&mut Value, EvalError> {
        match self {
            Value::Vector(elements) => {
                let len = elements.len();
                elements.get_mut(idx).ok_or(EvalError::IndexOutOfBounds {
                    index: idx,
                    len,
                })
            }
            _ => Err(EvalError::TypeError {
                expected: "vector".to_string(),
                got: self.type_name().to_string(),
            }),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Vector(elements)
    }
}
