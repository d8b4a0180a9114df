//! Error types for target parsing and operator application
//!
//! This module defines [`EvalError`], which covers everything that can go
//! wrong between naming a target and storing the updated value:
//!
//! - Malformed targets ([`EvalError::InvalidTarget`])
//! - Resolution failures ([`EvalError::UnboundName`], [`EvalError::IndexOutOfBounds`])
//! - Arithmetic failures ([`EvalError::DivisionByZero`], [`EvalError::IntegerOverflow`])
//!
//! All errors are fatal for the operation that raised them and surface
//! immediately to the caller. A failed application never writes to the
//! environment.

use std::fmt;

/// Errors raised while parsing a target or applying a compound operator
#[derive(Debug, Clone)]
pub enum EvalError {
    /// Target expression is not a bare identifier or a literal index chain
    InvalidTarget { target: String, message: String },

    /// Target's base name has no binding on the scope chain
    UnboundName { name: String },

    /// Attempted to modify a const binding
    ConstModification { name: String },

    /// Operand or indexed value has the wrong type
    TypeError { expected: String, got: String },

    /// Element index past the end of a vector
    IndexOutOfBounds { index: usize, len: usize },

    /// Elementwise operation over vectors of different lengths
    LengthMismatch { left: usize, right: usize },

    /// Integer division by zero
    DivisionByZero,

    /// Integer overflow in arithmetic operation
    IntegerOverflow { operation: String },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InvalidTarget { target, message } => {
                write!(f, "Invalid target '{}': {}", target, message)
            }
            EvalError::UnboundName { name } => {
                write!(f, "Name '{}' is not bound in any scope", name)
            }
            EvalError::ConstModification { name } => {
                write!(f, "Attempted to modify const binding '{}'", name)
            }
            EvalError::TypeError { expected, got } => {
                write!(f, "Type error: expected {}, got {}", expected, got)
            }
            EvalError::IndexOutOfBounds { index, len } => {
                write!(
                    f,
                    "Index {} out of bounds for vector of length {}",
                    index, len
                )
            }
            EvalError::LengthMismatch { left, right } => {
                write!(
                    f,
                    "Vector length mismatch: {} elements vs {}",
                    left, right
                )
            }
            EvalError::DivisionByZero => {
                write!(f, "Division by zero")
            }
            EvalError::IntegerOverflow { operation } => {
                write!(f, "Integer overflow in operation: {}", operation)
            }
        }
    }
}

impl std::error::Error for EvalError {}
