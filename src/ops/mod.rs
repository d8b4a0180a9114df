//! Compound assignment operators
//!
//! This module provides the operator layer:
//! - [`Op`]: the four arithmetic operations a generated operator can carry
//! - [`CompoundOp`]: the operator itself, an immutable value created once
//!   and reused for the life of the program
//! - [`arith`]: checked, broadcasting arithmetic over [`Value`]s
//!
//! # Application Model
//!
//! `CompoundOp::apply(env, "x", rhs)` is the explicit-environment rendition
//! of `x += rhs`: it resolves the target in `env`, computes
//! `op(current, rhs)`, stores the result back through the target path, and
//! returns the stored value.

pub mod arith;

use crate::env::value::Value;
use crate::env::Environment;
use crate::errors::EvalError;
use crate::target::Target;
use std::fmt;

/// Arithmetic operation carried by a compound operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Compound-assignment spelling: `+=`, `-=`, `*=`, `/=`
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+=",
            Op::Sub => "-=",
            Op::Mul => "*=",
            Op::Div => "/=",
        }
    }

    /// Plain binary spelling, used in overflow diagnostics
    pub(crate) fn glyph(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A generated compound assignment operator
///
/// Fixed to one [`Op`] at creation time and stateless afterwards: applying
/// it never changes the operator, only the targeted binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundOp {
    op: Op,
}

impl CompoundOp {
    pub fn new(op: Op) -> Self {
        CompoundOp { op }
    }

    /// The `+=` operator
    pub fn add() -> Self {
        CompoundOp::new(Op::Add)
    }

    /// The `-=` operator
    pub fn sub() -> Self {
        CompoundOp::new(Op::Sub)
    }

    /// The `*=` operator
    pub fn mul() -> Self {
        CompoundOp::new(Op::Mul)
    }

    /// The `/=` operator
    pub fn div() -> Self {
        CompoundOp::new(Op::Div)
    }

    /// Operation this operator was created with
    pub fn op(&self) -> Op {
        self.op
    }

    /// Apply to a target given as source text (`"x"`, `"out[3]"`)
    ///
    /// Parses the target, then behaves like [`CompoundOp::apply_to`].
    pub fn apply(
        &self,
        env: &mut Environment,
        target: &str,
        rhs: Value,
    ) -> Result<Value, EvalError> {
        let target = Target::parse(target)?;
        self.apply_to(env, &target, rhs)
    }

    /// Apply to an already-built [`Target`]
    ///
    /// Performs one read-modify-write of the targeted binding and returns
    /// a clone of the stored value.
    pub fn apply_to(
        &self,
        env: &mut Environment,
        target: &Target,
        rhs: Value,
    ) -> Result<Value, EvalError> {
        env.apply_compound(self.op, target, &rhs)
    }
}

impl fmt::Display for CompoundOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.op.symbol())
    }
}
