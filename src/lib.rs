//! # Introduction
//!
//! `compound-assign` provides C-style compound assignment operators
//! (`+=`, `-=`, `*=`, `/=`) as first-class values operating on an explicit
//! binding environment. The caller owns the [`env::Environment`], names the
//! assignment target explicitly, and supplies an already-evaluated
//! right-hand value; the operator performs one synchronous
//! read-modify-write of the targeted binding.
//!
//! ## Application pipeline
//!
//! ```text
//! "out[3]" → Target → Environment read → Op → write-back
//! ```
//!
//! 1. [`target`] — parses the target text into a [`target::Target`]: a
//!    binding name plus a literal element-index chain. Anything outside
//!    that grammar is rejected, so an indexed target can never silently
//!    degrade to a write against its base name.
//! 2. [`env`] — the binding environment: a stack of lexical scopes holding
//!    tagged [`env::value::Value`]s, with lookup walking innermost to
//!    outermost and write-back landing in the scope that binds the name.
//! 3. [`ops`] — [`ops::CompoundOp`], the operator value, fixed to one
//!    [`ops::Op`] at creation; its arithmetic is checked and broadcasts
//!    elementwise over vectors.
//! 4. [`errors`] — the [`errors::EvalError`] taxonomy; every failure
//!    surfaces before anything is written.
//!
//! ## Example
//!
//! ```
//! use compound_assign::env::value::Value;
//! use compound_assign::env::Environment;
//! use compound_assign::ops::CompoundOp;
//!
//! let mut env = Environment::new();
//! env.define("x", Value::ints([1, 2, 3, 4, 5]));
//!
//! let add = CompoundOp::add();
//! add.apply(&mut env, "x", Value::Int(1)).unwrap();
//!
//! assert_eq!(env.get("x"), Some(&Value::ints([2, 3, 4, 5, 6])));
//! ```

pub mod env;
pub mod errors;
pub mod ops;
pub mod target;
