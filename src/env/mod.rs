//! Binding environment
//!
//! This module provides the environment a compound operator reads from and
//! writes back into:
//! - [`value`]: tagged runtime values (Int, Float, Vector)
//! - [`Environment`]: a stack of lexical scopes mapping names to bindings
//!
//! # Lookup and write-back
//!
//! Name resolution walks the scope stack innermost to outermost and stops
//! at the first scope that binds the name. A compound application writes
//! back to that same binding, so an operator applied inside a nested scope
//! updates the enclosing scope's binding unless the name is shadowed.
//!
//! # Read-modify-write
//!
//! [`Environment::apply_compound`] is the single mutation primitive: it
//! resolves the target path, computes the new value, and only then stores
//! it. Any failure along the way leaves the environment untouched.

pub mod value;

use crate::errors::EvalError;
use crate::ops::Op;
use crate::target::Target;
use rustc_hash::FxHashMap;
use value::Value;

/// A name-to-value binding, optionally const
#[derive(Debug, Clone)]
struct Binding {
    value: Value,
    is_const: bool,
}

/// One lexical scope
#[derive(Debug, Clone, Default)]
struct Scope {
    bindings: FxHashMap<String, Binding>,
}

/// A stack of lexical scopes
///
/// Created with a single global scope, which is never popped.
#[derive(Debug, Clone)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::default()],
        }
    }

    /// Enter a new innermost scope
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    /// Exit the innermost scope, dropping its bindings
    ///
    /// The global scope stays in place.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Number of scopes currently on the stack
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Bind a name in the innermost scope, replacing any binding there
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bind(name.into(), value, false);
    }

    /// Bind a const name in the innermost scope
    ///
    /// Compound application against a const binding fails with
    /// [`EvalError::ConstModification`].
    pub fn define_const(&mut self, name: impl Into<String>, value: Value) {
        self.bind(name.into(), value, true);
    }

    fn bind(&mut self, name: String, value: Value, is_const: bool) {
        // new() guarantees at least the global scope
        let scope = self.scopes.last_mut().unwrap();
        scope.bindings.insert(name, Binding { value, is_const });
    }

    /// Look up a name, innermost scope first
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.binding(name).map(|b| &b.value)
    }

    /// Resolve a full target path to the value it addresses
    pub fn read(&self, target: &Target) -> Result<&Value, EvalError> {
        let binding = self.binding(target.name()).ok_or_else(|| {
            EvalError::UnboundName {
                name: target.name().to_string(),
            }
        })?;

        let mut value = &binding.value;
        for &idx in target.path() {
            value = value.index(idx)?;
        }
        Ok(value)
    }

    /// Apply `op` to the value at `target` and store the result back
    /// through the same path
    ///
    /// Returns a clone of the newly stored value. On error nothing is
    /// written.
    pub fn apply_compound(
        &mut self,
        op: Op,
        target: &Target,
        rhs: &Value,
    ) -> Result<Value, EvalError> {
        let binding = self.binding(target.name()).ok_or_else(|| {
            EvalError::UnboundName {
                name: target.name().to_string(),
            }
        })?;
        if binding.is_const {
            return Err(EvalError::ConstModification {
                name: target.name().to_string(),
            });
        }

        let current = self.read(target)?;
        let next = op.apply(current, rhs)?;

        let slot = self.resolve_mut(target)?;
        *slot = next.clone();
        Ok(next)
    }

    fn binding(&self, name: &str) -> Option<&Binding> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.bindings.get(name))
    }

    fn binding_mut(&mut self, name: &str) -> Option<&mut Binding> {
        self.scopes
            .iter_mut()
            .rev()
            .find_map(|scope| scope.bindings.get_mut(name))
    }

    /// Mutably resolve a target path, in the scope where its base name
    /// is bound
    fn resolve_mut(&mut self, target: &Target) -> Result<&mut Value, EvalError> {
        let binding = self.binding_mut(target.name()).ok_or_else(|| {
            EvalError::UnboundName {
                name: target.name().to_string(),
            }
        })?;

        let mut value = &mut binding.value;
        for &idx in target.path() {
            value = value.index_mut(idx)?;
        }
        Ok(value)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
