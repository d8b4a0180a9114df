//! Assignment-target paths
//!
//! This module defines [`Target`], the addressable location a compound
//! operator writes through: a binding name plus zero or more literal
//! element indices.
//!
//! # Grammar
//!
//! ```text
//! target  →  ident ( '[' decimal ']' )*
//! ident   →  [A-Za-z_][A-Za-z0-9_]*
//! ```
//!
//! Only this grammar is accepted. Arbitrary left-hand-side expressions —
//! arithmetic, calls, identifiers used as indices — are rejected with
//! [`EvalError::InvalidTarget`] at parse time, so an indexed target can
//! never silently degrade to a write against its base name.

use crate::errors::EvalError;
use std::fmt;

/// An addressable location: a binding name plus an element index chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    name: String,
    path: Vec<usize>,
}

impl Target {
    /// Create a target naming a whole binding
    ///
    /// Fails with [`EvalError::InvalidTarget`] if `name` is not a bare
    /// identifier.
    pub fn variable(name: impl Into<String>) -> Result<Self, EvalError> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(EvalError::InvalidTarget {
                target: name.clone(),
                message: "expected a bare identifier".to_string(),
            });
        }
        Ok(Target {
            name,
            path: Vec::new(),
        })
    }

    /// Append one element-index step to the path
    pub fn index(mut self, idx: usize) -> Self {
        self.path.push(idx);
        self
    }

    /// Parse a target from source text: `ident` or `ident[3][0]...`
    ///
    /// Indices must be unsigned decimal literals. Surrounding ASCII
    /// whitespace is ignored; anything else outside the grammar fails
    /// with [`EvalError::InvalidTarget`].
    pub fn parse(src: &str) -> Result<Self, EvalError> {
        let s = src.trim();
        let invalid = |message: &str| EvalError::InvalidTarget {
            target: s.to_string(),
            message: message.to_string(),
        };

        let bytes = s.as_bytes();
        let mut pos = 0;

        // Identifier
        if pos >= bytes.len()
            || !(bytes[pos].is_ascii_alphabetic() || bytes[pos] == b'_')
        {
            return Err(invalid("expected an identifier"));
        }
        while pos < bytes.len()
            && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
        {
            pos += 1;
        }

        let mut target = Target {
            name: s[..pos].to_string(),
            path: Vec::new(),
        };

        // Zero or more '[' decimal ']' steps
        while pos < bytes.len() {
            if bytes[pos] != b'[' {
                return Err(invalid("unexpected character after identifier"));
            }
            pos += 1;

            let start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            if pos == start {
                return Err(invalid(
                    "expected an unsigned decimal literal index",
                ));
            }
            if pos >= bytes.len() || bytes[pos] != b']' {
                return Err(invalid("unterminated index, expected ']'"));
            }

            let idx = s[start..pos]
                .parse::<usize>()
                .map_err(|_| invalid("index literal out of range"))?;
            target.path.push(idx);
            pos += 1;
        }

        Ok(target)
    }

    /// Base binding name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element index chain, outermost first
    pub fn path(&self) -> &[usize] {
        &self.path
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for idx in &self.path {
            write!(f, "[{}]", idx)?;
        }
        Ok(())
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_identifier() {
        let target = Target::parse("x").unwrap();
        assert_eq!(target.name(), "x");
        assert!(target.path().is_empty());

        let target = Target::parse("  _total_2  ").unwrap();
        assert_eq!(target.name(), "_total_2");
    }

    #[test]
    fn test_index_chain() {
        let target = Target::parse("out[3]").unwrap();
        assert_eq!(target.name(), "out");
        assert_eq!(target.path(), &[3]);

        let target = Target::parse("grid[1][0][12]").unwrap();
        assert_eq!(target.path(), &[1, 0, 12]);
    }

    #[test]
    fn test_builder_matches_parser() {
        let built = Target::variable("out").unwrap().index(3);
        assert_eq!(built, Target::parse("out[3]").unwrap());
        assert_eq!(built.to_string(), "out[3]");
    }

    #[test]
    fn test_rejects_non_identifiers() {
        for bad in ["", "9lives", "a b", "x+1", "first(out)", "$x"] {
            let err = Target::parse(bad).unwrap_err();
            assert!(matches!(err, EvalError::InvalidTarget { .. }), "{:?}", bad);
        }
        assert!(Target::variable("out[1]").is_err());
    }

    #[test]
    fn test_rejects_bad_indices() {
        // Non-literal indices must fail loudly, never truncate to the base name
        for bad in ["out[i]", "out[]", "out[1", "out[1]y", "out[-1]", "out[1.5]"] {
            let err = Target::parse(bad).unwrap_err();
            assert!(matches!(err, EvalError::InvalidTarget { .. }), "{:?}", bad);
        }
    }
}
