//! Checked, broadcasting arithmetic over values
//!
//! Scalar integer arithmetic uses the `checked_*` family and reports
//! [`EvalError::IntegerOverflow`]; integer division checks for a zero
//! divisor first. Mixing an integer with a float promotes both operands to
//! `f64`, where division follows IEEE-754 with no zero check.
//!
//! Vectors broadcast: a scalar on either side maps across every element
//! (recursing into nested vectors), and two vectors combine pairwise with
//! their lengths required to match exactly — no recycling.

use super::Op;
use crate::env::value::Value;
use crate::errors::EvalError;

impl Op {
    /// Apply this operation to two values
    pub fn apply(&self, left: &Value, right: &Value) -> Result<Value, EvalError> {
        match (left, right) {
            (Value::Vector(a), Value::Vector(b)) => {
                if a.len() != b.len() {
                    return Err(EvalError::LengthMismatch {
                        left: a.len(),
                        right: b.len(),
                    });
                }
                a.iter()
                    .zip(b)
                    .map(|(x, y)| self.apply(x, y))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Vector)
            }

            (Value::Vector(a), scalar) => a
                .iter()
                .map(|x| self.apply(x, scalar))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Vector),

            (scalar, Value::Vector(b)) => b
                .iter()
                .map(|y| self.apply(scalar, y))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Vector),

            (Value::Int(a), Value::Int(b)) => self.checked_int(*a, *b),

            // Remaining scalar pairs involve at least one float
            _ => match (left.as_f64(), right.as_f64()) {
                (Some(a), Some(b)) => Ok(Value::Float(self.float_op(a, b))),
                _ => Err(EvalError::TypeError {
                    expected: "numeric scalar".to_string(),
                    got: format!("{} {} {}", left.type_name(), self.glyph(), right.type_name()),
                }),
            },
        }
    }

    fn checked_int(&self, a: i64, b: i64) -> Result<Value, EvalError> {
        let result = match self {
            Op::Add => a.checked_add(b),
            Op::Sub => a.checked_sub(b),
            Op::Mul => a.checked_mul(b),
            Op::Div => {
                if b == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                a.checked_div(b)
            }
        };

        result
            .ok_or_else(|| EvalError::IntegerOverflow {
                operation: format!("{} {} {}", a, self.glyph(), b),
            })
            .map(Value::Int)
    }

    fn float_op(&self, a: f64, b: f64) -> f64 {
        match self {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
            Op::Div => a / b,
        }
    }
}
