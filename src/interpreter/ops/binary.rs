//! Arithmetic and comparison operators
//!
//! Operands of different scalar types are reported as a type mismatch but the
//! operation still runs after promotion (bool → 0/1, int → float). Array
//! operands are rejected outright.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::SemanticErrorKind;
use crate::memory::value::Value;
use crate::parser::ast::{BinOp, SourceLocation};
use std::cmp::Ordering;

impl Interpreter {
    /// Apply a non-logical, non-assignment operator to two evaluated operands
    pub(crate) fn apply_binary(
        &mut self,
        op: BinOp,
        left: &Value,
        right: &Value,
        location: SourceLocation,
    ) -> Value {
        if left.is_array() || right.is_array() {
            self.report(
                SemanticErrorKind::TypeMismatch,
                location,
                format!("Operator '{}' cannot be applied to an array", op),
            );
            return if op.is_comparison() {
                Value::Bool(false)
            } else {
                Value::default()
            };
        }

        let (left_type, right_type) = (left.value_type(), right.value_type());
        if left_type != right_type {
            self.report(
                SemanticErrorKind::TypeMismatch,
                location,
                format!(
                    "Operator '{}' mixes {} and {} operands",
                    op, left_type, right_type
                ),
            );
        }

        if op.is_comparison() {
            return Value::Bool(Self::compare_values(op, left, right));
        }

        let result = match op {
            BinOp::Div => self.divide_values(left, right, location),
            BinOp::Pow => Self::power_values(left, right),
            _ => Self::arithmetic_values(op, left, right),
        };

        match result {
            Some(value) => value,
            None => {
                self.report(
                    SemanticErrorKind::ArithmeticFault,
                    location,
                    format!("Arithmetic fault in '{}': result out of range", op),
                );
                Value::default()
            }
        }
    }

    /// Compare as integers when both sides are int/bool, as floats otherwise
    #[inline]
    fn compare_values(op: BinOp, left: &Value, right: &Value) -> bool {
        let ordering = match (left.as_integral(), right.as_integral()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => match (left.as_f64(), right.as_f64()) {
                (Some(a), Some(b)) => a.partial_cmp(&b),
                _ => None,
            },
        };

        // NaN compares unequal to everything
        let Some(ordering) = ordering else {
            return op == BinOp::Ne;
        };

        match op {
            BinOp::Eq => ordering == Ordering::Equal,
            BinOp::Ne => ordering != Ordering::Equal,
            BinOp::Lt => ordering == Ordering::Less,
            BinOp::Le => ordering != Ordering::Greater,
            BinOp::Gt => ordering == Ordering::Greater,
            BinOp::Ge => ordering != Ordering::Less,
            _ => false,
        }
    }

    /// `+ - *`: checked on integers, promoted to float otherwise
    #[inline]
    fn arithmetic_values(op: BinOp, left: &Value, right: &Value) -> Option<Value> {
        if let (Some(a), Some(b)) = (left.as_integral(), right.as_integral()) {
            let result = match op {
                BinOp::Add => a.checked_add(b),
                BinOp::Sub => a.checked_sub(b),
                BinOp::Mul => a.checked_mul(b),
                _ => None,
            };
            return result.map(Value::Int);
        }

        let (a, b) = (left.as_f64()?, right.as_f64()?);
        let result = match op {
            BinOp::Add => a + b,
            BinOp::Sub => a - b,
            BinOp::Mul => a * b,
            _ => return None,
        };
        finite(result)
    }

    /// True division; always a float
    fn divide_values(
        &mut self,
        left: &Value,
        right: &Value,
        location: SourceLocation,
    ) -> Option<Value> {
        let (a, b) = (left.as_f64()?, right.as_f64()?);
        if b == 0.0 {
            self.report(SemanticErrorKind::DivisionByZero, location, "Division by zero");
            return Some(Value::default());
        }
        finite(a / b)
    }

    /// `**`: integral for int base with a non-negative int exponent
    fn power_values(left: &Value, right: &Value) -> Option<Value> {
        if let (Some(base), Some(exp)) = (left.as_integral(), right.as_integral()) {
            if exp >= 0 {
                let exp = u32::try_from(exp).ok()?;
                return base.checked_pow(exp).map(Value::Int);
            }
        }

        let (a, b) = (left.as_f64()?, right.as_f64()?);
        finite(a.powf(b))
    }
}

fn finite(result: f64) -> Option<Value> {
    result.is_finite().then_some(Value::Float(result))
}
