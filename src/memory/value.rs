//! Runtime value representation
//!
//! This module defines the [`Value`] enum, which represents all possible runtime values
//! of the teaching language. Values are dynamically tagged; the tag of whatever was
//! last assigned to a name is what the symbol table reports as its type.
//!
//! # Value Types
//!
//! - [`Value::Int`]: 64-bit signed integer
//! - [`Value::Float`]: 64-bit float
//! - [`Value::Bool`]: boolean
//! - [`Value::Array`]: fixed-size, zero-filled array of scalars

use std::fmt;

/// Runtime values in the interpreter
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Array(Vec<Value>),
}

impl Default for Value {
    fn default() -> Self {
        Value::Int(0)
    }
}

/// Type tag of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Int,
    Float,
    Boolean,
    Array,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Boolean => "boolean",
            ValueType::Array => "array",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Bool(_) => ValueType::Boolean,
            Value::Array(_) => ValueType::Array,
        }
    }

    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view of a scalar: bools count as 0/1, ints widen to float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Array(_) => None,
        }
    }

    /// Integer view of an int or bool
    pub fn as_integral(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Float(_) | Value::Array(_) => None,
        }
    }

    /// Truthiness: nonzero numbers, the bool itself, non-empty arrays
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(n) => *n != 0,
            Value::Float(x) => *x != 0.0,
            Value::Bool(b) => *b,
            Value::Array(items) => !items.is_empty(),
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            // `{:?}` keeps the trailing `.0` on integral floats
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(Value::Int(3).is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(!Value::Float(0.0).is_truthy());
        assert!(Value::Float(-0.5).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Array(Vec::new()).is_truthy());
        assert!(Value::Array(vec![Value::Int(0)]).is_truthy());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(-4).to_string(), "-4");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::Float(0.25).to_string(), "0.25");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(
            Value::Array(vec![Value::Int(0), Value::Int(7)]).to_string(),
            "[0, 7]"
        );
    }

    #[test]
    fn test_numeric_views() {
        assert_eq!(Value::Bool(true).as_f64(), Some(1.0));
        assert_eq!(Value::Bool(true).as_integral(), Some(1));
        assert_eq!(Value::Float(1.5).as_integral(), None);
        assert_eq!(Value::Array(Vec::new()).as_f64(), None);
        assert_eq!(Value::Float(1.0).value_type(), ValueType::Float);
    }
}
