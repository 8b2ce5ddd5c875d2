//! Semantic error types for the evaluator
//!
//! This module defines [`SemanticError`], which represents every problem found
//! while checking and executing a program (as opposed to lexical or syntax errors).
//!
//! Semantic errors are accumulated rather than fatal: the offending operation
//! yields a fallback value and evaluation continues. The one exception is
//! [`SemanticErrorKind::Critical`], which stops the run.

use crate::parser::ast::SourceLocation;
use std::fmt;

/// Category of a semantic error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticErrorKind {
    /// A name was read before any assignment to it
    UndefinedVariable,
    /// Operands or targets of the wrong type
    TypeMismatch,
    /// `/` with a zero divisor
    DivisionByZero,
    /// Array index outside `[0, len)`
    IndexOutOfBounds,
    /// `[size]` with a negative size
    NegativeArraySize,
    /// Array index that is not an integer
    NonIntegerIndex,
    /// A loop was interrupted by the iteration ceiling
    LoopLimitExceeded,
    /// `[size]` with a non-integer or oversized size
    InvalidArraySize,
    /// Integer overflow, non-finite float result, out-of-range literal
    ArithmeticFault,
    /// Internal fault; evaluation stops
    Critical,
}

impl SemanticErrorKind {
    /// Short title used when rendering diagnostics
    pub fn title(self) -> &'static str {
        match self {
            SemanticErrorKind::UndefinedVariable => "Undefined variable",
            SemanticErrorKind::TypeMismatch => "Type mismatch",
            SemanticErrorKind::DivisionByZero => "Division by zero",
            SemanticErrorKind::IndexOutOfBounds => "Index out of bounds",
            SemanticErrorKind::NegativeArraySize => "Negative array size",
            SemanticErrorKind::NonIntegerIndex => "Non-integer index",
            SemanticErrorKind::LoopLimitExceeded => "Loop limit exceeded",
            SemanticErrorKind::InvalidArraySize => "Invalid array size",
            SemanticErrorKind::ArithmeticFault => "Arithmetic fault",
            SemanticErrorKind::Critical => "Critical error",
        }
    }
}

impl fmt::Display for SemanticErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One semantic error at a source position
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
    pub location: SourceLocation,
    pub message: String,
}

impl SemanticError {
    pub fn new(kind: SemanticErrorKind, location: SourceLocation, message: impl Into<String>) -> Self {
        Self {
            kind,
            location,
            message: message.into(),
        }
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SemanticError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let error = SemanticError::new(
            SemanticErrorKind::DivisionByZero,
            SourceLocation::new(4),
            "Division by zero",
        );
        assert_eq!(error.to_string(), "Division by zero");
        assert_eq!(error.kind.title(), "Division by zero");
    }
}
