//! Expression evaluation implementation
//!
//! This module handles evaluation of every expression form:
//!
//! - Literals (numbers, booleans, `[size]` arrays)
//! - Variables and array element reads
//! - Assignment (delegated to `ops::assign`)
//! - Logical operators, which short-circuit
//! - Arithmetic and comparison (delegated to `ops::binary`)
//!
//! Failed operations report an error and yield a fallback value so checking
//! can continue past them.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::{SemanticError, SemanticErrorKind};
use crate::memory::value::Value;
use crate::parser::ast::*;

impl Interpreter {
    /// Evaluate an expression and return its value
    pub(crate) fn evaluate_expr(&mut self, expr: &AstNode) -> Result<Value, SemanticError> {
        self.enter(expr.location())?;
        let value = self.evaluate_node(expr);
        self.leave();
        value
    }

    fn evaluate_node(&mut self, expr: &AstNode) -> Result<Value, SemanticError> {
        match expr {
            AstNode::NumberLiteral { text, location } => Ok(self.evaluate_number(text, *location)),

            AstNode::BooleanLiteral { value, .. } => Ok(Value::Bool(*value)),

            AstNode::Identifier { name, location } => Ok(self.read_variable(name, *location)),

            AstNode::BinaryOp {
                left,
                op: BinOp::Assign,
                right,
                location,
            } => self.execute_assignment(left, right, *location),

            AstNode::BinaryOp { .. } => self.evaluate_chain(expr),

            AstNode::ArrayLiteral { size, location } => {
                let size = self.evaluate_expr(size)?;
                Ok(self.allocate_array(&size, *location))
            }

            AstNode::ArrayAccess {
                name,
                index,
                location,
            } => {
                let index = self.evaluate_expr(index)?;
                Ok(self.read_element(name, &index, *location))
            }

            AstNode::Block(_)
            | AstNode::If { .. }
            | AstNode::While { .. }
            | AstNode::For { .. }
            | AstNode::Comment { .. } => {
                self.execute_statement(expr)?;
                Ok(Value::default())
            }
        }
    }

    /// `Int` unless the literal has a decimal point
    fn evaluate_number(&mut self, text: &str, location: SourceLocation) -> Value {
        let parsed = if text.contains('.') {
            text.parse::<f64>().ok().map(Value::Float)
        } else {
            text.parse::<i64>().ok().map(Value::Int)
        };

        parsed.unwrap_or_else(|| {
            self.report(
                SemanticErrorKind::ArithmeticFault,
                location,
                format!("Number literal {} is out of range", text),
            );
            Value::default()
        })
    }

    fn read_variable(&mut self, name: &str, location: SourceLocation) -> Value {
        match self.symbols.value(name) {
            Some(value) => value.clone(),
            None => {
                self.report(
                    SemanticErrorKind::UndefinedVariable,
                    location,
                    format!("Variable '{}' is used before it is assigned", name),
                );
                Value::default()
            }
        }
    }

    /// Evaluate a chain of operators along its left spine.
    ///
    /// `1 + 2 + 3` nests to the left, so the spine is walked with a loop and
    /// only right operands recurse. A long flat chain therefore costs one
    /// nesting level.
    fn evaluate_chain(&mut self, expr: &AstNode) -> Result<Value, SemanticError> {
        let mut spine = Vec::new();
        let mut leftmost = expr;
        while let AstNode::BinaryOp {
            left,
            op,
            right,
            location,
        } = leftmost
        {
            if *op == BinOp::Assign {
                break;
            }
            spine.push((*op, right.as_ref(), *location));
            leftmost = left;
        }

        let mut acc = self.evaluate_expr(leftmost)?;

        for (op, right, location) in spine.into_iter().rev() {
            acc = match op {
                // `e`/`ou`: the right operand is only evaluated when it decides the result
                BinOp::And if !acc.is_truthy() => Value::Bool(false),
                BinOp::Or if acc.is_truthy() => Value::Bool(true),
                BinOp::And | BinOp::Or => Value::Bool(self.evaluate_expr(right)?.is_truthy()),
                _ => {
                    let right_val = self.evaluate_expr(right)?;
                    self.apply_binary(op, &acc, &right_val, location)
                }
            };
        }

        Ok(acc)
    }
}
