//! Assignment execution
//!
//! The right-hand side is always evaluated first. Scalar targets create or
//! overwrite a symbol; element targets write in place after the same checks
//! an element read performs, and write nothing when a check fails.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::{SemanticError, SemanticErrorKind};
use crate::memory::value::Value;
use crate::parser::ast::*;

impl Interpreter {
    pub(crate) fn execute_assignment(
        &mut self,
        target: &AstNode,
        value_expr: &AstNode,
        location: SourceLocation,
    ) -> Result<Value, SemanticError> {
        let value = self.evaluate_expr(value_expr)?;

        match target {
            AstNode::Identifier { name, .. } => {
                self.symbols.set(name, value.clone());
                Ok(value)
            }
            AstNode::ArrayAccess {
                name,
                index,
                location: target_location,
            } => {
                let index = self.evaluate_expr(index)?;
                Ok(self.store_element(name, &index, value, *target_location))
            }
            _ => Err(SemanticError::new(
                SemanticErrorKind::Critical,
                location,
                "Assignment target must be a variable or an array element",
            )),
        }
    }

    fn store_element(
        &mut self,
        name: &str,
        index: &Value,
        value: Value,
        location: SourceLocation,
    ) -> Value {
        let Some(slot) = self.resolve_element(name, index, location) else {
            return Value::default();
        };

        if value.is_array() {
            self.report(
                SemanticErrorKind::TypeMismatch,
                location,
                format!("Cannot store an array inside array '{}'", name),
            );
            return Value::default();
        }

        if let Some(Value::Array(items)) = self.symbols.get_mut(name).map(|s| &mut s.value) {
            if let Some(element) = items.get_mut(slot) {
                *element = value.clone();
            }
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::engine::run;
    use crate::interpreter::errors::{SemanticError, SemanticErrorKind};
    use crate::memory::symbols::SymbolTable;
    use crate::memory::value::{Value, ValueType};
    use crate::parser::lexer::Lexer;
    use crate::parser::parse::parse;

    fn run_source(source: &str) -> (Vec<SemanticError>, SymbolTable) {
        let (tokens, _) = Lexer::new(source).tokenize();
        let (block, syntax_errors) = parse(tokens);
        assert!(syntax_errors.is_empty(), "{:?}", syntax_errors);
        run(&block)
    }

    #[test]
    fn test_element_assignment_roundtrip() {
        let (errors, symbols) = run_source("a = [3]; a[1] = 7; z = a[1];");
        assert!(errors.is_empty(), "{:?}", errors);
        assert_eq!(symbols.value("z"), Some(&Value::Int(7)));
        assert_eq!(
            symbols.value("a"),
            Some(&Value::Array(vec![Value::Int(0), Value::Int(7), Value::Int(0)]))
        );
    }

    #[test]
    fn test_out_of_bounds_write_changes_nothing() {
        let (errors, symbols) = run_source("a = [2]; a[2] = 5;");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, SemanticErrorKind::IndexOutOfBounds);
        assert_eq!(symbols.value("a"), Some(&Value::Array(vec![Value::Int(0); 2])));
    }

    #[test]
    fn test_nested_array_rejected() {
        let (errors, symbols) = run_source("a = [2]; a[0] = [3];");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, SemanticErrorKind::TypeMismatch);
        assert_eq!(symbols.value("a"), Some(&Value::Array(vec![Value::Int(0); 2])));
    }

    #[test]
    fn test_reassignment_changes_type() {
        let (errors, symbols) = run_source("x = 1; x = 2.5; x = verdadeiro;");
        assert!(errors.is_empty());
        assert_eq!(symbols.get("x").map(|s| s.value_type), Some(ValueType::Boolean));
    }

    #[test]
    fn test_self_reference_before_assignment() {
        let (errors, symbols) = run_source("x = x + 1;");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, SemanticErrorKind::UndefinedVariable);
        assert_eq!(symbols.value("x"), Some(&Value::Int(1)));
    }
}
