use crate::interpreter::constants::MAX_ARRAY_SIZE;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::SemanticErrorKind;
use crate::memory::value::Value;
use crate::parser::ast::SourceLocation;

impl Interpreter {
    /// Resolve `name[index]` to a checked slot, reporting the first violation.
    ///
    /// `name` must hold an array and `index` must be an integer in `[0, len)`.
    pub(crate) fn resolve_element(
        &mut self,
        name: &str,
        index: &Value,
        location: SourceLocation,
    ) -> Option<usize> {
        let len = match self.symbols.value(name) {
            Some(Value::Array(items)) => items.len(),
            Some(other) => {
                let message = format!("'{}' holds a {} value, not an array", name, other.value_type());
                self.report(SemanticErrorKind::TypeMismatch, location, message);
                return None;
            }
            None => {
                self.report(
                    SemanticErrorKind::UndefinedVariable,
                    location,
                    format!("Array '{}' is used before it is assigned", name),
                );
                return None;
            }
        };

        let Some(position) = index.as_int() else {
            self.report(
                SemanticErrorKind::NonIntegerIndex,
                location,
                format!(
                    "Index into '{}' must be an integer, got {}",
                    name,
                    index.value_type()
                ),
            );
            return None;
        };

        match usize::try_from(position) {
            Ok(slot) if slot < len => Some(slot),
            _ => {
                self.report(
                    SemanticErrorKind::IndexOutOfBounds,
                    location,
                    format!(
                        "Index {} is out of bounds for '{}' of size {}",
                        position, name, len
                    ),
                );
                None
            }
        }
    }

    /// `name[index]` as an rvalue; 0 on any violation
    pub(crate) fn read_element(
        &mut self,
        name: &str,
        index: &Value,
        location: SourceLocation,
    ) -> Value {
        let Some(slot) = self.resolve_element(name, index, location) else {
            return Value::default();
        };

        match self.symbols.value(name) {
            Some(Value::Array(items)) => items.get(slot).cloned().unwrap_or_default(),
            _ => Value::default(),
        }
    }

    /// `[size]`: a zero-filled integer array; empty on an invalid size
    pub(crate) fn allocate_array(&mut self, size: &Value, location: SourceLocation) -> Value {
        let len = match size {
            Value::Int(n) if *n < 0 => {
                self.report(
                    SemanticErrorKind::NegativeArraySize,
                    location,
                    format!("Array size cannot be negative, got {}", n),
                );
                return Value::Array(Vec::new());
            }
            Value::Int(n) if *n > MAX_ARRAY_SIZE => {
                self.report(
                    SemanticErrorKind::InvalidArraySize,
                    location,
                    format!("Array size {} exceeds the limit of {}", n, MAX_ARRAY_SIZE),
                );
                return Value::Array(Vec::new());
            }
            Value::Int(n) => *n as usize,
            other => {
                self.report(
                    SemanticErrorKind::InvalidArraySize,
                    location,
                    format!("Array size must be an integer, got {}", other.value_type()),
                );
                return Value::Array(Vec::new());
            }
        };

        Value::Array(vec![Value::Int(0); len])
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::engine::run;
    use crate::interpreter::errors::{SemanticError, SemanticErrorKind};
    use crate::memory::symbols::SymbolTable;
    use crate::memory::value::Value;
    use crate::parser::lexer::Lexer;
    use crate::parser::parse::parse;

    fn run_source(source: &str) -> (Vec<SemanticError>, SymbolTable) {
        let (tokens, _) = Lexer::new(source).tokenize();
        let (block, syntax_errors) = parse(tokens);
        assert!(syntax_errors.is_empty(), "{:?}", syntax_errors);
        run(&block)
    }

    fn kinds(errors: &[SemanticError]) -> Vec<SemanticErrorKind> {
        errors.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_array_literal_zero_filled() {
        let (errors, symbols) = run_source("a = [3];");
        assert!(errors.is_empty());
        assert_eq!(symbols.value("a"), Some(&Value::Array(vec![Value::Int(0); 3])));
    }

    #[test]
    fn test_out_of_bounds_read() {
        let (errors, symbols) = run_source("a = [3]; y = a[5];");
        assert_eq!(kinds(&errors), vec![SemanticErrorKind::IndexOutOfBounds]);
        assert_eq!(symbols.value("y"), Some(&Value::Int(0)));
    }

    #[test]
    fn test_negative_index() {
        let (errors, _) = run_source("a = [3]; y = a[0 - 1];");
        assert_eq!(kinds(&errors), vec![SemanticErrorKind::IndexOutOfBounds]);
    }

    #[test]
    fn test_non_integer_index() {
        let (errors, symbols) = run_source("a = [3]; y = a[1.0];");
        assert_eq!(kinds(&errors), vec![SemanticErrorKind::NonIntegerIndex]);
        assert_eq!(symbols.value("y"), Some(&Value::Int(0)));
    }

    #[test]
    fn test_read_from_non_array() {
        let (errors, _) = run_source("a = 1; y = a[0];");
        assert_eq!(kinds(&errors), vec![SemanticErrorKind::TypeMismatch]);

        let (errors, _) = run_source("y = b[0];");
        assert_eq!(kinds(&errors), vec![SemanticErrorKind::UndefinedVariable]);
    }

    #[test]
    fn test_invalid_sizes() {
        let (errors, symbols) = run_source("a = [0 - 2];");
        assert_eq!(kinds(&errors), vec![SemanticErrorKind::NegativeArraySize]);
        assert_eq!(symbols.value("a"), Some(&Value::Array(Vec::new())));

        let (errors, _) = run_source("a = [2.5];");
        assert_eq!(kinds(&errors), vec![SemanticErrorKind::InvalidArraySize]);

        let (errors, _) = run_source("a = [10000000000];");
        assert_eq!(kinds(&errors), vec![SemanticErrorKind::InvalidArraySize]);
    }
}
