// End-to-end evaluation through the public API

use ensina::interpreter::errors::{SemanticError, SemanticErrorKind};
use ensina::memory::symbols::SymbolTable;
use ensina::memory::value::Value;

fn run_source(source: &str) -> (Vec<SemanticError>, SymbolTable) {
    let (tokens, lex_errors) = ensina::analyze(source);
    assert!(lex_errors.is_empty(), "Lexing failed: {:?}", lex_errors);
    let (ast, syntax_errors) = ensina::parse(tokens);
    assert!(syntax_errors.is_empty(), "Parsing failed: {:?}", syntax_errors);
    ensina::run(&ast)
}

fn kinds(errors: &[SemanticError]) -> Vec<SemanticErrorKind> {
    errors.iter().map(|e| e.kind).collect()
}

#[test]
fn test_for_loop_sum() {
    let (errors, symbols) = run_source("s = 0; para (i = 0; i < 5; i = i + 1) { s = s + i; }");
    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(symbols.value("s"), Some(&Value::Int(10)));
    assert_eq!(symbols.value("i"), Some(&Value::Int(5)));
}

#[test]
fn test_division_by_zero_reported_once() {
    let (errors, symbols) = run_source("x = 10 / 0;");
    assert_eq!(kinds(&errors), vec![SemanticErrorKind::DivisionByZero]);
    assert_eq!(symbols.value("x"), Some(&Value::Int(0)));
}

#[test]
fn test_undefined_variable_inside_loop_reported_once() {
    let (errors, symbols) = run_source("i = 0; enquanto i < 3 { y = z; i = i + 1; }");
    assert_eq!(kinds(&errors), vec![SemanticErrorKind::UndefinedVariable]);
    assert_eq!(symbols.value("i"), Some(&Value::Int(3)));
}

#[test]
fn test_division_inside_loop_reported_per_iteration() {
    let (errors, _) = run_source("i = 0; enquanto i < 3 { y = 1 / 0; i = i + 1; }");
    assert_eq!(kinds(&errors), vec![SemanticErrorKind::DivisionByZero; 3]);
}

#[test]
fn test_division_is_true_division() {
    let (errors, symbols) = run_source("x = 7 / 2;");
    assert!(errors.is_empty());
    assert_eq!(symbols.value("x"), Some(&Value::Float(3.5)));
}

#[test]
fn test_array_out_of_bounds_yields_zero() {
    let (errors, symbols) = run_source("a = [3]; y = a[5];");
    assert_eq!(kinds(&errors), vec![SemanticErrorKind::IndexOutOfBounds]);
    assert_eq!(symbols.value("y"), Some(&Value::Int(0)));
}

#[test]
fn test_array_element_write_then_read() {
    let (errors, symbols) = run_source("a = [2]; a[1] = 7; y = a[1];");
    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(symbols.value("y"), Some(&Value::Int(7)));
    assert_eq!(
        symbols.value("a"),
        Some(&Value::Array(vec![Value::Int(0), Value::Int(7)]))
    );
}

#[test]
fn test_negative_array_size() {
    let (errors, _) = run_source("n = 0 - 2; a = [n];");
    assert_eq!(kinds(&errors), vec![SemanticErrorKind::NegativeArraySize]);
}

#[test]
fn test_short_circuit_skips_undefined_operand() {
    let (errors, symbols) = run_source("y = falso e x; z = verdadeiro ou x;");
    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(symbols.value("y"), Some(&Value::Bool(false)));
    assert_eq!(symbols.value("z"), Some(&Value::Bool(true)));
}

#[test]
fn test_undefined_variable_is_reported() {
    let (errors, symbols) = run_source("y = x + 1;");
    assert_eq!(kinds(&errors), vec![SemanticErrorKind::UndefinedVariable]);
    assert_eq!(errors[0].message, "Variable 'x' is used before it is assigned");
    assert_eq!(symbols.value("y"), Some(&Value::Int(1)));
}

#[test]
fn test_infinite_loop_interrupted_and_execution_resumes() {
    let (errors, symbols) = run_source("n = 0; enquanto verdadeiro { n = n + 1; } z = 5;");
    assert_eq!(kinds(&errors), vec![SemanticErrorKind::LoopLimitExceeded]);
    assert_eq!(symbols.value("n"), Some(&Value::Int(1000)));
    assert_eq!(symbols.value("z"), Some(&Value::Int(5)));
}

#[test]
fn test_mixed_types_promote_with_warning() {
    let (errors, symbols) = run_source("x = 1 + 2.5;");
    assert_eq!(kinds(&errors), vec![SemanticErrorKind::TypeMismatch]);
    assert_eq!(symbols.value("x"), Some(&Value::Float(3.5)));
}

#[test]
fn test_if_else_branches() {
    let (errors, symbols) = run_source("x = 3; se x > 2 entao { y = 1; } senao { y = 2; }");
    assert!(errors.is_empty());
    assert_eq!(symbols.value("y"), Some(&Value::Int(1)));
}

#[test]
fn test_symbol_table_lists_in_assignment_order() {
    let (_, symbols) = run_source("b = 1; a = 2.0; c = verdadeiro;");
    let names: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
    let listing = symbols.to_string();
    assert!(listing.contains("float"));
    assert!(listing.contains("boolean"));
}
