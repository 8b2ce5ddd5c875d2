// Execution engine for the teaching language

use crate::config::EvalOptions;
use crate::interpreter::errors::{SemanticError, SemanticErrorKind};
use crate::memory::symbols::SymbolTable;
use crate::parser::ast::{Block, SourceLocation};
use rustc_hash::FxHashSet;

/// Checks and executes a program in a single tree walk.
///
/// Semantic problems are recorded and evaluation continues with a fallback
/// value; only a [`SemanticErrorKind::Critical`] fault is returned as `Err`
/// and unwinds the whole run.
pub struct Interpreter {
    /// Global variables
    pub(crate) symbols: SymbolTable,

    /// Errors in the order they were first reported
    pub(crate) errors: Vec<SemanticError>,

    /// Undefined-variable (location, message) pairs already reported
    seen: FxHashSet<(SourceLocation, String)>,

    pub(crate) options: EvalOptions,

    /// Current statement/expression nesting
    depth: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_options(EvalOptions::default())
    }

    pub fn with_options(options: EvalOptions) -> Self {
        Interpreter {
            symbols: SymbolTable::new(),
            errors: Vec::new(),
            seen: FxHashSet::default(),
            options,
            depth: 0,
        }
    }

    /// Run the program from start to finish
    pub fn run(mut self, program: &Block) -> (Vec<SemanticError>, SymbolTable) {
        if let Err(fault) = self.execute_block(program) {
            self.errors.push(fault);
        }
        (self.errors, self.symbols)
    }

    /// Record an error.
    ///
    /// Undefined-variable reads are reported once per location and message;
    /// every other kind is reported each time it happens, so a loop that is
    /// interrupted on every pass of an outer loop shows up once per pass.
    pub(crate) fn report(
        &mut self,
        kind: SemanticErrorKind,
        location: SourceLocation,
        message: impl Into<String>,
    ) {
        let message = message.into();
        if kind == SemanticErrorKind::UndefinedVariable
            && !self.seen.insert((location, message.clone()))
        {
            return;
        }
        self.errors.push(SemanticError::new(kind, location, message));
    }

    /// Descend one nesting level, failing once `max_depth` is reached
    pub(crate) fn enter(&mut self, location: SourceLocation) -> Result<(), SemanticError> {
        if self.depth >= self.options.max_depth {
            return Err(SemanticError::new(
                SemanticErrorKind::Critical,
                location,
                format!(
                    "Program nesting exceeds {} levels; evaluation stopped",
                    self.options.max_depth
                ),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Check and execute `program` with default options.
pub fn run(program: &Block) -> (Vec<SemanticError>, SymbolTable) {
    Interpreter::new().run(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::value::Value;
    use crate::parser::lexer::Lexer;
    use crate::parser::parse::parse;

    fn run_source(source: &str) -> (Vec<SemanticError>, SymbolTable) {
        let (tokens, lex_errors) = Lexer::new(source).tokenize();
        assert!(lex_errors.is_empty());
        let (block, syntax_errors) = parse(tokens);
        assert!(syntax_errors.is_empty(), "{:?}", syntax_errors);
        run(&block)
    }

    #[test]
    fn test_for_loop_sum() {
        let (errors, symbols) =
            run_source("s = 0; para (i = 0; i < 5; i = i + 1) { s = s + i; }");
        assert!(errors.is_empty(), "{:?}", errors);
        assert_eq!(symbols.value("s"), Some(&Value::Int(10)));
        assert_eq!(symbols.value("i"), Some(&Value::Int(5)));
    }

    #[test]
    fn test_same_error_reported_once() {
        let (errors, symbols) =
            run_source("i = 0; enquanto i < 3 { y = nada; i = i + 1; }");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, SemanticErrorKind::UndefinedVariable);
        assert_eq!(symbols.value("y"), Some(&Value::Int(0)));
    }

    #[test]
    fn test_other_errors_reported_every_time() {
        let (errors, _) =
            run_source("i = 0; enquanto i < 3 { enquanto verdadeiro { } i = i + 1; }");
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.kind == SemanticErrorKind::LoopLimitExceeded));
    }

    #[test]
    fn test_nesting_limit_is_critical() {
        let source = format!("x = {}1{};", "1 + (".repeat(50), ")".repeat(50));
        let (tokens, _) = Lexer::new(&source).tokenize();
        let (block, _) = parse(tokens);
        let options = EvalOptions {
            max_depth: 10,
            ..EvalOptions::default()
        };
        let (errors, symbols) = Interpreter::with_options(options).run(&block);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, SemanticErrorKind::Critical);
        assert!(!symbols.contains("x"));
    }

    #[test]
    fn test_fresh_table_per_run() {
        let (tokens, _) = Lexer::new("x = 1;").tokenize();
        let (block, _) = parse(tokens);
        let (_, first) = run(&block);
        let (_, second) = run(&block);
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
    }
}
