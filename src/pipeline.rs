//! Staged compile driver
//!
//! ```text
//! Source → Lexer → Parser → AST → Evaluator → Symbol table
//!                            └──→ Translators (tree, postfix, Python)
//! ```
//!
//! [`compile`] runs the stages in order and stops at the first one that
//! reports errors. Everything a front end shows is collected into one
//! [`CompileReport`]; the renderings of a partial AST are kept even when
//! parsing failed so the user can see how far the parser got.

use crate::config::Options;
use crate::diagnostics::{self, LineIndex};
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::SemanticError;
use crate::memory::symbols::SymbolTable;
use crate::parser::ast::{Block, SourceLocation};
use crate::parser::lexer::{format_tokens, LexError, Lexer, Token};
use crate::parser::parse::{parse, SyntaxError};
use crate::translator::{render_tree, to_generated_source, to_postfix_trace};
use std::fmt;

/// Pipeline stage that reported errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lexical,
    Syntax,
    Semantic,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Lexical => "lexical analysis",
            Stage::Syntax => "parsing",
            Stage::Semantic => "semantic analysis",
        };
        f.write_str(name)
    }
}

/// Everything produced by one [`compile`] call
#[derive(Debug, Clone, Default)]
pub struct CompileReport {
    pub tokens: Vec<Token>,
    pub lex_errors: Vec<LexError>,
    /// Lexical errors, already coalesced per line
    pub lexical_errors: Vec<String>,
    pub ast: Option<Block>,
    pub syntax_errors: Vec<SyntaxError>,
    pub semantic_errors: Vec<SemanticError>,
    pub symbols: Option<SymbolTable>,
    pub tree: String,
    pub postfix: String,
    pub python: String,
    /// First stage that reported errors, if any
    pub failed_stage: Option<Stage>,
    diagnostics: Vec<String>,
}

impl CompileReport {
    pub fn succeeded(&self) -> bool {
        self.failed_stage.is_none()
    }

    /// Every rendered error message, in stage order
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Positions of every reported error, in stage order
    pub fn error_locations(&self) -> Vec<SourceLocation> {
        self.lex_errors
            .iter()
            .map(|e| e.location)
            .chain(self.syntax_errors.iter().map(|e| e.location))
            .chain(self.semantic_errors.iter().map(|e| e.location))
            .collect()
    }

    pub fn token_listing(&self) -> String {
        format_tokens(&self.tokens)
    }

    pub fn symbol_listing(&self) -> String {
        self.symbols
            .as_ref()
            .map(|table| table.to_string())
            .unwrap_or_default()
    }
}

/// Run every stage over `source`.
pub fn compile(source: &str, options: &Options) -> CompileReport {
    let index = LineIndex::new(source);
    let mut report = CompileReport::default();

    let (tokens, lex_errors) = Lexer::with_options(source, options.lexer).tokenize();
    report.lexical_errors = diagnostics::render_lexical_errors(&index, &lex_errors);
    report.tokens = tokens;
    report.lex_errors = lex_errors;
    if !report.lex_errors.is_empty() {
        report.diagnostics = report.lexical_errors.clone();
        report.failed_stage = Some(Stage::Lexical);
        return report;
    }

    let (ast, syntax_errors) = parse(report.tokens.clone());
    report.tree = render_tree(&ast);
    report.postfix = to_postfix_trace(&ast);
    report.python = to_generated_source(&ast);
    report.diagnostics.extend(
        syntax_errors
            .iter()
            .map(|error| diagnostics::render(&index, "Syntax error", error.location, error)),
    );
    report.syntax_errors = syntax_errors;
    if !report.syntax_errors.is_empty() {
        report.ast = Some(ast);
        report.failed_stage = Some(Stage::Syntax);
        return report;
    }

    let (semantic_errors, symbols) = Interpreter::with_options(options.eval).run(&ast);
    report.diagnostics.extend(
        semantic_errors
            .iter()
            .map(|error| diagnostics::render(&index, error.kind.title(), error.location, error)),
    );
    if !semantic_errors.is_empty() {
        report.failed_stage = Some(Stage::Semantic);
    }
    report.semantic_errors = semantic_errors;
    report.symbols = Some(symbols);
    report.ast = Some(ast);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::value::Value;

    #[test]
    fn test_clean_program_runs_every_stage() {
        let report = compile("x = 2; y = x ** 3;", &Options::default());
        assert!(report.succeeded(), "{:?}", report.diagnostics());
        assert_eq!(
            report.symbols.as_ref().and_then(|s| s.value("y")),
            Some(&Value::Int(8))
        );
        assert_eq!(report.postfix, "x 2 =\ny x 3 ** =\n");
        assert_eq!(report.python, "x = 2\ny = x ** 3\n");
        assert!(report.tree.starts_with("Block (2 statements)"));
    }

    #[test]
    fn test_lexical_errors_stop_pipeline() {
        let report = compile("x = 1 @ 2;", &Options::default());
        assert_eq!(report.failed_stage, Some(Stage::Lexical));
        assert!(report.ast.is_none());
        assert!(report.symbols.is_none());
        assert!(!report.tokens.is_empty());
        assert_eq!(report.diagnostics().len(), 1);
    }

    #[test]
    fn test_syntax_errors_skip_evaluation() {
        let report = compile("x = 1; y = ;", &Options::default());
        assert_eq!(report.failed_stage, Some(Stage::Syntax));
        assert!(report.symbols.is_none());
        assert_eq!(report.postfix, "x 1 =\n");
        assert!(report.diagnostics()[0].starts_with("Syntax error at line 1, column 12"));
    }

    #[test]
    fn test_semantic_errors_keep_symbols() {
        let report = compile("x = 10 / 0;", &Options::default());
        assert_eq!(report.failed_stage, Some(Stage::Semantic));
        assert_eq!(report.semantic_errors.len(), 1);
        assert!(report.diagnostics()[0].starts_with("Division by zero at line 1, column 8"));
        assert!(report.symbol_listing().contains("x"));
    }
}
