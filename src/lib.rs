//! # Introduction
//!
//! Ensina is a front end for a small imperative teaching language with
//! Portuguese keywords (English spellings are accepted too). It tokenises and
//! parses a program, checks and runs it in one tree walk, and renders it as a
//! postfix stack-machine trace and as generated Python. A terminal viewer
//! built with [ratatui](https://docs.rs/ratatui) shows every stage side by side.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Evaluator → Symbol table
//!                            └──→ Translators
//! ```
//!
//! 1. [`parser`] tokenises the source and builds an AST, recovering from errors.
//! 2. [`interpreter`] walks the AST, reporting semantic errors as it executes.
//! 3. [`memory`] holds the runtime [`memory::value::Value`]s and the flat
//!    [`memory::symbols::SymbolTable`].
//! 4. [`translator`] renders the AST as a postfix trace, Python, or a tree dump.
//! 5. [`pipeline`] chains the stages and collects a [`pipeline::CompileReport`].
//! 6. [`ui`] is the ratatui viewer; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! let (tokens, lex_errors) = ensina::analyze("s = 0; para (i = 0; i < 5; i = i + 1) { s = s + i; }");
//! assert!(lex_errors.is_empty());
//! let (ast, syntax_errors) = ensina::parse(tokens);
//! assert!(syntax_errors.is_empty());
//! let (errors, symbols) = ensina::run(&ast);
//! assert!(errors.is_empty());
//! assert_eq!(symbols.value("s"), Some(&ensina::memory::value::Value::Int(10)));
//! ```

pub mod config;
pub mod diagnostics;
pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod pipeline;
pub mod translator;
pub mod ui;

pub use interpreter::engine::run;
pub use parser::lexer::analyze;
pub use parser::parse::parse;
pub use translator::{to_generated_source, to_postfix_trace};
