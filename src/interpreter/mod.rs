//! Semantic evaluator
//!
//! This module checks and executes a parsed program in one pass:
//! - [`engine`]: The [`Interpreter`](engine::Interpreter), error accumulation and `run`
//! - [`errors`]: Semantic error types
//! - [`constants`]: Default safety bounds
//!
//! Expression evaluation, statements, loops and the operator helpers under
//! `ops` are all `impl Interpreter` blocks split by concern.
//!
//! # Execution Model
//!
//! The interpreter walks the AST and executes statements one at a time against
//! a flat global [`SymbolTable`](crate::memory::symbols::SymbolTable). Problems
//! are reported with a fallback value instead of stopping the run, so one pass
//! surfaces as many errors as possible.

pub mod constants;
pub mod engine;
pub mod errors;
mod expressions;
mod loops;
mod ops;
mod statements;
