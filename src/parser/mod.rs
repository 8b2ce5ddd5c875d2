//! Source parser for the teaching language
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), with error recovery
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! - Statements: assignment, `se … entao … senao`, `enquanto`, `para`, blocks
//! - Expressions: arithmetic (`+ - * / **`), comparison, `e`/`ou`,
//!   booleans, `[size]` array literals and `name[index]` element access
//! - Every keyword also accepts its English spelling (`if`, `while`, ...)
//! - `#` starts a comment that runs to the end of the line
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary operators.
//! Tokenization is generated by logos; everything after it is hand-written.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;

pub use lexer::{analyze, Lexer, Token, TokenKind};
pub use parse::{parse, Parser, SyntaxError};
