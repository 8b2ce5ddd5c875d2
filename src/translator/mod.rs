//! Textual renderings of a parsed program
//!
//! - [`postfix`]: Stack-machine trace in reverse Polish notation
//! - [`python`]: Generated Python source
//! - [`tree`]: Indented AST dump
//!
//! All three are read-only visitors over the same [`Block`](crate::parser::ast::Block):
//! they never fail and the same tree always yields the same text.

pub mod postfix;
pub mod python;
pub mod tree;

pub use postfix::to_postfix_trace;
pub use python::to_generated_source;
pub use tree::render_tree;
