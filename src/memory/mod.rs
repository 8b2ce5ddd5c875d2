//! Runtime state for the evaluator
//!
//! - [`value`]: Runtime value representation (Int, Float, Bool, Array)
//! - [`symbols`]: The flat global symbol table returned by every run
//!
//! Arrays are owned by the symbol that holds them and are mutated in place
//! through indexed assignment; there is no heap or address space.

pub mod symbols;
pub mod value;
