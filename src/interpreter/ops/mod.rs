pub mod access;
pub mod assign;
pub mod binary;

// Everything here is `impl Interpreter`
