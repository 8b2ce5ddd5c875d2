//! Pipeline options and command-line argument parsing
//!
//! Options are plain structs with `Default` impls; the binary fills them from
//! `std::env::args` through [`CliArgs::parse`].

use crate::interpreter::constants::{MAX_LOOP_ITERATIONS, MAX_NESTING_DEPTH};
use std::fmt;

/// Lexer behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexerOptions {
    /// Emit `#` comments as tokens so the parser builds `Comment` nodes
    pub keep_comments: bool,
}

/// Evaluator safety bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
    /// Body executions allowed per loop node before it is interrupted
    pub max_loop_iterations: usize,
    /// Deepest expression/statement nesting evaluated before giving up
    pub max_depth: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            max_loop_iterations: MAX_LOOP_ITERATIONS,
            max_depth: MAX_NESTING_DEPTH,
        }
    }
}

/// Options for a full compile run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub lexer: LexerOptions,
    pub eval: EvalOptions,
}

/// How the binary presents its results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Compile a file and open the terminal viewer
    Viewer(String),
    /// Compile a file and print every report section
    Batch(String),
    /// Read programs from stdin, compiling on `OK`
    Interactive,
}

/// Control line recognised in interactive mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractiveCommand {
    /// `OK`: compile the buffered program
    Compile,
    /// `FIM`: leave interactive mode
    Quit,
}

impl InteractiveCommand {
    /// Recognise a control line, ignoring surrounding whitespace and ASCII case.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("OK") {
            Some(InteractiveCommand::Compile)
        } else if line.eq_ignore_ascii_case("FIM") {
            Some(InteractiveCommand::Quit)
        } else {
            None
        }
    }
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub mode: Mode,
    pub options: Options,
}

/// Command-line usage error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError {
    pub message: String,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for UsageError {}

impl CliArgs {
    /// Parse arguments (without the program name).
    pub fn parse<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Options::default();
        let mut batch = false;
        let mut interactive = false;
        let mut file = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-b" | "--batch" => batch = true,
                "-i" | "--interactive" => interactive = true,
                "--keep-comments" => options.lexer.keep_comments = true,
                "--max-iterations" => {
                    let value = args.next().ok_or_else(|| UsageError {
                        message: "--max-iterations needs a value".to_string(),
                    })?;
                    options.eval.max_loop_iterations = value.parse().map_err(|_| UsageError {
                        message: format!("Invalid iteration limit: '{}'", value),
                    })?;
                }
                flag if flag.starts_with('-') => {
                    return Err(UsageError {
                        message: format!("Unknown option: {}", flag),
                    });
                }
                _ => {
                    if file.is_some() {
                        return Err(UsageError {
                            message: format!("Unexpected argument: {}", arg),
                        });
                    }
                    file = Some(arg);
                }
            }
        }

        let mode = match (interactive, file) {
            (true, None) => Mode::Interactive,
            (true, Some(_)) => {
                return Err(UsageError {
                    message: "--interactive does not take a file".to_string(),
                })
            }
            (false, Some(path)) if batch => Mode::Batch(path),
            (false, Some(path)) => Mode::Viewer(path),
            (false, None) => {
                return Err(UsageError {
                    message: "No input file provided".to_string(),
                })
            }
        };

        Ok(CliArgs { mode, options })
    }
}
