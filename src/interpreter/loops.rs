//! Loop statement execution (`enquanto`, `para`).
//!
//! Every loop node runs its body at most `EvalOptions::max_loop_iterations`
//! times. If the condition is still truthy once that many iterations have
//! run, a `LoopLimitExceeded` error is reported and execution continues
//! after the loop.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::{SemanticError, SemanticErrorKind};
use crate::parser::ast::{AstNode, Block};

impl Interpreter {
    /// Executes an `enquanto cond { body }` loop.
    pub(crate) fn execute_while(
        &mut self,
        condition: &AstNode,
        body: &Block,
    ) -> Result<(), SemanticError> {
        self.run_loop(condition, body, None)
    }

    /// Executes a `para (init; cond; increment) { body }` loop.
    ///
    /// `init` runs once; `increment` runs after every completed body.
    pub(crate) fn execute_for(
        &mut self,
        init: &AstNode,
        condition: &AstNode,
        increment: &AstNode,
        body: &Block,
    ) -> Result<(), SemanticError> {
        self.evaluate_expr(init)?;
        self.run_loop(condition, body, Some(increment))
    }

    fn run_loop(
        &mut self,
        condition: &AstNode,
        body: &Block,
        increment: Option<&AstNode>,
    ) -> Result<(), SemanticError> {
        let limit = self.options.max_loop_iterations;
        let mut iterations = 0;

        while self.evaluate_expr(condition)?.is_truthy() {
            if iterations == limit {
                self.report(
                    SemanticErrorKind::LoopLimitExceeded,
                    condition.location(),
                    format!("Loop interrupted after {} iterations", limit),
                );
                break;
            }

            self.execute_block(body)?;
            if let Some(increment) = increment {
                self.evaluate_expr(increment)?;
            }
            iterations += 1;
        }

        Ok(())
    }
}
