//! Statement execution implementation
//!
//! This module handles blocks, statement dispatch and `se`/`senao`. Loops
//! live in `loops`; assignments and other expression statements are
//! evaluated through `evaluate_expr` and their value discarded.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::SemanticError;
use crate::parser::ast::*;

impl Interpreter {
    pub(crate) fn execute_block(&mut self, block: &Block) -> Result<(), SemanticError> {
        for stmt in &block.statements {
            self.execute_statement(stmt)?;
        }
        Ok(())
    }

    /// Execute a single statement
    pub(crate) fn execute_statement(&mut self, stmt: &AstNode) -> Result<(), SemanticError> {
        self.enter(stmt.location())?;

        let result = match stmt {
            AstNode::Block(block) => self.execute_block(block),

            AstNode::If {
                condition,
                then_block,
                else_block,
                ..
            } => self.execute_if(condition, then_block, else_block.as_ref()),

            AstNode::While {
                condition, body, ..
            } => self.execute_while(condition, body),

            AstNode::For {
                init,
                condition,
                increment,
                body,
                ..
            } => self.execute_for(init, condition, increment, body),

            AstNode::Comment { .. } => Ok(()),

            AstNode::NumberLiteral { .. }
            | AstNode::BooleanLiteral { .. }
            | AstNode::Identifier { .. }
            | AstNode::BinaryOp { .. }
            | AstNode::ArrayLiteral { .. }
            | AstNode::ArrayAccess { .. } => self.evaluate_expr(stmt).map(|_| ()),
        };

        self.leave();
        result
    }

    fn execute_if(
        &mut self,
        condition: &AstNode,
        then_block: &Block,
        else_block: Option<&Block>,
    ) -> Result<(), SemanticError> {
        if self.evaluate_expr(condition)?.is_truthy() {
            self.execute_block(then_block)
        } else if let Some(else_block) = else_block {
            self.execute_block(else_block)
        } else {
            Ok(())
        }
    }
}
