//! Postfix (stack-machine) trace
//!
//! Every expression is written in reverse Polish notation; control flow
//! becomes bracketed markers with the nested statements indented two spaces:
//!
//! ```text
//! s 0 =
//! [FOR i 0 = ; i 5 < ; i i 1 + =]
//!   s s i + =
//! [END FOR]
//! ```
//!
//! Element assignment is `a i v []=`, element read `a i @` and an array
//! literal `[size]` with its size in postfix.

use crate::parser::ast::*;

const INDENT: &str = "  ";

/// Render `program` as a postfix trace, one line per statement.
pub fn to_postfix_trace(program: &Block) -> String {
    let mut writer = PostfixWriter::default();
    writer.write_block(program);
    writer.out
}

/// Postfix form of a single expression
pub fn expression_to_postfix(expr: &AstNode) -> String {
    let mut parts = Vec::new();
    push_postfix(expr, &mut parts);
    parts.join(" ")
}

fn push_postfix(expr: &AstNode, parts: &mut Vec<String>) {
    match expr {
        AstNode::NumberLiteral { text, .. } => parts.push(text.clone()),
        AstNode::BooleanLiteral { value, .. } => parts.push(value.to_string()),
        AstNode::Identifier { name, .. } => parts.push(name.clone()),
        AstNode::BinaryOp {
            left,
            op: BinOp::Assign,
            right,
            ..
        } => match left.as_ref() {
            AstNode::ArrayAccess { name, index, .. } => {
                parts.push(name.clone());
                push_postfix(index, parts);
                push_postfix(right, parts);
                parts.push("[]=".to_string());
            }
            target => {
                push_postfix(target, parts);
                push_postfix(right, parts);
                parts.push("=".to_string());
            }
        },
        AstNode::BinaryOp {
            left, op, right, ..
        } => {
            push_postfix(left, parts);
            push_postfix(right, parts);
            parts.push(op.symbol().to_string());
        }
        AstNode::ArrayLiteral { size, .. } => {
            parts.push(format!("[{}]", expression_to_postfix(size)));
        }
        AstNode::ArrayAccess { name, index, .. } => {
            parts.push(name.clone());
            push_postfix(index, parts);
            parts.push("@".to_string());
        }
        // Statements never appear inside expressions
        AstNode::Block(_)
        | AstNode::If { .. }
        | AstNode::While { .. }
        | AstNode::For { .. }
        | AstNode::Comment { .. } => {}
    }
}

#[derive(Default)]
struct PostfixWriter {
    out: String,
    depth: usize,
}

impl PostfixWriter {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn write_block(&mut self, block: &Block) {
        for stmt in &block.statements {
            self.write_statement(stmt);
        }
    }

    fn write_nested(&mut self, block: &Block) {
        self.depth += 1;
        self.write_block(block);
        self.depth -= 1;
    }

    fn write_statement(&mut self, stmt: &AstNode) {
        match stmt {
            AstNode::Block(block) => {
                self.line("[BLOCK]");
                self.write_nested(block);
                self.line("[END BLOCK]");
            }
            AstNode::If {
                condition,
                then_block,
                else_block,
                ..
            } => {
                self.line(&format!("[IF {}]", expression_to_postfix(condition)));
                self.write_nested(then_block);
                if let Some(else_block) = else_block {
                    self.line("[ELSE]");
                    self.write_nested(else_block);
                }
                self.line("[END IF]");
            }
            AstNode::While {
                condition, body, ..
            } => {
                self.line(&format!("[WHILE {}]", expression_to_postfix(condition)));
                self.write_nested(body);
                self.line("[END WHILE]");
            }
            AstNode::For {
                init,
                condition,
                increment,
                body,
                ..
            } => {
                self.line(&format!(
                    "[FOR {} ; {} ; {}]",
                    expression_to_postfix(init),
                    expression_to_postfix(condition),
                    expression_to_postfix(increment)
                ));
                self.write_nested(body);
                self.line("[END FOR]");
            }
            AstNode::Comment { text, .. } => self.line(&format!("# {}", text)),
            AstNode::NumberLiteral { .. }
            | AstNode::BooleanLiteral { .. }
            | AstNode::Identifier { .. }
            | AstNode::BinaryOp { .. }
            | AstNode::ArrayLiteral { .. }
            | AstNode::ArrayAccess { .. } => self.line(&expression_to_postfix(stmt)),
        }
    }
}
