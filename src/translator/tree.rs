//! Indented AST dump, one node per line
//!
//! Structural children of control-flow nodes are introduced by a `field:`
//! line so the shape of `se`/`enquanto`/`para` statements stays readable.

use crate::parser::ast::*;
use std::fmt::Write;

/// Render `program` as an indented tree.
pub fn render_tree(program: &Block) -> String {
    let mut out = String::new();
    write_block(&mut out, program, 0);
    out
}

fn push_line(out: &mut String, depth: usize, text: &str) {
    let _ = writeln!(out, "{:indent$}{}", "", text, indent = depth * 2);
}

fn write_block(out: &mut String, block: &Block, depth: usize) {
    push_line(out, depth, &format!("Block ({} statements)", block.statements.len()));
    for stmt in &block.statements {
        write_node(out, stmt, depth + 1);
    }
}

fn write_field(out: &mut String, name: &str, node: &AstNode, depth: usize) {
    push_line(out, depth, &format!("{}:", name));
    write_node(out, node, depth + 1);
}

fn write_block_field(out: &mut String, name: &str, block: &Block, depth: usize) {
    push_line(out, depth, &format!("{}:", name));
    write_block(out, block, depth + 1);
}

fn write_node(out: &mut String, node: &AstNode, depth: usize) {
    match node {
        AstNode::NumberLiteral { text, .. } => push_line(out, depth, &format!("Number {}", text)),
        AstNode::BooleanLiteral { value, .. } => {
            push_line(out, depth, &format!("Boolean {}", value))
        }
        AstNode::Identifier { name, .. } => push_line(out, depth, &format!("Identifier {}", name)),
        AstNode::BinaryOp {
            left,
            op: BinOp::Assign,
            right,
            ..
        } => {
            push_line(out, depth, "Assign");
            write_node(out, left, depth + 1);
            write_node(out, right, depth + 1);
        }
        AstNode::BinaryOp {
            left, op, right, ..
        } => {
            push_line(out, depth, &format!("BinaryOp {}", op));
            write_node(out, left, depth + 1);
            write_node(out, right, depth + 1);
        }
        AstNode::ArrayLiteral { size, .. } => {
            push_line(out, depth, "ArrayLiteral");
            write_field(out, "size", size, depth + 1);
        }
        AstNode::ArrayAccess { name, index, .. } => {
            push_line(out, depth, &format!("ArrayAccess {}", name));
            write_field(out, "index", index, depth + 1);
        }
        AstNode::Block(block) => write_block(out, block, depth),
        AstNode::If {
            condition,
            then_block,
            else_block,
            ..
        } => {
            push_line(out, depth, "If");
            write_field(out, "condition", condition, depth + 1);
            write_block_field(out, "then", then_block, depth + 1);
            if let Some(else_block) = else_block {
                write_block_field(out, "else", else_block, depth + 1);
            }
        }
        AstNode::While {
            condition, body, ..
        } => {
            push_line(out, depth, "While");
            write_field(out, "condition", condition, depth + 1);
            write_block_field(out, "body", body, depth + 1);
        }
        AstNode::For {
            init,
            condition,
            increment,
            body,
            ..
        } => {
            push_line(out, depth, "For");
            write_field(out, "init", init, depth + 1);
            write_field(out, "condition", condition, depth + 1);
            write_field(out, "increment", increment, depth + 1);
            write_block_field(out, "body", body, depth + 1);
        }
        AstNode::Comment { text, .. } => push_line(out, depth, &format!("Comment {:?}", text)),
    }
}
