//! Python code generation
//!
//! Produces a runnable Python translation of the program:
//!
//! - four-space indentation, `pass` for empty bodies
//! - `and`/`or`, `True`/`False`
//! - every nested binary operand parenthesised, so Python's own precedence
//!   never changes the meaning
//! - `para` lowered to its init, then a `while` whose body ends with the increment
//! - `[size]` as `[0] * (size)`, element access as `a[int(i)]`

use crate::parser::ast::*;

const INDENT: &str = "    ";

/// Render `program` as Python source.
pub fn to_generated_source(program: &Block) -> String {
    let mut generator = PythonGenerator::default();
    generator.write_block(program);
    generator.out
}

/// Python form of a single expression
pub fn expression_to_python(expr: &AstNode) -> String {
    match expr {
        AstNode::NumberLiteral { text, .. } => text.clone(),
        AstNode::BooleanLiteral { value: true, .. } => "True".to_string(),
        AstNode::BooleanLiteral { value: false, .. } => "False".to_string(),
        AstNode::Identifier { name, .. } => name.clone(),
        AstNode::BinaryOp {
            left, op, right, ..
        } => format!("{} {} {}", operand(left), op.symbol(), operand(right)),
        AstNode::ArrayLiteral { size, .. } => format!("[0] * ({})", expression_to_python(size)),
        AstNode::ArrayAccess { name, index, .. } => {
            format!("{}[int({})]", name, expression_to_python(index))
        }
        AstNode::Block(_)
        | AstNode::If { .. }
        | AstNode::While { .. }
        | AstNode::For { .. }
        | AstNode::Comment { .. } => String::new(),
    }
}

/// Parenthesise nested binary expressions
fn operand(expr: &AstNode) -> String {
    match expr {
        AstNode::BinaryOp { .. } => format!("({})", expression_to_python(expr)),
        _ => expression_to_python(expr),
    }
}

#[derive(Default)]
struct PythonGenerator {
    out: String,
    depth: usize,
    /// Lines written so far that Python executes (comments excluded)
    code_lines: usize,
}

impl PythonGenerator {
    fn line(&mut self, text: &str) {
        self.code_lines += 1;
        self.raw_line(text);
    }

    fn comment(&mut self, text: &str) {
        self.raw_line(&format!("# {}", text));
    }

    fn raw_line(&mut self, text: &str) {
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

    /// Indented suite under a `:` header, with `trailer` run last
    fn write_suite(&mut self, block: &Block, trailer: Option<&AstNode>) {
        self.depth += 1;
        let before = self.code_lines;
        self.write_block(block);
        if let Some(trailer) = trailer {
            self.write_statement(trailer);
        }
        if self.code_lines == before {
            self.line("pass");
        }
        self.depth -= 1;
    }

    fn write_statement(&mut self, stmt: &AstNode) {
        match stmt {
            // Python has no bare blocks; the statements join the enclosing suite
            AstNode::Block(block) => self.write_block(block),
            AstNode::If {
                condition,
                then_block,
                else_block,
                ..
            } => {
                self.line(&format!("if {}:", expression_to_python(condition)));
                self.write_suite(then_block, None);
                if let Some(else_block) = else_block {
                    self.line("else:");
                    self.write_suite(else_block, None);
                }
            }
            AstNode::While {
                condition, body, ..
            } => {
                self.line(&format!("while {}:", expression_to_python(condition)));
                self.write_suite(body, None);
            }
            AstNode::For {
                init,
                condition,
                increment,
                body,
                ..
            } => {
                self.write_statement(init);
                self.line(&format!("while {}:", expression_to_python(condition)));
                self.write_suite(body, Some(increment));
            }
            AstNode::Comment { text, .. } => self.comment(text),
            AstNode::BinaryOp {
                left,
                op: BinOp::Assign,
                right,
                ..
            } => self.line(&format!(
                "{} = {}",
                expression_to_python(left),
                expression_to_python(right)
            )),
            AstNode::NumberLiteral { .. }
            | AstNode::BooleanLiteral { .. }
            | AstNode::Identifier { .. }
            | AstNode::BinaryOp { .. }
            | AstNode::ArrayLiteral { .. }
            | AstNode::ArrayAccess { .. } => self.line(&expression_to_python(stmt)),
        }
    }
}
