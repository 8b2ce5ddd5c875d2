// AST (Abstract Syntax Tree) definitions for the teaching language

use std::fmt;

/// Source location information for error reporting.
///
/// Stores the byte offset of the defining token; line and column are derived
/// on demand through [`crate::diagnostics::LineIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SourceLocation {
    pub offset: usize,
}

impl SourceLocation {
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    // Assignment
    Assign,
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Logical
    And,
    Or,
}

impl BinOp {
    /// Surface symbol used in diagnostics and the postfix trace
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Assign => "=",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Pow => "**",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::And => "and",
            BinOp::Or => "or",
        }
    }

    pub fn is_logical(self) -> bool {
        matches!(self, BinOp::And | BinOp::Or)
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinOp::Eq | BinOp::Ne | BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge
        )
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An ordered statement sequence.
///
/// Kept as its own struct so `if`/`while`/`for` bodies are statically known
/// to be blocks rather than arbitrary nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<AstNode>,
    pub location: SourceLocation,
}

impl Block {
    pub fn new(statements: Vec<AstNode>, location: SourceLocation) -> Self {
        Self {
            statements,
            location,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// AST nodes representing statements and expressions
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    // Expressions
    NumberLiteral {
        text: String,
        location: SourceLocation,
    },
    BooleanLiteral {
        value: bool,
        location: SourceLocation,
    },
    Identifier {
        name: String,
        location: SourceLocation,
    },
    /// Arithmetic, comparison and logical expressions; an assignment
    /// statement when `op` is [`BinOp::Assign`].
    BinaryOp {
        left: Box<AstNode>,
        op: BinOp,
        right: Box<AstNode>,
        location: SourceLocation,
    },
    /// `[size]`: a zero-filled array of the evaluated size
    ArrayLiteral {
        size: Box<AstNode>,
        location: SourceLocation,
    },
    ArrayAccess {
        name: String,
        index: Box<AstNode>,
        location: SourceLocation,
    },

    // Statements
    Block(Block),
    If {
        condition: Box<AstNode>,
        then_block: Block,
        else_block: Option<Block>,
        location: SourceLocation,
    },
    While {
        condition: Box<AstNode>,
        body: Block,
        location: SourceLocation,
    },
    For {
        init: Box<AstNode>,
        condition: Box<AstNode>,
        increment: Box<AstNode>,
        body: Block,
        location: SourceLocation,
    },
    Comment {
        text: String,
        location: SourceLocation,
    },
}

impl AstNode {
    /// Get the source location of this node
    pub fn location(&self) -> SourceLocation {
        match self {
            AstNode::NumberLiteral { location, .. }
            | AstNode::BooleanLiteral { location, .. }
            | AstNode::Identifier { location, .. }
            | AstNode::BinaryOp { location, .. }
            | AstNode::ArrayLiteral { location, .. }
            | AstNode::ArrayAccess { location, .. }
            | AstNode::If { location, .. }
            | AstNode::While { location, .. }
            | AstNode::For { location, .. }
            | AstNode::Comment { location, .. } => *location,
            AstNode::Block(block) => block.location,
        }
    }

    /// Build an assignment node (`target = value`)
    pub fn assignment(target: AstNode, value: AstNode, location: SourceLocation) -> Self {
        AstNode::BinaryOp {
            left: Box::new(target),
            op: BinOp::Assign,
            right: Box::new(value),
            location,
        }
    }

    pub fn is_assignment(&self) -> bool {
        matches!(
            self,
            AstNode::BinaryOp {
                op: BinOp::Assign,
                ..
            }
        )
    }
}
