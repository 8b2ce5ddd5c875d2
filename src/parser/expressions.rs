//! Expression parsing implementation
//!
//! This module handles parsing of expressions using precedence climbing
//! for binary operators and recursive descent for atoms.
//!
//! # Precedence
//!
//! Lowest to highest, every level left-associative (including `**`):
//!
//! | Level | Operators |
//! | --- | --- |
//! | logical | `e`/`and`, `ou`/`or` |
//! | comparison | `>` `<` `==` `!=` `>=` `<=` |
//! | additive | `+` `-` |
//! | multiplicative | `*` `/` |
//! | power | `**` |
//! | atom | number, boolean, identifier, `name[index]`, `( expr )`, `[size]` |
//!
//! A failed expression yields `None` after recording the error; the
//! statement parsers decide what partial node survives.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Parser, MAX_EXPRESSION_HEIGHT, MAX_PARSE_DEPTH};

/// A parsed expression together with the height of its tree
type Parsed = Option<(AstNode, usize)>;

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Option<AstNode> {
        self.parse_nested().map(|(expr, _)| expr)
    }

    fn parse_nested(&mut self) -> Parsed {
        if self.depth >= MAX_PARSE_DEPTH {
            self.error_here("shallower nesting");
            return None;
        }

        self.depth += 1;
        let expr = self.parse_logical();
        self.depth -= 1;
        expr
    }

    /// Parse one left-associative precedence level.
    ///
    /// Once the tree would grow past `MAX_EXPRESSION_HEIGHT` the error is
    /// recorded and the rest of the chain is consumed without building nodes.
    fn parse_left_assoc(
        &mut self,
        operand: fn(&mut Parser) -> Parsed,
        operator: fn(TokenKind) -> Option<BinOp>,
    ) -> Parsed {
        let (mut left, mut height) = operand(self)?;

        while let Some(op) = operator(self.peek_kind()) {
            if height >= MAX_EXPRESSION_HEIGHT {
                self.error_here("shallower nesting");
                while operator(self.peek_kind()).is_some() {
                    self.advance();
                    operand(self)?;
                }
                break;
            }

            let location = self.advance().location;
            let (right, right_height) = operand(self)?;
            height = height.max(right_height) + 1;
            left = AstNode::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
                location,
            };
        }

        Some((left, height))
    }

    /// Parse logical operators (e / ou)
    fn parse_logical(&mut self) -> Parsed {
        self.parse_left_assoc(Parser::parse_comparison, |kind| match kind {
            TokenKind::And => Some(BinOp::And),
            TokenKind::Or => Some(BinOp::Or),
            _ => None,
        })
    }

    /// Parse comparison (> < == != >= <=)
    fn parse_comparison(&mut self) -> Parsed {
        self.parse_left_assoc(Parser::parse_additive, |kind| match kind {
            TokenKind::Gt => Some(BinOp::Gt),
            TokenKind::Lt => Some(BinOp::Lt),
            TokenKind::EqEq => Some(BinOp::Eq),
            TokenKind::NotEq => Some(BinOp::Ne),
            TokenKind::Ge => Some(BinOp::Ge),
            TokenKind::Le => Some(BinOp::Le),
            _ => None,
        })
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Parsed {
        self.parse_left_assoc(Parser::parse_multiplicative, |kind| match kind {
            TokenKind::Plus => Some(BinOp::Add),
            TokenKind::Minus => Some(BinOp::Sub),
            _ => None,
        })
    }

    /// Parse multiplicative (* /)
    fn parse_multiplicative(&mut self) -> Parsed {
        self.parse_left_assoc(Parser::parse_power, |kind| match kind {
            TokenKind::Star => Some(BinOp::Mul),
            TokenKind::Slash => Some(BinOp::Div),
            _ => None,
        })
    }

    /// Parse power (**)
    fn parse_power(&mut self) -> Parsed {
        self.parse_left_assoc(Parser::parse_primary, |kind| match kind {
            TokenKind::Power => Some(BinOp::Pow),
            _ => None,
        })
    }

    /// Parse primary expressions (literals, names, element access, grouping, array literals)
    fn parse_primary(&mut self) -> Parsed {
        let location = self.current_location();

        match self.peek_kind() {
            TokenKind::Number => {
                let token = self.advance();
                Some((
                    AstNode::NumberLiteral {
                        text: token.text,
                        location,
                    },
                    1,
                ))
            }
            TokenKind::True | TokenKind::False => {
                let value = self.advance().kind == TokenKind::True;
                Some((AstNode::BooleanLiteral { value, location }, 1))
            }
            TokenKind::Identifier => {
                let name = self.advance().text;
                if self.match_token(TokenKind::LBracket) {
                    let index = self.parse_nested();
                    self.expect(TokenKind::RBracket);
                    let (index, height) = index?;
                    Some((
                        AstNode::ArrayAccess {
                            name,
                            index: Box::new(index),
                            location,
                        },
                        height + 1,
                    ))
                } else {
                    Some((AstNode::Identifier { name, location }, 1))
                }
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_nested();
                self.expect(TokenKind::RParen);
                inner
            }
            TokenKind::LBracket => {
                self.advance();
                let size = self.parse_nested();
                self.expect(TokenKind::RBracket);
                let (size, height) = size?;
                Some((
                    AstNode::ArrayLiteral {
                        size: Box::new(size),
                        location,
                    },
                    height + 1,
                ))
            }
            _ => {
                self.error_here("expression");
                None
            }
        }
    }
}
