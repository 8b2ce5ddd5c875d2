//! Statement parsing implementation
//!
//! This module handles parsing of all statement forms:
//!
//! - Assignments: `x = 1;`, `a[i] = x * 2;`
//! - Conditionals: `se cond entao { ... } senao { ... }`
//! - Loops: `enquanto cond { ... }`, `para (i = 0; i < n; i = i + 1) { ... }`
//! - Comments (only present when the lexer preserves them)
//!
//! # Grammar
//!
//! ```text
//! statement  ::= assignment | if_stmt | while_stmt | for_stmt | comment
//! assignment ::= IDENT ( '[' expr ']' )? '=' expr ';'
//! if_stmt    ::= 'se' expr 'entao' block ( 'senao' block )?
//! while_stmt ::= 'enquanto' expr block
//! for_stmt   ::= 'para' '(' assignment expr ';' IDENT ( '[' expr ']' )? '=' expr ')' block
//! block      ::= '{' statement* '}'
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Parser, StatementOutcome, MAX_PARSE_DEPTH};

impl Parser {
    /// Parse statements until `terminator` (or end of input).
    ///
    /// Anything that cannot start a statement is reported and skipped one
    /// token at a time. Every iteration consumes at least one token.
    pub(crate) fn parse_statement_sequence(&mut self, terminator: Option<TokenKind>) -> Vec<AstNode> {
        let mut statements = Vec::new();

        while !self.is_at_end() && terminator.map_or(true, |kind| !self.check(kind)) {
            let before = self.position;

            match self.parse_statement() {
                StatementOutcome::Parsed(node) | StatementOutcome::Recovered(Some(node)) => {
                    statements.push(node);
                }
                StatementOutcome::Recovered(None) => {}
                StatementOutcome::NotAStatement => {
                    self.error_here("statement");
                    self.advance();
                }
            }

            if self.position == before {
                self.advance();
            }
        }

        statements
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> StatementOutcome {
        match self.peek_kind() {
            TokenKind::Identifier => self.parse_assignment(true),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::For => self.parse_for_statement(),
            TokenKind::Comment => {
                let token = self.advance();
                StatementOutcome::Parsed(AstNode::Comment {
                    text: token.text.trim_start_matches('#').trim().to_string(),
                    location: token.location,
                })
            }
            _ => StatementOutcome::NotAStatement,
        }
    }

    /// Parse `target = expr`, followed by `;` when `terminated`.
    ///
    /// The `for` increment clause is the only unterminated assignment.
    pub(crate) fn parse_assignment(&mut self, terminated: bool) -> StatementOutcome {
        let errors_before = self.errors.len();

        if !self.check(TokenKind::Identifier) {
            self.error_here("assignment");
            return StatementOutcome::Recovered(None);
        }

        let name_token = self.advance();
        let target = if self.match_token(TokenKind::LBracket) {
            let index = self.parse_expression();
            self.expect(TokenKind::RBracket);
            index.map(|index| AstNode::ArrayAccess {
                name: name_token.text.clone(),
                index: Box::new(index),
                location: name_token.location,
            })
        } else {
            Some(AstNode::Identifier {
                name: name_token.text.clone(),
                location: name_token.location,
            })
        };

        let location = self.current_location();
        if !self.expect(TokenKind::Assign) {
            return StatementOutcome::Recovered(None);
        }

        let value = self.parse_expression();

        if terminated {
            if value.is_some() {
                self.expect(TokenKind::Semicolon);
            } else {
                // The expression error is already recorded
                self.match_token(TokenKind::Semicolon);
            }
        }

        match (target, value) {
            (Some(target), Some(value)) => {
                self.finish(AstNode::assignment(target, value, location), errors_before)
            }
            _ => StatementOutcome::Recovered(None),
        }
    }

    /// Parse `se cond entao block (senao block)?`
    fn parse_if_statement(&mut self) -> StatementOutcome {
        let errors_before = self.errors.len();
        let location = self.advance().location;

        let condition = self.parse_expression();
        self.expect(TokenKind::Then);
        let then_block = self.parse_block();

        let else_block = if self.match_token(TokenKind::Else) {
            Some(self.parse_block())
        } else {
            None
        };

        match condition {
            Some(condition) => self.finish(
                AstNode::If {
                    condition: Box::new(condition),
                    then_block,
                    else_block,
                    location,
                },
                errors_before,
            ),
            None => StatementOutcome::Recovered(None),
        }
    }

    /// Parse `enquanto cond block`
    fn parse_while_statement(&mut self) -> StatementOutcome {
        let errors_before = self.errors.len();
        let location = self.advance().location;

        let condition = self.parse_expression();
        let body = self.parse_block();

        match condition {
            Some(condition) => self.finish(
                AstNode::While {
                    condition: Box::new(condition),
                    body,
                    location,
                },
                errors_before,
            ),
            None => StatementOutcome::Recovered(None),
        }
    }

    /// Parse `para (init; cond; increment) block`
    ///
    /// All three clauses are required; the init clause carries its own `;`.
    fn parse_for_statement(&mut self) -> StatementOutcome {
        let errors_before = self.errors.len();
        let location = self.advance().location;

        self.expect(TokenKind::LParen);
        let init = self.parse_assignment(true).into_node();
        let condition = self.parse_expression();
        self.expect(TokenKind::Semicolon);
        let increment = self.parse_assignment(false).into_node();
        self.expect(TokenKind::RParen);
        let body = self.parse_block();

        match (init, condition, increment) {
            (Some(init), Some(condition), Some(increment)) => self.finish(
                AstNode::For {
                    init: Box::new(init),
                    condition: Box::new(condition),
                    increment: Box::new(increment),
                    body,
                    location,
                },
                errors_before,
            ),
            _ => StatementOutcome::Recovered(None),
        }
    }

    /// Parse `{ statement* }`.
    ///
    /// A missing `{` yields an empty block after the usual expect recovery.
    pub(crate) fn parse_block(&mut self) -> Block {
        let location = self.current_location();

        if !self.expect(TokenKind::LBrace) {
            return Block::new(Vec::new(), location);
        }

        if self.depth >= MAX_PARSE_DEPTH {
            self.error_here("shallower nesting");
            return Block::new(Vec::new(), location);
        }

        self.depth += 1;
        let statements = self.parse_statement_sequence(Some(TokenKind::RBrace));
        self.depth -= 1;
        self.expect(TokenKind::RBrace);

        Block::new(statements, location)
    }
}
