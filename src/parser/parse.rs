//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the syntax error type, cursor helpers, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: Parsing statements (assignment, se, enquanto, para, blocks)
//! - `expressions`: Parsing expressions with precedence climbing
//!
//! # Error Recovery
//!
//! Parsing never stops at the first error. [`Parser::expect`] records a
//! [`SyntaxError`], advances past the unexpected token anyway and reports the
//! failure through its return value. Statement parsers report what they
//! managed to build through [`StatementOutcome`], and the statement loop skips
//! one token whenever nothing could be recognised, so parsing always
//! terminates and always yields a (possibly partial) top-level [`Block`].

use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenKind};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    pub expected: String,
    pub found: String,
    pub location: SourceLocation,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, found {}", self.expected, self.found)
    }
}

impl std::error::Error for SyntaxError {}

/// Result of trying to parse one statement
#[derive(Debug)]
pub(crate) enum StatementOutcome {
    /// Parsed cleanly
    Parsed(AstNode),
    /// Errors were recorded; the partial node is kept when one could be built
    Recovered(Option<AstNode>),
    /// The current token cannot start a statement; nothing was consumed
    NotAStatement,
}

impl StatementOutcome {
    /// The node built, whether clean or partial
    pub(crate) fn into_node(self) -> Option<AstNode> {
        match self {
            StatementOutcome::Parsed(node) | StatementOutcome::Recovered(Some(node)) => Some(node),
            StatementOutcome::Recovered(None) | StatementOutcome::NotAStatement => None,
        }
    }
}

/// Deepest nesting of parentheses, brackets and blocks the parser descends into
pub(crate) const MAX_PARSE_DEPTH: usize = 256;

/// Tallest expression tree the parser builds; longer operator chains are cut off
pub(crate) const MAX_EXPRESSION_HEIGHT: usize = 2048;

/// Recursive descent parser for the teaching language
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) errors: Vec<SyntaxError>,
    pub(crate) depth: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::End) {
            let end = tokens
                .last()
                .map(|t| SourceLocation::new(t.location.offset + t.text.len()))
                .unwrap_or_default();
            tokens.push(Token::new(TokenKind::End, "", end));
        }

        Self {
            tokens,
            position: 0,
            errors: Vec::new(),
            depth: 0,
        }
    }

    /// Parse the entire program into one top-level block
    pub fn parse_program(mut self) -> (Block, Vec<SyntaxError>) {
        let location = self.current_location();
        let statements = self.parse_statement_sequence(None);
        (Block::new(statements, location), self.errors)
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::End)
    }

    /// Move past the current token. Never moves past `End`.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location
    }

    /// Record a syntax error at the current token.
    pub(crate) fn error_here(&mut self, expected: impl Into<String>) {
        let found = self.peek().describe();
        let location = self.current_location();
        self.errors.push(SyntaxError {
            expected: expected.into(),
            found,
            location,
        });
    }

    /// Wrap a finished statement, downgrading it to `Recovered` when errors
    /// were recorded while it was parsed.
    pub(crate) fn finish(&self, node: AstNode, errors_before: usize) -> StatementOutcome {
        if self.errors.len() == errors_before {
            StatementOutcome::Parsed(node)
        } else {
            StatementOutcome::Recovered(Some(node))
        }
    }

    /// Consume a token of the given kind.
    ///
    /// On mismatch, records an error, skips the unexpected token and returns
    /// `false` so the caller can still assemble a partial node.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            self.error_here(kind.to_string());
            self.advance();
            false
        }
    }
}

/// Parse a token sequence into a top-level block plus syntax errors.
pub fn parse(tokens: Vec<Token>) -> (Block, Vec<SyntaxError>) {
    Parser::new(tokens).parse_program()
}
