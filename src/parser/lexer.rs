//! Lexer (tokenizer) for the teaching language
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! The token patterns are declared as a table on [`TokenKind`] and compiled by
//! [logos](https://docs.rs/logos) into a single DFA. Longest match wins, and on
//! an exact-length tie the literal keyword beats the identifier pattern, so
//! `se` is a keyword while `seguro` is an identifier. The one-letter keyword
//! `e` ties with the identifier pattern on priority, so it is raised by hand.
//!
//! Keywords accept both the Portuguese and the English spelling.
//!
//! A character matching no pattern is recorded as a [`LexError`] and scanning
//! restarts one character later, so every invalid character in the source is
//! reported in a single pass.

use super::ast::SourceLocation;
use crate::config::LexerOptions;
use crate::diagnostics::{self, LineIndex};
use logos::Logos;
use std::fmt;

/// All token kinds produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // Keywords
    #[token("se")]
    #[token("if")]
    If,
    #[token("entao")]
    #[token("então")]
    #[token("then")]
    Then,
    #[token("senao")]
    #[token("senão")]
    #[token("else")]
    Else,
    #[token("enquanto")]
    #[token("while")]
    While,
    #[token("para")]
    #[token("for")]
    For,
    #[token("e", priority = 3)]
    #[token("and")]
    And,
    #[token("ou")]
    #[token("or")]
    Or,
    #[token("verdadeiro")]
    #[token("true")]
    True,
    #[token("falso")]
    #[token("false")]
    False,

    // Punctuation
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,

    // Operators
    #[token("=")]
    Assign,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token(">")]
    Gt,
    #[token("<")]
    Lt,
    #[token(">=")]
    Ge,
    #[token("<=")]
    Le,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("**")]
    Power,

    // Literals and names
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// `# ...` to end of line; dropped unless comments are preserved
    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,

    /// End of input, appended after the last real token
    End,
}

impl TokenKind {
    /// Upper-case name used in token listings
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Assign => "ASSIGN",
            TokenKind::EqEq => "EQUAL",
            TokenKind::NotEq => "NOT_EQUAL",
            TokenKind::Gt => "GREATER",
            TokenKind::Lt => "LESS",
            TokenKind::Ge => "GREATER_EQUAL",
            TokenKind::Le => "LESS_EQUAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Power => "POWER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Comment => "COMMENT",
            TokenKind::End => "END",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::If => write!(f, "'se'"),
            TokenKind::Then => write!(f, "'entao'"),
            TokenKind::Else => write!(f, "'senao'"),
            TokenKind::While => write!(f, "'enquanto'"),
            TokenKind::For => write!(f, "'para'"),
            TokenKind::And => write!(f, "'e'"),
            TokenKind::Or => write!(f, "'ou'"),
            TokenKind::True => write!(f, "'verdadeiro'"),
            TokenKind::False => write!(f, "'falso'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBracket => write!(f, "'['"),
            TokenKind::RBracket => write!(f, "']'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::EqEq => write!(f, "'=='"),
            TokenKind::NotEq => write!(f, "'!='"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::Lt => write!(f, "'<'"),
            TokenKind::Ge => write!(f, "'>='"),
            TokenKind::Le => write!(f, "'<='"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Power => write!(f, "'**'"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Comment => write!(f, "comment"),
            TokenKind::End => write!(f, "end of input"),
        }
    }
}

/// A classified lexical unit with its source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    /// Short description used in "expected X, found Y" messages
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Identifier => format!("identifier '{}'", self.text),
            TokenKind::Number => format!("number {}", self.text),
            TokenKind::Comment => "comment".to_string(),
            _ => self.kind.to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<14} {:<12} @ {}",
            self.kind.name(),
            format!("'{}'", self.text),
            self.location.offset
        )
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub character: char,
    pub location: SourceLocation,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid character '{}' at byte {}",
            self.character, self.location.offset
        )
    }
}

impl std::error::Error for LexError {}

/// Lexer for source text
pub struct Lexer<'src> {
    source: &'src str,
    options: LexerOptions,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source string.
    pub fn new(source: &'src str) -> Self {
        Self::with_options(source, LexerOptions::default())
    }

    pub fn with_options(source: &'src str, options: LexerOptions) -> Self {
        Self { source, options }
    }

    /// Tokenize the entire input.
    ///
    /// The returned token vector always ends with a [`TokenKind::End`] token
    /// located at `source.len()`.
    pub fn tokenize(&self) -> (Vec<Token>, Vec<LexError>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        let mut offset = 0;

        'scan: while offset < self.source.len() {
            let mut lexer = TokenKind::lexer(&self.source[offset..]);

            while let Some(result) = lexer.next() {
                let start = offset + lexer.span().start;
                match result {
                    Ok(TokenKind::Comment) if !self.options.keep_comments => {}
                    Ok(kind) => {
                        tokens.push(Token::new(kind, lexer.slice(), SourceLocation::new(start)));
                    }
                    Err(()) => {
                        let Some(character) = self.source[start..].chars().next() else {
                            break 'scan;
                        };
                        errors.push(LexError {
                            character,
                            location: SourceLocation::new(start),
                        });
                        // Resume one character after the offending one
                        offset = start + character.len_utf8();
                        continue 'scan;
                    }
                }
            }

            break;
        }

        tokens.push(Token::new(
            TokenKind::End,
            "",
            SourceLocation::new(self.source.len()),
        ));
        (tokens, errors)
    }
}

/// Tokenize `source`, rendering lexical errors coalesced per line.
pub fn analyze(source: &str) -> (Vec<Token>, Vec<String>) {
    analyze_with(source, LexerOptions::default())
}

pub fn analyze_with(source: &str, options: LexerOptions) -> (Vec<Token>, Vec<String>) {
    let (tokens, errors) = Lexer::with_options(source, options).tokenize();
    let index = LineIndex::new(source);
    (tokens, diagnostics::render_lexical_errors(&index, &errors))
}

/// One token per line, as shown in the token listing views.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let (tokens, errors) = Lexer::new(source).tokenize();
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_assignment() {
        let (tokens, errors) = analyze("x = 10 ;");
        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "x");
        assert_eq!(tokens[1].kind, TokenKind::Assign);
        assert_eq!(tokens[2].kind, TokenKind::Number);
        assert_eq!(tokens[2].text, "10");
        assert_eq!(tokens[3].kind, TokenKind::Semicolon);
        assert_eq!(tokens[4].kind, TokenKind::End);
        assert_eq!(tokens[2].location.offset, 4);
    }

    #[test]
    fn test_keywords_whole_word() {
        assert_eq!(
            kinds("se seguro entao e elemento ou"),
            vec![
                TokenKind::If,
                TokenKind::Identifier,
                TokenKind::Then,
                TokenKind::And,
                TokenKind::Identifier,
                TokenKind::Or,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_single_letter_keyword() {
        assert_eq!(
            kinds("e ex e1 _e"),
            vec![
                TokenKind::And,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_english_keywords() {
        assert_eq!(
            kinds("if then else while for and or true false"),
            vec![
                TokenKind::If,
                TokenKind::Then,
                TokenKind::Else,
                TokenKind::While,
                TokenKind::For,
                TokenKind::And,
                TokenKind::Or,
                TokenKind::True,
                TokenKind::False,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_operators_longest_match() {
        assert_eq!(
            kinds("** * == = != >= > <= <"),
            vec![
                TokenKind::Power,
                TokenKind::Star,
                TokenKind::EqEq,
                TokenKind::Assign,
                TokenKind::NotEq,
                TokenKind::Ge,
                TokenKind::Gt,
                TokenKind::Le,
                TokenKind::Lt,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_decimal_number() {
        let (tokens, _) = Lexer::new("3.25 7").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "3.25");
        assert_eq!(tokens[1].text, "7");
    }

    #[test]
    fn test_comments_skipped_by_default() {
        assert_eq!(
            kinds("x = 1; # set x\ny = 2;"),
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_comments_kept_on_request() {
        let lexer = Lexer::with_options("# hello\nx = 1;", LexerOptions { keep_comments: true });
        let (tokens, errors) = lexer.tokenize();
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].text, "# hello");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_error_recovery_continues_scanning() {
        let (tokens, errors) = Lexer::new("x = @ 1 $ ;").tokenize();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].character, '@');
        assert_eq!(errors[0].location.offset, 4);
        assert_eq!(errors[1].character, '$');
        assert_eq!(errors[1].location.offset, 8);

        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_same_line_errors_coalesced() {
        let (_, errors) = analyze("x = @ 1 $ ;\ny = 2;");
        assert_eq!(errors.len(), 1);
        let message = &errors[0];
        assert!(message.contains("line 1"));
        assert_eq!(message.matches('^').count(), 2);
    }

    #[test]
    fn test_errors_on_different_lines() {
        let (_, errors) = analyze("x = @;\ny = $;");
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("line 1"));
        assert!(errors[1].contains("line 2"));
    }

    #[test]
    fn test_lone_bang_is_error() {
        let (tokens, errors) = Lexer::new("a ! b").tokenize();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].character, '!');
        assert_eq!(tokens.len(), 3);
    }
}
