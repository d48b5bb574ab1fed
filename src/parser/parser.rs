//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry point.
//! The Parser struct is the token cursor: a read-only view over the token
//! stream with lookahead by offset and a strictly monotone position that
//! is never rewound. The grammar is resolvable with single-token
//! lookahead, so no backtracking primitive exists.

use std::rc::Rc;

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::stmt::parse_stmt;

/// Upper bound on expression/scope nesting. Recursive descent spends one
/// stack frame per nesting level, so the parser refuses input deeper than
/// this instead of overflowing the call stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream, tracks the current position in it,
/// and provides methods for token lookahead and consumption.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Current expression/scope nesting depth
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Reference-counted string containing the source file name
    ///
    /// # Returns
    ///
    /// A new Parser instance ready to parse the token stream.
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            depth: 0,
        }
    }

    /// Returns the token `offset` positions ahead without advancing.
    ///
    /// Fails with `OutOfRange` if the offset runs past the end of the
    /// stream. A correctly terminated stream always ends with an EOF
    /// token, so this only fires on malformed input.
    pub fn peek_at(&self, offset: usize) -> Result<&Token, Error> {
        let index = self.pos + offset;
        match self.tokens.get(index) {
            Some(token) => Ok(token),
            None => Err(Error::new(
                ErrorImpl::OutOfRange { index },
                self.get_position(),
            )),
        }
    }

    /// Returns the current token without advancing.
    pub fn peek(&self) -> Result<&Token, Error> {
        self.peek_at(0)
    }

    /// Returns the kind of the current token.
    pub fn peek_kind(&self) -> Result<TokenKind, Error> {
        Ok(self.peek()?.kind)
    }

    /// Advances past the current token and returns it.
    pub fn consume(&mut self) -> Result<Token, Error> {
        let token = self.peek()?.clone();
        self.pos += 1;
        Ok(token)
    }

    /// Expects a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    ///
    /// # Returns
    ///
    /// Consumes and returns Ok(Token) if the current token matches,
    /// otherwise returns an `UnexpectedToken` error naming both kinds.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.peek()?;
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        }

        self.consume()
    }

    /// Checks if there are more tokens to parse.
    ///
    /// # Returns
    ///
    /// Returns true if the current token exists and is not EOF.
    pub fn has_tokens(&self) -> bool {
        match self.tokens.get(self.pos) {
            Some(token) => token.kind != TokenKind::EOF,
            None => false,
        }
    }

    /// Records entry into a nested expression or scope.
    ///
    /// Fails with `NestingTooDeep` once the depth passes
    /// `MAX_NESTING_DEPTH`.
    pub fn enter_nested(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(Error::new(ErrorImpl::NestingTooDeep, self.get_position()));
        }

        Ok(())
    }

    /// Records leaving a nested expression or scope.
    pub fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        match self.tokens.get(self.pos) {
            Some(token) => token.span.start.clone(),
            None => Position(0, Rc::clone(&self.file)),
        }
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance
/// and parses top-level statements until EOF.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Reference-counted string containing the source file name
///
/// # Returns
///
/// The root Program on success. Any grammar violation aborts the whole
/// parse with an Error; no partial tree is ever returned.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, file);

    let mut body = vec![];
    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    Ok(Program { body })
}
