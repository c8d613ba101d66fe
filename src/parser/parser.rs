//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser keeps a single forward cursor into the token stream and a
//! lookup table from keywords to the statements they start.

use std::collections::HashMap;

use crate::{
    ast::ast::{GuardKind, Stmt},
    errors::errors::SyntaxError,
    lexer::tokens::{Keyword, Token, TokenKind},
    MK_TOKEN,
};

use super::{
    lookups::{create_token_lookups, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// The token stream always ends in `EndOfInput`. Once the cursor moves past
/// the end, the final `EndOfInput` keeps being reported as the current token.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table from keywords to the guard statements they start
    stmt_lookup: StmtLookup,
}

impl Parser {
    /// Creates a new Parser with its statement handlers registered.
    ///
    /// An `EndOfInput` token is appended if the stream does not already end
    /// with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eoi) {
            tokens.push(MK_TOKEN!(TokenKind::EndOfInput, ""));
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.get_position()]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        let index = self.get_position();
        self.pos += 1;
        &self.tokens[index]
    }

    /// Consumes the current token if it is the symbol `symbol`, otherwise
    /// returns `error`.
    pub fn expect_symbol_error(&mut self, symbol: &str, error: SyntaxError) -> Result<Token, SyntaxError> {
        if !self.current_token().is_symbol(symbol) {
            return Err(error);
        }

        Ok(self.advance().clone())
    }

    /// Tokens not consumed yet, excluding the final `EndOfInput`.
    pub fn remaining(&self) -> &[Token] {
        let end = self.tokens.len() - 1;
        &self.tokens[self.pos.min(end)..end]
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers the guard statement a keyword starts.
    pub fn stmt(&mut self, keyword: Keyword, kind: GuardKind) {
        self.stmt_lookup.insert(keyword, kind);
    }

    /// Returns the index of the current token, which stops at the final
    /// `EndOfInput` once the cursor has moved past it.
    pub fn get_position(&self) -> usize {
        self.pos.min(self.tokens.len() - 1)
    }
}

/// Parses a stream of tokens into a single statement.
///
/// Only the first statement is parsed; any tokens after it are ignored.
/// Use [`Parser`] directly to inspect them with [`Parser::remaining`].
pub fn parse(tokens: Vec<Token>) -> Result<Stmt, SyntaxError> {
    let mut parser = Parser::new(tokens);
    parse_stmt(&mut parser)
}
