use thiserror::Error;

use crate::lexer::tokens::Token;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at token {position}")]
pub struct SyntaxError {
    internal_error: ErrorImpl,
    position: usize,
}

impl SyntaxError {
    pub fn new(error_impl: ErrorImpl, position: usize) -> Self {
        SyntaxError {
            internal_error: error_impl,
            position,
        }
    }

    /// Index of the offending token in the token stream. Reading past the
    /// end stops at the final `EndOfInput`, so this is always a valid index.
    pub fn get_position(&self) -> usize {
        self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn token(&self) -> &Token {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token } => token,
            ErrorImpl::ExpectedAssignment { token } => token,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedAssignment { .. } => "ExpectedAssignment",
        }
    }

    /// A suggestion for the user on how to fix the input.
    pub fn get_tip(&self) -> String {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token } if token.is_eoi() => {
                String::from("Input ended where a statement was expected")
            }
            ErrorImpl::UnexpectedToken { token } => format!(
                "Unexpected {}: `{}`, statements start with `if`, `while` or a variable",
                token.kind, token.value
            ),
            ErrorImpl::ExpectedAssignment { token } if token.is_eoi() => {
                String::from("Expected `=` but input ended")
            }
            ErrorImpl::ExpectedAssignment { token } => format!(
                "Expected `=` after the variable, found `{}`",
                token.value
            ),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected token: {token}")]
    UnexpectedToken { token: Token },
    #[error("expected '=': {token}")]
    ExpectedAssignment { token: Token },
}
