use std::fmt::Display;

use crate::lexer::tokens::Token;

/// An expression is exactly one token. `EndOfInput` is a legal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    pub token: Token,
}

impl Expr {
    pub fn new(token: Token) -> Self {
        Expr { token }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.token.is_eoi() {
            write!(f, "<eoi>")
        } else {
            write!(f, "{}", self.token.value)
        }
    }
}
