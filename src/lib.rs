#![allow(clippy::module_inception)]

use crate::{ast::ast::Stmt, errors::errors::SyntaxError, lexer::lexer::tokenize, parser::parser::parse};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Tokenizes and parses `source` into its first statement.
pub fn parse_source(source: &str) -> Result<Stmt, SyntaxError> {
    parse(tokenize(source))
}
