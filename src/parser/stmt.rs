use tracing::trace;

use crate::{
    ast::{
        ast::{GuardKind, Stmt},
        expressions::Expr,
        statements::AssignmentStmt,
    },
    errors::errors::{ErrorImpl, SyntaxError},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// Parses one statement.
///
/// `if` and `while` only nest in their body, so the guards are collected in
/// a loop and wrapped around the final assignment once it is parsed.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    let mut guards = Vec::new();

    while let Some(kind) = current_guard(parser) {
        guards.push((kind, parse_guard(parser)));
    }

    trace!(position = parser.get_position(), token = %parser.current_token(), guards = guards.len(), "Parsing statement");

    if parser.current_token_kind() != TokenKind::Identifier {
        return Err(SyntaxError::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().clone(),
            },
            parser.get_position(),
        ));
    }

    let leaf = parse_assignment_stmt(parser)?;
    Ok(Stmt::nest(guards, leaf))
}

fn current_guard(parser: &Parser) -> Option<GuardKind> {
    let keyword = parser.current_token().keyword()?;
    parser.get_stmt_lookup().get(&keyword).copied()
}

/// Consumes an `if` or `while` keyword and its condition.
pub fn parse_guard(parser: &mut Parser) -> Expr {
    parser.advance();
    parse_expr(parser)
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    let variable = parser.advance().clone();

    let error = SyntaxError::new(
        ErrorImpl::ExpectedAssignment {
            token: parser.current_token().clone(),
        },
        parser.get_position(),
    );
    parser.expect_symbol_error("=", error)?;

    let value = parse_expr(parser);

    Ok(Stmt::Assignment(AssignmentStmt { variable, value }))
}
