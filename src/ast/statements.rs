use crate::lexer::tokens::Token;

use super::{ast::Stmt, expressions::Expr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentStmt {
    /// Always an `Identifier` token when built by the parser.
    pub variable: Token,
    pub value: Expr,
}
