use crate::{
    lexer::tokens::{Token, TokenKind},
    MK_TOKEN,
};

use super::{
    ast::{GuardKind, Stmt, StmtType},
    expressions::Expr,
    statements::{AssignmentStmt, IfStmt, WhileStmt},
};

fn assignment(variable: &str, value: Token) -> Stmt {
    Stmt::Assignment(AssignmentStmt {
        variable: MK_TOKEN!(TokenKind::Identifier, variable),
        value: Expr::new(value),
    })
}

#[test]
fn test_stmt_type() {
    let stmt = assignment("x", MK_TOKEN!(TokenKind::Number, "5"));
    assert_eq!(stmt.stmt_type(), StmtType::AssignmentStmt);

    let stmt = Stmt::While(WhileStmt {
        condition: Expr::new(MK_TOKEN!(TokenKind::Identifier, "y")),
        body: Box::new(stmt),
    });
    assert_eq!(stmt.stmt_type(), StmtType::WhileStmt);
}

#[test]
fn test_depth_and_display() {
    let inner = assignment("z", MK_TOKEN!(TokenKind::Number, "1"));
    let stmt = Stmt::If(IfStmt {
        condition: Expr::new(MK_TOKEN!(TokenKind::Identifier, "x")),
        body: Box::new(Stmt::While(WhileStmt {
            condition: Expr::new(MK_TOKEN!(TokenKind::Identifier, "y")),
            body: Box::new(inner.clone()),
        })),
    });

    assert_eq!(inner.depth(), 1);
    assert_eq!(stmt.depth(), 3);
    assert_eq!(stmt.to_string(), "(if x (while y (= z 1)))");
}

#[test]
fn test_end_of_input_expression_display() {
    let stmt = assignment("x", MK_TOKEN!(TokenKind::EndOfInput, ""));
    assert_eq!(stmt.to_string(), "(= x <eoi>)");
}

#[test]
fn test_nest_builds_outermost_first() {
    let guards = vec![
        (GuardKind::If, Expr::new(MK_TOKEN!(TokenKind::Identifier, "x"))),
        (GuardKind::While, Expr::new(MK_TOKEN!(TokenKind::Identifier, "y"))),
    ];
    let stmt = Stmt::nest(guards, assignment("z", MK_TOKEN!(TokenKind::Number, "1")));

    assert_eq!(stmt.to_string(), "(if x (while y (= z 1)))");

    let (guards, leaf) = stmt.spine();
    assert_eq!(guards[0].0, GuardKind::If);
    assert_eq!(guards[1].1.token.value, "y");
    assert_eq!(leaf.variable.value, "z");
}

#[test]
fn test_equality_compares_guard_kinds() {
    let condition = || Expr::new(MK_TOKEN!(TokenKind::Identifier, "c"));
    let leaf = || assignment("x", MK_TOKEN!(TokenKind::Number, "0"));

    let if_stmt = Stmt::nest(vec![(GuardKind::If, condition())], leaf());
    let while_stmt = Stmt::nest(vec![(GuardKind::While, condition())], leaf());

    assert_ne!(if_stmt, while_stmt);
    assert_ne!(if_stmt, leaf());
    assert_eq!(if_stmt, if_stmt.clone());
}

#[test]
fn test_deep_chain_clone_and_drop() {
    let guards = (0..50_000)
        .map(|_| (GuardKind::While, Expr::new(MK_TOKEN!(TokenKind::Identifier, "c"))))
        .collect();
    let stmt = Stmt::nest(guards, assignment("x", MK_TOKEN!(TokenKind::Number, "0")));
    let copy = stmt.clone();

    assert_eq!(copy.depth(), 50_001);
    assert_eq!(stmt, copy);
    assert!(format!("{:?}", copy).starts_with("Stmt { guards: ["));
}
