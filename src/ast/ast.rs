use std::fmt::{Debug, Display};

use crate::{lexer::tokens::TokenKind, MK_TOKEN};

use super::{
    expressions::Expr,
    statements::{AssignmentStmt, IfStmt, WhileStmt},
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StmtType {
    IfStmt,
    WhileStmt,
    AssignmentStmt,
}

/// The statements that guard a nested body.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GuardKind {
    If,
    While,
}

/// A statement node. Each node owns its children outright.
///
/// Nesting only ever happens in the body of `if` and `while`, so every tree
/// is a chain of guards ending in one assignment. Equality, cloning, printing
/// and dropping all walk that chain with a loop rather than recursion.
pub enum Stmt {
    If(IfStmt),
    While(WhileStmt),
    Assignment(AssignmentStmt),
}

impl Stmt {
    /// Wraps `leaf` in `guards`, the first guard becoming the outermost node.
    pub fn nest(guards: Vec<(GuardKind, Expr)>, leaf: Stmt) -> Stmt {
        guards
            .into_iter()
            .rev()
            .fold(leaf, |body, (kind, condition)| match kind {
                GuardKind::If => Stmt::If(IfStmt {
                    condition,
                    body: Box::new(body),
                }),
                GuardKind::While => Stmt::While(WhileStmt {
                    condition,
                    body: Box::new(body),
                }),
            })
    }

    /// The guards from the outermost inwards, and the assignment they end in.
    pub fn spine(&self) -> (Vec<(GuardKind, &Expr)>, &AssignmentStmt) {
        let mut guards = Vec::new();
        let mut current = self;

        loop {
            match current {
                Stmt::If(stmt) => {
                    guards.push((GuardKind::If, &stmt.condition));
                    current = stmt.body.as_ref();
                }
                Stmt::While(stmt) => {
                    guards.push((GuardKind::While, &stmt.condition));
                    current = stmt.body.as_ref();
                }
                Stmt::Assignment(stmt) => return (guards, stmt),
            }
        }
    }

    pub fn stmt_type(&self) -> StmtType {
        match self {
            Stmt::If(_) => StmtType::IfStmt,
            Stmt::While(_) => StmtType::WhileStmt,
            Stmt::Assignment(_) => StmtType::AssignmentStmt,
        }
    }

    /// Number of statements on the path from this node down, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self;

        while let Stmt::If(IfStmt { body, .. }) | Stmt::While(WhileStmt { body, .. }) = current {
            depth += 1;
            current = body.as_ref();
        }

        depth
    }

    /// Swaps the body out for a placeholder leaf and returns it.
    fn take_body(&mut self) -> Option<Stmt> {
        match self {
            Stmt::If(IfStmt { body, .. }) | Stmt::While(WhileStmt { body, .. }) => {
                Some(std::mem::replace(body.as_mut(), Stmt::placeholder()))
            }
            Stmt::Assignment(_) => None,
        }
    }

    fn placeholder() -> Stmt {
        Stmt::Assignment(AssignmentStmt {
            variable: MK_TOKEN!(TokenKind::Unknown, ""),
            value: Expr::new(MK_TOKEN!(TokenKind::Unknown, "")),
        })
    }
}

impl Drop for Stmt {
    fn drop(&mut self) {
        let mut next = self.take_body();

        while let Some(mut stmt) = next {
            next = stmt.take_body();
        }
    }
}

impl Clone for Stmt {
    fn clone(&self) -> Self {
        let (guards, leaf) = self.spine();
        let guards = guards
            .into_iter()
            .map(|(kind, condition)| (kind, condition.clone()))
            .collect();

        Stmt::nest(guards, Stmt::Assignment(leaf.clone()))
    }
}

impl PartialEq for Stmt {
    fn eq(&self, other: &Self) -> bool {
        self.spine() == other.spine()
    }
}

impl Eq for Stmt {}

impl Debug for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (guards, leaf) = self.spine();
        f.debug_struct("Stmt")
            .field("guards", &guards)
            .field("assignment", leaf)
            .finish()
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (guards, leaf) = self.spine();

        for (kind, condition) in &guards {
            match kind {
                GuardKind::If => write!(f, "(if {} ", condition)?,
                GuardKind::While => write!(f, "(while {} ", condition)?,
            }
        }

        write!(f, "(= {} {})", leaf.variable.value, leaf.value)?;

        for _ in &guards {
            write!(f, ")")?;
        }

        Ok(())
    }
}
