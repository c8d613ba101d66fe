use std::collections::HashMap;

use crate::{ast::ast::GuardKind, lexer::tokens::Keyword};

use super::parser::Parser;

pub fn create_token_lookups(parser: &mut Parser) {
    // `else` is reserved but deliberately has no statement
    parser.stmt(Keyword::If, GuardKind::If);
    parser.stmt(Keyword::While, GuardKind::While);
}

pub type StmtLookup = HashMap<Keyword, GuardKind>;
