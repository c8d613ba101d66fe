use tracing::trace;

use crate::ast::expressions::Expr;

use super::parser::Parser;

/// Consumes the current token, whatever it is, as an expression.
///
/// This includes `EndOfInput`, so `x =` parses as an assignment of an empty
/// expression.
pub fn parse_expr(parser: &mut Parser) -> Expr {
    let token = parser.advance().clone();
    trace!(%token, "Parsed expression");
    Expr::new(token)
}
