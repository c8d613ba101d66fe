/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The statement node and its tag
/// - expressions: The single token expression
/// - statements: Payloads of each statement kind
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
