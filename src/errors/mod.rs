//! Error types for the front end.
//!
//! The lexer cannot fail, so the only error is the parser's `SyntaxError`:
//!
//! - The offending token and the cursor position where it was found
//! - A name and a suggestion for reporting it to a user

pub mod errors;

#[cfg(test)]
mod tests;
