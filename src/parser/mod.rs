//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive descent parser that turns a stream of
//! tokens into a single statement node. It handles:
//!
//! - Statement dispatch through a keyword lookup table
//! - `if` and `while` statements with exactly one nested body statement
//! - Assignments of a single token expression to a variable
//!
//! The parser looks one token ahead and never backtracks. Parsing stops at
//! the first error and stops after the first statement; trailing tokens are
//! left unconsumed.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
