//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{ErrorImpl, SyntaxError};
use crate::lexer::tokens::TokenKind;
use crate::MK_TOKEN;

#[test]
fn test_unexpected_token_error() {
    let error = SyntaxError::new(
        ErrorImpl::UnexpectedToken {
            token: MK_TOKEN!(TokenKind::Number, "5"),
        },
        0,
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.token().kind, TokenKind::Number);
    assert_eq!(error.token().value, "5");
}

#[test]
fn test_expected_assignment_error() {
    let error = SyntaxError::new(
        ErrorImpl::ExpectedAssignment {
            token: MK_TOKEN!(TokenKind::Number, "5"),
        },
        1,
    );

    assert_eq!(error.get_error_name(), "ExpectedAssignment");
    assert_eq!(error.get_position(), 1);
    assert!(matches!(error.get_error(), ErrorImpl::ExpectedAssignment { .. }));
}

#[test]
fn test_error_display() {
    let error = SyntaxError::new(
        ErrorImpl::ExpectedAssignment {
            token: MK_TOKEN!(TokenKind::Number, "5"),
        },
        1,
    );

    assert_eq!(
        error.to_string(),
        "expected '=': Token(Number, \"5\") at token 1"
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = SyntaxError::new(
        ErrorImpl::UnexpectedToken {
            token: MK_TOKEN!(TokenKind::Keyword, "else"),
        },
        0,
    );

    assert!(error.get_tip().contains("`else`"));
}

#[test]
fn test_error_tip_end_of_input() {
    let error = SyntaxError::new(
        ErrorImpl::UnexpectedToken {
            token: MK_TOKEN!(TokenKind::EndOfInput, ""),
        },
        2,
    );

    assert_eq!(
        error.get_tip(),
        "Input ended where a statement was expected"
    );
}

#[test]
fn test_error_tip_expected_assignment() {
    let error = SyntaxError::new(
        ErrorImpl::ExpectedAssignment {
            token: MK_TOKEN!(TokenKind::Number, "5"),
        },
        1,
    );
    assert_eq!(error.get_tip(), "Expected `=` after the variable, found `5`");

    let error = SyntaxError::new(
        ErrorImpl::ExpectedAssignment {
            token: MK_TOKEN!(TokenKind::EndOfInput, ""),
        },
        1,
    );
    assert_eq!(error.get_tip(), "Expected `=` but input ended");
}
