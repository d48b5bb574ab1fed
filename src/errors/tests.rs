//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.nex".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.nex".to_string()));
    let error = Error::new(
        ErrorImpl::ExpectedStatement {
            token: "}".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_out_of_range_error() {
    let error = Error::new(
        ErrorImpl::OutOfRange { index: 7 },
        Position(0, Rc::new("test.nex".to_string())),
    );

    assert_eq!(error.get_error_name(), "OutOfRange");
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: "5".to_string(),
        },
        Position(0, Rc::new("test.nex".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_unexpected_token_tip_names_both_kinds() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: "}".to_string(),
        },
        Position(0, Rc::new("test.nex".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => {
            assert!(suggestion.contains("Semicolon"));
            assert!(suggestion.contains("}"));
        }
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_expected_term_error() {
    let error = Error::new(
        ErrorImpl::ExpectedTerm {
            token: ";".to_string(),
        },
        Position(0, Rc::new("test.nex".to_string())),
    );

    assert_eq!(error.get_error_name(), "ExpectedTerm");
}

#[test]
fn test_expected_statement_error() {
    let error = Error::new(
        ErrorImpl::ExpectedStatement {
            token: "+".to_string(),
        },
        Position(0, Rc::new("test.nex".to_string())),
    );

    assert_eq!(error.get_error_name(), "ExpectedStatement");
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Position(0, Rc::new("test.nex".to_string())),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(
        ErrorImpl::NestingTooDeep,
        Position(0, Rc::new("test.nex".to_string())),
    );

    assert_eq!(error.get_error_name(), "NestingTooDeep");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Rc::new("test.nex".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
