use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::OutOfRange { .. } => "OutOfRange",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedTerm { .. } => "ExpectedTerm",
            ErrorImpl::ExpectedStatement { .. } => "ExpectedStatement",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::OutOfRange { .. } => ErrorTip::Suggestion(String::from(
                "Token stream ended unexpectedly, is the source truncated?",
            )),
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}`, found `{}`, did you miss a semicolon?",
                expected, found
            )),
            ErrorImpl::ExpectedTerm { token } => ErrorTip::Suggestion(format!(
                "Expected a literal, identifier or `in` here, found `{}`",
                token
            )),
            ErrorImpl::ExpectedStatement { token } => ErrorTip::Suggestion(format!(
                "`{}` does not start a statement",
                token
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::NestingTooDeep => ErrorTip::Suggestion(String::from(
                "Expressions and scopes can only nest so deep, flatten the source",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("token index {index:?} is out of range")]
    OutOfRange { index: usize },
    #[error("expected {expected}, found {found:?}")]
    UnexpectedToken { expected: TokenKind, found: String },
    #[error("expected term, found {token:?}")]
    ExpectedTerm { token: String },
    #[error("expected statement, found {token:?}")]
    ExpectedStatement { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("nesting depth limit exceeded")]
    NestingTooDeep,
}
