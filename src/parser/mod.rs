//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It is a single-pass recursive-descent
//! parser with single-token lookahead and handles:
//!
//! - Statement parsing (declarations, assignments, labels, jumps, I/O,
//!   the `ifz` conditional and its scopes)
//! - Expression parsing (precedence climbing over the four binary
//!   operators, with array indexing and the `in` term)
//! - Fail-fast error reporting; the first grammar violation aborts the
//!   whole parse

pub mod expr;
pub mod parser;
pub mod stmt;
