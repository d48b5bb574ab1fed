use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// Binary Operator
/// The four arithmetic operators the language supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Maps an operator token kind onto its operator, if it is one.
    pub fn from_token_kind(kind: TokenKind) -> Option<BinOp> {
        match kind {
            TokenKind::Plus => Some(BinOp::Add),
            TokenKind::Dash => Some(BinOp::Sub),
            TokenKind::Star => Some(BinOp::Mul),
            TokenKind::Slash => Some(BinOp::Div),
            _ => None,
        }
    }
}

impl Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinOp::Add => write!(f, "+"),
            BinOp::Sub => write!(f, "-"),
            BinOp::Mul => write!(f, "*"),
            BinOp::Div => write!(f, "/"),
        }
    }
}

/// Expression
///
/// Every expression kind in the AST. Sub-expressions are exclusively owned,
/// boxed only where the recursion would otherwise make the type infinitely
/// sized. A parse either produces a fully-formed tree or fails; there is no
/// partial-expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal, e.g. `42`
    IntLiteral { value: i64 },
    /// A plain identifier reference, e.g. `x`
    Identifier { name: String },
    /// An array element read, e.g. `buf[i + 1]`
    ArrayAccess { name: String, index: Box<Expr> },
    /// A binary arithmetic operation, e.g. `a * 2`
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// The `in` keyword used as a term: reads a value as an expression
    Input,
}
