use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Var);
        map.insert("arr", TokenKind::Arr);
        map.insert("exit", TokenKind::Exit);
        map.insert("set", TokenKind::Set);
        map.insert("go", TokenKind::Go);
        map.insert("in", TokenKind::In);
        map.insert("out", TokenKind::Out);
        map.insert("ifz", TokenKind::Ifz);
        map.insert("el", TokenKind::El);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    Assignment, // =
    Semicolon,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Var,
    Arr,
    Exit,
    Set,
    Go,
    In,
    Out,
    Ifz,
    El,
}

impl TokenKind {
    /// Returns whether the kind is one of the four binary operators.
    pub fn is_bin_op(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus | TokenKind::Dash | TokenKind::Star | TokenKind::Slash
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}
