use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::expressions::{BinOp, Expr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

lazy_static! {
    /// Binding strength of each binary operator. `-` is genuine binary
    /// subtraction, grouped with `+`.
    static ref BIN_OP_PREC: HashMap<TokenKind, i32> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Plus, 1);
        map.insert(TokenKind::Dash, 1);
        map.insert(TokenKind::Star, 2);
        map.insert(TokenKind::Slash, 2);
        map
    };
}

/// Parses the longest valid expression starting at the cursor, by
/// precedence climbing.
///
/// Operators weaker than `min_prec` are left unconsumed so the caller's
/// loop can bind them. The right-hand side recurses with `prec + 1`,
/// which keeps same-precedence chains left-associative: the recursive
/// call refuses them and the loop here absorbs them iteratively instead,
/// building a left-leaning tree.
pub fn parse_expr(parser: &mut Parser, min_prec: i32) -> Result<Expr, Error> {
    parser.enter_nested()?;

    let mut lhs = parse_term(parser)?;

    loop {
        let kind = parser.peek_kind()?;
        if !kind.is_bin_op() || kind == TokenKind::EOF {
            break;
        }

        // Operators missing from the table fall back to the lowest strength
        let prec = *BIN_OP_PREC.get(&kind).unwrap_or(&1);
        if prec < min_prec {
            break;
        }

        let op = match BinOp::from_token_kind(kind) {
            Some(op) => op,
            None => break,
        };
        parser.consume()?;

        let rhs = parse_expr(parser, prec + 1)?;

        lhs = Expr::BinaryOp {
            op,
            left: Box::new(lhs),
            right: Box::new(rhs),
        };
    }

    parser.leave_nested();
    Ok(lhs)
}

/// Parses a single term: the atomic unit of an expression with respect to
/// binary operators. A term is an integer literal, an identifier, an array
/// access (whose index is itself a full expression), or the `in` keyword.
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.peek_kind()? {
        TokenKind::Number => {
            let token = parser.consume()?;
            let value = token.value.parse().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )
            })?;

            Ok(Expr::IntLiteral { value })
        }
        TokenKind::Identifier => {
            if parser.peek_at(1)?.kind == TokenKind::OpenBracket {
                let name = parser.consume()?.value;
                parser.consume()?;

                let index = parse_expr(parser, 1)?;
                parser.expect(TokenKind::CloseBracket)?;

                return Ok(Expr::ArrayAccess {
                    name,
                    index: Box::new(index),
                });
            }

            Ok(Expr::Identifier {
                name: parser.consume()?.value,
            })
        }
        TokenKind::In => {
            parser.consume()?;
            Ok(Expr::Input)
        }
        _ => Err(Error::new(
            ErrorImpl::ExpectedTerm {
                token: parser.peek()?.value.clone(),
            },
            parser.get_position(),
        )),
    }
}
