use crate::{
    ast::statements::{Scope, Stmt, DEFAULT_ARRAY_SIZE},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
};

use super::parser::Parser;

/// Parses exactly one statement, dispatching on the leading token's kind.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.peek_kind()? {
        TokenKind::Var => parse_var_decl_stmt(parser),
        TokenKind::Arr => parse_array_decl_stmt(parser),
        TokenKind::Identifier => parse_assign_stmt(parser),
        TokenKind::Exit => parse_exit_stmt(parser),
        TokenKind::Set => parse_label_stmt(parser),
        TokenKind::Go => parse_goto_stmt(parser),
        TokenKind::Out => parse_output_stmt(parser),
        TokenKind::Ifz => parse_ifz_stmt(parser),
        _ => Err(Error::new(
            ErrorImpl::ExpectedStatement {
                token: parser.peek()?.value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// `var <ident> (= <expr>)? ;` - the initializer is optional.
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.consume()?;
    let name = parser.expect(TokenKind::Identifier)?.value;

    if parser.peek_kind()? == TokenKind::Semicolon {
        parser.consume()?;
        return Ok(Stmt::VarDecl { name, expr: None });
    }

    parser.expect(TokenKind::Assignment)?;
    let expr = parse_expr(parser, 1)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::VarDecl {
        name,
        expr: Some(expr),
    })
}

/// `arr <ident> ([ <int-literal>? ])? ;`
///
/// Both `arr x;` and `arr x[];` declare an array of the default size
/// 30000; only an explicit literal overrides it.
pub fn parse_array_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.consume()?;
    let name = parser.expect(TokenKind::Identifier)?.value;

    if parser.peek_kind()? == TokenKind::Semicolon {
        parser.consume()?;
        return Ok(Stmt::ArrayDecl {
            name,
            size: DEFAULT_ARRAY_SIZE,
        });
    }

    parser.expect(TokenKind::OpenBracket)?;

    if parser.peek_kind()? == TokenKind::CloseBracket {
        parser.consume()?;
        parser.expect(TokenKind::Semicolon)?;
        return Ok(Stmt::ArrayDecl {
            name,
            size: DEFAULT_ARRAY_SIZE,
        });
    }

    let size_token = parser.expect(TokenKind::Number)?;
    let size = size_token.value.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: size_token.value.clone(),
            },
            size_token.span.start.clone(),
        )
    })?;

    parser.expect(TokenKind::CloseBracket)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::ArrayDecl { name, size })
}

/// `<ident> ([ <expr> ])? = <expr> ;` - an index makes it an
/// array-element assignment, otherwise it assigns the variable itself.
pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let dest = parser.consume()?.value;

    let index;
    if parser.peek_kind()? == TokenKind::OpenBracket {
        parser.consume()?;
        index = Some(parse_expr(parser, 1)?);
        parser.expect(TokenKind::CloseBracket)?;
    } else {
        index = None;
    }

    parser.expect(TokenKind::Assignment)?;
    let expr = parse_expr(parser, 1)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Assign { dest, index, expr })
}

/// `exit <expr> ;`
pub fn parse_exit_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.consume()?;
    let expr = parse_expr(parser, 1)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Exit { expr })
}

/// `set <ident> ;` - declares a label. Whether a matching `go` target
/// exists is left to later passes; the parser keeps labels purely
/// syntactic.
pub fn parse_label_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.consume()?;
    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Label { name })
}

/// `go <ident> ;` - unconditional jump to a label.
pub fn parse_goto_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.consume()?;
    let dest = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Goto { dest })
}

/// `out <ident> ;`
pub fn parse_output_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.consume()?;
    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Output { name })
}

/// `ifz <expr> <scope> (el <scope>)?` - no trailing semicolon. The `el`
/// clause is optional and is stored as an `Else` statement to match the
/// grammar's shape.
pub fn parse_ifz_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.consume()?;

    let cond = parse_expr(parser, 1)?;
    let then_scope = parse_scope(parser)?;

    let else_stmt;
    if parser.peek_kind()? == TokenKind::El {
        parser.consume()?;
        let scope = parse_scope(parser)?;
        else_stmt = Some(Box::new(Stmt::Else { scope }));
    } else {
        else_stmt = None;
    }

    Ok(Stmt::IfZero {
        cond,
        then_scope,
        else_stmt,
    })
}

/// Parses a brace-delimited scope: `{` followed by one or more
/// statements, terminated by `}`.
///
/// Empty blocks are not syntactically valid: the loop demands a statement
/// before it ever checks for the closing brace, so `{}` fails with
/// `ExpectedStatement` on the `}`.
pub fn parse_scope(parser: &mut Parser) -> Result<Scope, Error> {
    parser.enter_nested()?;
    parser.expect(TokenKind::OpenCurly)?;

    let mut body = Vec::new();
    loop {
        if parser.peek_kind()? == TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::CloseCurly,
                    found: parser.peek()?.value.clone(),
                },
                parser.get_position(),
            ));
        }

        body.push(parse_stmt(parser)?);

        if parser.peek_kind()? == TokenKind::CloseCurly {
            break;
        }
    }

    parser.consume()?;
    parser.leave_nested();

    Ok(Scope { body })
}
