//! Integration tests for the front end.
//!
//! These tests verify that the pipeline works correctly from source code
//! through tokenization and parsing to a finished AST.

use nexc::{
    ast::{
        expressions::{BinOp, Expr},
        statements::{Program, Stmt},
    },
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::parse,
};
use std::rc::Rc;

fn run_frontend(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some("test.nex".to_string()))?;
    parse(tokens, Rc::new("test.nex".to_string()))
}

#[test]
fn test_parse_simple_program() {
    let source = r#"
        var x = 42;
        exit x;
    "#;

    let program = run_frontend(source).unwrap();
    assert_eq!(program.body.len(), 2);
}

#[test]
fn test_parse_counting_loop() {
    let source = r#"
        var count = 10;
        set loop;
        count = count - 1;
        ifz count {
            exit 0;
        }
        go loop;
    "#;

    let program = run_frontend(source).unwrap();
    assert_eq!(program.body.len(), 5);
    assert!(matches!(program.body[1], Stmt::Label { .. }));
    assert!(matches!(program.body[4], Stmt::Goto { .. }));
}

#[test]
fn test_parse_tape_program() {
    let source = r#"
        arr tape;
        var head = 0;
        tape[head] = in;
        var cell = tape[head];
        out cell;
    "#;

    let program = run_frontend(source).unwrap();

    assert_eq!(
        program.body[0],
        Stmt::ArrayDecl {
            name: "tape".to_string(),
            size: 30000,
        }
    );
    assert_eq!(
        program.body[2],
        Stmt::Assign {
            dest: "tape".to_string(),
            index: Some(Expr::Identifier {
                name: "head".to_string()
            }),
            expr: Expr::Input,
        }
    );
    assert_eq!(
        program.body[4],
        Stmt::Output {
            name: "cell".to_string()
        }
    );
}

#[test]
fn test_parse_expression_precedence_end_to_end() {
    let program = run_frontend("exit 1 + 2 * 3 - 4 / 2;").unwrap();

    // (1 + (2 * 3)) - (4 / 2)
    let expected = Expr::BinaryOp {
        op: BinOp::Sub,
        left: Box::new(Expr::BinaryOp {
            op: BinOp::Add,
            left: Box::new(Expr::IntLiteral { value: 1 }),
            right: Box::new(Expr::BinaryOp {
                op: BinOp::Mul,
                left: Box::new(Expr::IntLiteral { value: 2 }),
                right: Box::new(Expr::IntLiteral { value: 3 }),
            }),
        }),
        right: Box::new(Expr::BinaryOp {
            op: BinOp::Div,
            left: Box::new(Expr::IntLiteral { value: 4 }),
            right: Box::new(Expr::IntLiteral { value: 2 }),
        }),
    };

    assert_eq!(program.body, vec![Stmt::Exit { expr: expected }]);
}

#[test]
fn test_parse_conditional_with_else_branch() {
    let source = r#"
        var flag = in;
        ifz flag {
            out flag;
        } el {
            exit 1;
        }
    "#;

    let program = run_frontend(source).unwrap();

    match &program.body[1] {
        Stmt::IfZero {
            then_scope,
            else_stmt,
            ..
        } => {
            assert_eq!(then_scope.body.len(), 1);
            assert!(matches!(
                else_stmt.as_deref(),
                Some(Stmt::Else { scope }) if scope.body.len() == 1
            ));
        }
        other => panic!("Expected IfZero, got {:?}", other),
    }
}

#[test]
fn test_parse_comments_are_skipped() {
    let source = r#"
        // setup
        var x = 1; // inline comment
        // done
    "#;

    let program = run_frontend(source).unwrap();
    assert_eq!(program.body.len(), 1);
}

#[test]
fn test_parse_empty_source() {
    let program = run_frontend("").unwrap();
    assert!(program.body.is_empty());
}

#[test]
fn test_parse_deterministic_trees() {
    let source = r#"
        arr buf[256];
        var i = 0;
        buf[i] = in * 2 + 1;
        ifz buf[i] { exit 0; } el { out i; }
    "#;

    assert_eq!(run_frontend(source).unwrap(), run_frontend(source).unwrap());
}

#[test]
fn test_lex_error_invalid_token() {
    let result = run_frontend("var x = ?;");
    assert!(result.is_err(), "Should fail on invalid token");
    assert_eq!(result.err().unwrap().get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_parse_error_missing_semicolon() {
    let result = run_frontend("var x = 42");
    assert!(result.is_err(), "Should fail on missing semicolon");
    assert_eq!(result.err().unwrap().get_error_name(), "UnexpectedToken");
}

#[test]
fn test_parse_error_literal_instead_of_identifier() {
    let result = run_frontend("var 5 = 1;");
    assert!(result.is_err(), "Should fail on literal in identifier position");

    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "UnexpectedToken");
    match error.get_tip() {
        nexc::errors::errors::ErrorTip::Suggestion(tip) => {
            assert!(tip.contains("Identifier"));
            assert!(tip.contains("5"));
        }
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_parse_error_empty_block() {
    let result = run_frontend("ifz x {}");
    assert!(result.is_err(), "Empty blocks are not syntactically valid");
    assert_eq!(result.err().unwrap().get_error_name(), "ExpectedStatement");
}

#[test]
fn test_parse_error_unclosed_scope() {
    let result = run_frontend("ifz x { exit 0;");
    assert!(result.is_err(), "Should fail on missing closing brace");
    assert_eq!(result.err().unwrap().get_error_name(), "UnexpectedToken");
}

#[test]
fn test_parse_error_missing_array_bracket() {
    let result = run_frontend("arr x[10;");
    assert!(result.is_err(), "Should fail on unclosed size bracket");
    assert_eq!(result.err().unwrap().get_error_name(), "UnexpectedToken");
}

#[test]
fn test_parse_error_dangling_operator() {
    let result = run_frontend("exit 1 +;");
    assert!(result.is_err(), "Should fail on operator with no rhs");
    assert_eq!(result.err().unwrap().get_error_name(), "ExpectedTerm");
}

#[test]
fn test_parse_error_stray_else() {
    let result = run_frontend("el { exit 0; }");
    assert!(result.is_err(), "el without ifz is not a statement");
    assert_eq!(result.err().unwrap().get_error_name(), "ExpectedStatement");
}
