use super::expressions::Expr;

/// Array declarations default to this size when the source omits one,
/// mirroring the fixed-tape convention (`arr x;` and `arr x[];`).
pub const DEFAULT_ARRAY_SIZE: usize = 30000;

/// Statement
///
/// Every statement kind in the AST. Nested scopes and the optional `el`
/// branch are exclusively owned by their enclosing statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `exit <expr> ;`
    Exit { expr: Expr },
    /// `var <ident> (= <expr>)? ;` - initializer optional
    VarDecl { name: String, expr: Option<Expr> },
    /// `arr <ident> ([ <int-literal>? ])? ;` - size defaults to 30000
    ArrayDecl { name: String, size: usize },
    /// `<ident> ([ <expr> ])? = <expr> ;` - index present for array-element
    /// assignment, absent for plain assignment
    Assign {
        dest: String,
        index: Option<Expr>,
        expr: Expr,
    },
    /// `set <ident> ;` - declares a label
    Label { name: String },
    /// `go <ident> ;` - unconditional jump to a label
    Goto { dest: String },
    /// Byte input as a statement. Part of the data model handed to later
    /// stages; no statement grammar currently produces it.
    Input { byte_count: Expr },
    /// `out <ident> ;`
    Output { name: String },
    /// `ifz <expr> <scope> (el <scope>)?` - body runs when the condition
    /// evaluates to zero
    IfZero {
        cond: Expr,
        then_scope: Scope,
        else_stmt: Option<Box<Stmt>>,
    },
    /// The `el` branch of an `ifz`, kept as a statement to match the grammar
    Else { scope: Scope },
}

/// Scope
/// A brace-delimited sequence of statements. Always non-empty; the grammar
/// rejects `{}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scope {
    pub body: Vec<Stmt>,
}

/// Program
/// The parse root: the ordered top-level statements of a source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
}
