/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Definitions for various expression types
/// - statements: Definitions for various statement types
pub mod expressions;
pub mod statements;
