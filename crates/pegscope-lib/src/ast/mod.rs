//! Grammar AST: node types, the external parser boundary, and a programmatic builder.

pub mod builder;
pub mod nodes;
pub mod parser;

#[cfg(test)]
mod parser_tests;

pub use builder::AstBuilder;
pub use nodes::{
    AstError, ClassPart, Expr, ExprKind, Grammar, Initializer, Location, NodeId, Point, Rule,
};
pub use parser::{GrammarError, GrammarParser, PegjsOutput};
