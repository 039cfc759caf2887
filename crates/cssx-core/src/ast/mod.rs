//! Abstract Syntax Tree (AST) definitions for cssx
//!
//! A parsed query is a single root expression; see [`Expr`] for the closed
//! set of node kinds.

pub mod expression;

pub use expression::{CallExpr, Expr, NumberLit, PipelineExpr, SelectorExpr, StringLit};

use serde::{Deserialize, Serialize};

/// Root of a parsed cssx expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ast {
    pub expr: Expr,
}

impl Ast {
    pub fn new(expr: Expr) -> Self {
        Self { expr }
    }
}

impl From<Expr> for Ast {
    fn from(expr: Expr) -> Self {
        Self::new(expr)
    }
}
