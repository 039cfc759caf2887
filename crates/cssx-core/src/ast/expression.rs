//! Expression AST nodes
//!
//! Every node records `pos`, the byte offset of its first character in the
//! original top-level input.

use serde::{Deserialize, Serialize};

/// Raw CSS selector text, passed through to the selector engine verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorExpr {
    pub raw: String,
    pub pos: usize,
}

/// Pseudo call like `:name(args...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    /// Matches `[A-Za-z_][A-Za-z0-9_-]*`
    pub name: String,
    pub args: Vec<Expr>,
    pub pos: usize,
}

/// Quoted string literal, escapes already removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLit {
    pub value: String,
    pub pos: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberLit {
    pub value: f64,
    pub pos: usize,
}

/// Base selector with a chain of calls (`base >> :call() >> :call()`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineExpr {
    /// Never starts with `:`
    pub base: SelectorExpr,
    /// Stages in source order
    pub calls: Vec<CallExpr>,
    pub pos: usize,
}

/// Expression AST node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Raw selector (e.g., `.product`, `a[href*="x,y"]`)
    Selector(SelectorExpr),

    /// Pseudo call (e.g., `:first(h1)`)
    Call(CallExpr),

    /// String literal (e.g., `"href"`)
    Str(StringLit),

    /// Number literal (e.g., `2`, `-0.5`)
    Number(NumberLit),

    /// Pipeline sugar
    Pipeline(PipelineExpr),
}

impl Expr {
    /// Create a selector expression
    pub fn selector(raw: impl Into<String>, pos: usize) -> Self {
        Expr::Selector(SelectorExpr {
            raw: raw.into(),
            pos,
        })
    }

    /// Create a call expression
    pub fn call(name: impl Into<String>, args: Vec<Expr>, pos: usize) -> Self {
        Expr::Call(CallExpr {
            name: name.into(),
            args,
            pos,
        })
    }

    /// Create a string literal expression
    pub fn string(value: impl Into<String>, pos: usize) -> Self {
        Expr::Str(StringLit {
            value: value.into(),
            pos,
        })
    }

    /// Create a number literal expression
    pub fn number(value: f64, pos: usize) -> Self {
        Expr::Number(NumberLit { value, pos })
    }

    /// Create a pipeline expression positioned at its base selector
    pub fn pipeline(base: SelectorExpr, calls: Vec<CallExpr>) -> Self {
        let pos = base.pos;
        Expr::Pipeline(PipelineExpr { base, calls, pos })
    }

    /// Byte offset of this node in the original input
    pub fn pos(&self) -> usize {
        match self {
            Expr::Selector(s) => s.pos,
            Expr::Call(c) => c.pos,
            Expr::Str(s) => s.pos,
            Expr::Number(n) => n.pos,
            Expr::Pipeline(p) => p.pos,
        }
    }
}
