//! IR operations
//!
//! One [`Op`] per AST leaf or call, emitted in post-order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single postfix operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Op {
    /// Resolve a selector against the evaluator's document and push the match
    Select {
        /// Raw selector text
        selector: String,
    },

    /// Pop `arity` values (in push order), apply `name`, push the result
    Call {
        /// Pseudo-function name
        name: String,
        /// Number of explicit, source-written arguments
        arity: usize,
    },

    /// Push a string constant
    Str { value: String },

    /// Push a numeric constant
    Num { value: f64 },
}

/// Kind of an [`Op`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    Select,
    Call,
    Str,
    Num,
}

impl Op {
    pub fn select(selector: impl Into<String>) -> Self {
        Op::Select {
            selector: selector.into(),
        }
    }

    pub fn call(name: impl Into<String>, arity: usize) -> Self {
        Op::Call {
            name: name.into(),
            arity,
        }
    }

    pub fn str(value: impl Into<String>) -> Self {
        Op::Str {
            value: value.into(),
        }
    }

    pub fn num(value: f64) -> Self {
        Op::Num { value }
    }

    pub fn kind(&self) -> OpKind {
        match self {
            Op::Select { .. } => OpKind::Select,
            Op::Call { .. } => OpKind::Call,
            Op::Str { .. } => OpKind::Str,
            Op::Num { .. } => OpKind::Num,
        }
    }

    /// Number of stack values this op consumes (explicit operands only)
    pub fn pops(&self) -> usize {
        match self {
            Op::Call { arity, .. } => *arity,
            _ => 0,
        }
    }

    /// Number of stack values this op produces
    pub fn pushes(&self) -> usize {
        1
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpKind::Select => "Select",
            OpKind::Call => "Call",
            OpKind::Str => "Str",
            OpKind::Num => "Num",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Select { selector } => write!(f, "select {:?}", selector),
            Op::Call { name, arity } => write!(f, "call {}/{}", name, arity),
            Op::Str { value } => write!(f, "str {:?}", value),
            Op::Num { value } => write!(f, "num {}", value),
        }
    }
}
