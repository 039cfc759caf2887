//! cssx Core - Core types and definitions for the cssx query language
//!
//! This crate provides the fundamental types shared by the parser and compiler:
//! - AST (Abstract Syntax Tree) definitions
//! - IR (the postfix operation sequence handed to an evaluator)
//! - Error types

pub mod ast;
pub mod error;
pub mod ir;

// Re-export commonly used types
pub use ast::{Ast, Expr};
pub use error::{ParseError, ParseErrorKind, Result};
pub use ir::{Op, OpKind, Pipeline};
