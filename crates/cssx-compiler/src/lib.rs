//! cssx Compiler - AST to postfix pipeline
//!
//! This crate linearizes a cssx AST into the flat `Op` sequence consumed by
//! an external evaluator.

pub mod analysis;
pub mod codegen;
pub mod compiler;
pub mod error;

// Re-export main types
pub use analysis::{StackAnalyzer, StackProfile};
pub use codegen::PipelineBuilder;
pub use compiler::{build_pipeline, compile, Compiler, CompilerOptions};
pub use error::{AnalysisError, CompileError, Result};

// Re-export commonly used types from dependencies
pub use cssx_core::ir::{Op, OpKind, Pipeline, PipelineMetadata};
pub use cssx_core::{Ast, ParseError, ParseErrorKind};
pub use cssx_parser::{parse, ParserOptions};
