//! Code generation module
//!
//! Transforms the AST into the postfix IR.

pub mod pipeline_builder;

pub use pipeline_builder::PipelineBuilder;
