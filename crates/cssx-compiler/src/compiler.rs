//! Main compiler
//!
//! Provides `compile` (parse then build) and a configurable `Compiler` that
//! can also run stack analysis over the result.

use crate::analysis::StackAnalyzer;
use crate::codegen::PipelineBuilder;
use crate::error::Result;
use cssx_core::ast::Ast;
use cssx_core::ir::Pipeline;
use cssx_parser::{parse_with_options, ParserOptions};
use serde::{Deserialize, Serialize};

/// Linearize a parsed AST into a pipeline
pub fn build_pipeline(ast: &Ast) -> cssx_core::Result<Pipeline> {
    PipelineBuilder::build(ast)
}

/// Parse `input` and build its pipeline
pub fn compile(input: &str) -> cssx_core::Result<Pipeline> {
    let ast = cssx_parser::parse(input)?;
    build_pipeline(&ast)
}

/// Compiler options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerOptions {
    /// Options forwarded to the parser
    pub parser: ParserOptions,
    /// Run stack analysis on every compiled pipeline
    pub enable_stack_analysis: bool,
    /// Count the running value as an extra operand of piped calls during
    /// analysis
    pub include_piped_operand: bool,
}

impl CompilerOptions {
    pub fn with_parser(mut self, parser: ParserOptions) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_stack_analysis(mut self, enable: bool) -> Self {
        self.enable_stack_analysis = enable;
        self
    }

    pub fn with_piped_operand(mut self, include: bool) -> Self {
        self.include_piped_operand = include;
        self
    }
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            parser: ParserOptions::default(),
            enable_stack_analysis: true,
            include_piped_operand: true,
        }
    }
}

/// The cssx compiler
#[derive(Debug, Clone)]
pub struct Compiler {
    options: CompilerOptions,
    analyzer: StackAnalyzer,
}

impl Compiler {
    /// Create a new compiler instance with default options
    pub fn new() -> Self {
        Self::with_options(CompilerOptions::default())
    }

    /// Create a new compiler instance with custom options
    pub fn with_options(options: CompilerOptions) -> Self {
        let analyzer = StackAnalyzer::new().with_piped_operand(options.include_piped_operand);
        Self { options, analyzer }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Compile source text into a pipeline
    pub fn compile(&self, input: &str) -> Result<Pipeline> {
        let ast = parse_with_options(input, &self.options.parser)?;
        self.compile_ast(&ast)
    }

    /// Compile an already parsed AST
    pub fn compile_ast(&self, ast: &Ast) -> Result<Pipeline> {
        let pipeline = PipelineBuilder::build(ast)?;

        if self.options.enable_stack_analysis {
            let profile = self.analyzer.analyze(&pipeline)?;
            log::debug!(
                "stack analysis passed: max depth {}, final depth {}",
                profile.max_depth,
                profile.final_depth
            );
        }

        Ok(pipeline)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
