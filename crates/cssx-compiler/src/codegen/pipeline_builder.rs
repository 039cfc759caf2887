//! Pipeline builder
//!
//! Post-order linearization of an AST: children before parent, arguments
//! left to right.

use cssx_core::ast::{Ast, CallExpr, Expr, PipelineExpr};
use cssx_core::error::{ParseError, ParseErrorKind, Result};
use cssx_core::ir::{Op, Pipeline};

/// Pipeline builder
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    ops: Vec<Op>,
    piped_calls: Vec<usize>,
}

impl PipelineBuilder {
    /// Linearize `ast` into a postfix pipeline
    pub fn build(ast: &Ast) -> Result<Pipeline> {
        let mut builder = Self::default();
        builder.emit_expr(&ast.expr)?;

        let mut pipeline = Pipeline::new(builder.ops);
        pipeline.metadata.piped_calls = builder.piped_calls;
        log::debug!(
            "built pipeline with {} ops ({} piped calls)",
            pipeline.len(),
            pipeline.metadata.piped_calls.len()
        );
        Ok(pipeline)
    }

    fn emit_expr(&mut self, expr: &Expr) -> Result<()> {
        match expr {
            Expr::Selector(selector) => self.ops.push(Op::select(selector.raw.as_str())),
            Expr::Str(lit) => self.ops.push(Op::str(lit.value.as_str())),
            Expr::Number(lit) => self.ops.push(Op::num(lit.value)),
            Expr::Call(call) => self.emit_call(call)?,
            Expr::Pipeline(pipeline) => self.emit_pipeline(pipeline)?,
        }
        Ok(())
    }

    fn emit_call(&mut self, call: &CallExpr) -> Result<()> {
        for arg in &call.args {
            self.emit_expr(arg)?;
        }
        self.ops.push(Op::call(call.name.as_str(), call.args.len()));
        Ok(())
    }

    /// Stages are emitted exactly like ordinary calls; only the metadata
    /// records that they also consume the running value.
    fn emit_pipeline(&mut self, pipeline: &PipelineExpr) -> Result<()> {
        if pipeline.base.raw.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::MissingPipelineBase,
                pipeline.pos,
            ));
        }
        self.ops.push(Op::select(pipeline.base.raw.as_str()));

        for call in &pipeline.calls {
            self.emit_call(call)?;
            self.piped_calls.push(self.ops.len() - 1);
        }
        Ok(())
    }
}
