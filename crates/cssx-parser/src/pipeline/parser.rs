//! Pipeline stage parsing
//!
//! Turns split segments into a `PipelineExpr`: segment 0 is the base
//! selector, every later segment is exactly one call.

use super::splitter::Segment;
use crate::expression_parser::ExpressionParser;
use crate::options::ParserOptions;
use cssx_core::ast::{Ast, CallExpr, Expr, SelectorExpr};
use cssx_core::error::{ParseError, ParseErrorKind, Result};

/// Pipeline parser
pub struct PipelineParser;

impl PipelineParser {
    /// Build the pipeline AST from ordered segments
    pub fn parse_segments(segments: &[Segment<'_>], options: &ParserOptions) -> Result<Ast> {
        let (first, stages) = segments
            .split_first()
            .ok_or_else(|| ParseError::new(ParseErrorKind::EmptyPipelineBase, 0))?;

        let base = Self::parse_base(first)?;
        let calls = stages
            .iter()
            .map(|segment| Self::parse_stage(segment, options))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "parsed pipeline: base {:?} with {} stages",
            base.raw,
            calls.len()
        );
        Ok(Ast::new(Expr::pipeline(base, calls)))
    }

    fn parse_base(segment: &Segment<'_>) -> Result<SelectorExpr> {
        let trimmed = segment.trimmed();
        if trimmed.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::EmptyPipelineBase,
                trimmed.start,
            ));
        }
        if trimmed.text.starts_with(':') {
            return Err(ParseError::new(
                ParseErrorKind::PipelineBaseNotSelector,
                trimmed.start,
            ));
        }
        Ok(SelectorExpr {
            raw: trimmed.text.to_string(),
            pos: trimmed.start,
        })
    }

    fn parse_stage(segment: &Segment<'_>, options: &ParserOptions) -> Result<CallExpr> {
        let trimmed = segment.trimmed();
        if trimmed.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::EmptyPipelineStage,
                trimmed.start,
            ));
        }

        let mut parser = ExpressionParser::with_base(trimmed.text, trimmed.start, options);
        if parser.peek() != b':' {
            return Err(ParseError::new(
                ParseErrorKind::PipelineStageNotCall,
                trimmed.start,
            ));
        }
        let call = parser.parse_call()?;
        parser.expect_end()?;
        log::trace!("pipeline stage :{} at {}", call.name, call.pos);
        Ok(call)
    }
}
