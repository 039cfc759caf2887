//! cssx Parser - source text to AST
//!
//! Three input shapes are accepted:
//! - pipeline sugar: `.section .item >> :nth(2) >> :text()`
//! - an expression starting with `:`: `:attr("href", :first(a.cta))`
//! - anything else, taken verbatim as one selector: `.product`

pub mod error;
pub mod expression_parser;
pub mod options;
pub mod pipeline;
pub mod scanner;

// Re-export main parser types
pub use error::{ParseError, ParseErrorKind, Result};
pub use expression_parser::ExpressionParser;
pub use options::ParserOptions;
pub use pipeline::PipelineParser;

use cssx_core::ast::{Ast, Expr};
use scanner::trim_ws;

/// Parse `input` into an AST with default options
pub fn parse(input: &str) -> Result<Ast> {
    parse_with_options(input, &ParserOptions::default())
}

/// Alias for [`parse`]
pub fn parse_to_ast(input: &str) -> Result<Ast> {
    parse(input)
}

/// Parse `input` into an AST
pub fn parse_with_options(input: &str, options: &ParserOptions) -> Result<Ast> {
    if let Some(segments) = pipeline::split_pipeline_segments(input) {
        log::debug!("parsing {} bytes in pipeline mode", input.len());
        return PipelineParser::parse_segments(&segments, options);
    }

    let (trimmed, leading) = trim_ws(input);
    if trimmed.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyInput, 0));
    }

    if trimmed.starts_with(':') {
        log::debug!("parsing {} bytes in expression mode", input.len());
        let mut parser = ExpressionParser::new(input, options);
        let expr = parser.parse_expr()?;
        parser.expect_end()?;
        return Ok(Ast::new(expr));
    }

    log::debug!("accepting input as a plain selector");
    Ok(Ast::new(Expr::selector(trimmed, leading)))
}
