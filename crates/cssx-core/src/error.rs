//! Error types for cssx
//!
//! Every component reports failures with the same shape: a message plus a
//! byte offset into the original top-level input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a syntax (or defensive IR) failure.
///
/// The `Display` text of each variant is the human-readable message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseErrorKind {
    #[error("empty input")]
    EmptyInput,

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unterminated string")]
    UnterminatedString,

    #[error("invalid number")]
    InvalidNumber,

    #[error("expected ':'")]
    ExpectedColon,

    #[error("expected identifier")]
    ExpectedIdentifier,

    #[error("expected '('")]
    ExpectedOpenParen,

    #[error("expected ')'")]
    ExpectedCloseParen,

    #[error("expected ',' or ')'")]
    ExpectedCommaOrCloseParen,

    #[error("expected expression")]
    ExpectedExpression,

    #[error("expected selector")]
    ExpectedSelector,

    #[error("pipeline base selector is empty")]
    EmptyPipelineBase,

    #[error("pipeline stage is empty")]
    EmptyPipelineStage,

    #[error("pipeline base must be a selector")]
    PipelineBaseNotSelector,

    #[error("pipeline stage must be a call")]
    PipelineStageNotCall,

    #[error("unexpected trailing input")]
    TrailingInput,

    #[error("maximum nesting depth of {limit} exceeded")]
    NestingTooDeep { limit: usize },

    /// Only reachable from a hand-built AST.
    #[error("pipeline missing base selector")]
    MissingPipelineBase,
}

/// Syntax error with a byte position in the original input
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{kind} at {pos}")]
pub struct ParseError {
    /// What went wrong
    pub kind: ParseErrorKind,
    /// Byte offset into the original top-level input
    pub pos: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, pos: usize) -> Self {
        Self { kind, pos }
    }

    /// Human-readable message without the position suffix
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
