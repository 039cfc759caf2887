//! Compiler error types

use cssx_core::error::ParseError;
use thiserror::Error;

/// Stack simulation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("pipeline has no operations")]
    EmptyPipeline,

    #[error("op {index} needs {needed} operands but only {available} are on the stack")]
    StackUnderflow {
        index: usize,
        needed: usize,
        available: usize,
    },

    #[error("pipeline leaves {final_depth} values on the stack instead of 1")]
    UnbalancedStack { final_depth: usize },
}

/// Compiler error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    /// Syntax error, or a defensive IR-builder failure
    #[error(transparent)]
    Syntax(#[from] ParseError),

    /// Stack analysis rejected the generated pipeline
    #[error("stack analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;
    use cssx_core::error::ParseErrorKind;

    #[test]
    fn test_syntax_error_is_transparent() {
        let err: CompileError = ParseError::new(ParseErrorKind::EmptyInput, 0).into();
        assert_eq!(err.to_string(), "empty input at 0");
    }

    #[test]
    fn test_analysis_error_message() {
        let err: CompileError = AnalysisError::StackUnderflow {
            index: 0,
            needed: 1,
            available: 0,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "stack analysis failed: op 0 needs 1 operands but only 0 are on the stack"
        );
    }
}
