//! Stack analysis
//!
//! Simulates the evaluator's value stack over a pipeline without touching a
//! document.

use crate::error::AnalysisError;
use cssx_core::ir::Pipeline;
use serde::{Deserialize, Serialize};

/// Stack shape of a successfully analyzed pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackProfile {
    /// Deepest point the stack reaches
    pub max_depth: usize,
    /// Values left after the last op
    pub final_depth: usize,
}

impl StackProfile {
    /// Exactly one result remains
    pub fn is_balanced(&self) -> bool {
        self.final_depth == 1
    }
}

/// Stack analyzer
#[derive(Debug, Clone)]
pub struct StackAnalyzer {
    include_piped_operand: bool,
}

impl StackAnalyzer {
    /// Analyzer that honors the piped-operand convention
    pub fn new() -> Self {
        Self {
            include_piped_operand: true,
        }
    }

    /// Analyzer that treats every call as consuming exactly its arity
    pub fn explicit_arity_only() -> Self {
        Self {
            include_piped_operand: false,
        }
    }

    pub fn with_piped_operand(mut self, include: bool) -> Self {
        self.include_piped_operand = include;
        self
    }

    /// Simulate `pipeline` and report its stack profile.
    ///
    /// With the piped operand included, a well-formed pipeline must end with
    /// exactly one value.
    pub fn analyze(&self, pipeline: &Pipeline) -> Result<StackProfile, AnalysisError> {
        if pipeline.is_empty() {
            return Err(AnalysisError::EmptyPipeline);
        }

        let mut depth = 0usize;
        let mut max_depth = 0usize;
        for (index, op) in pipeline.ops.iter().enumerate() {
            let mut needed = op.pops();
            if self.include_piped_operand && pipeline.is_piped_call(index) {
                needed += 1;
            }
            if depth < needed {
                return Err(AnalysisError::StackUnderflow {
                    index,
                    needed,
                    available: depth,
                });
            }
            depth = depth - needed + op.pushes();
            max_depth = max_depth.max(depth);
        }

        let profile = StackProfile {
            max_depth,
            final_depth: depth,
        };
        if self.include_piped_operand && !profile.is_balanced() {
            return Err(AnalysisError::UnbalancedStack { final_depth: depth });
        }
        log::trace!("stack profile {:?}", profile);
        Ok(profile)
    }
}

impl Default for StackAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
