//! IR Pipeline
//!
//! A pipeline is the ordered op sequence handed to an evaluator, plus
//! metadata the ops themselves do not carry.

use crate::ir::Op;
use serde::{Deserialize, Serialize};

/// A postfix op sequence ready for evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    /// The sequence of operations
    pub ops: Vec<Op>,

    /// Pipeline metadata
    #[serde(default)]
    pub metadata: PipelineMetadata,
}

/// Metadata associated with a pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineMetadata {
    /// Indices into `ops` of `Call` ops produced by `>>` stages.
    ///
    /// Such a call consumes the running pipeline value as one extra operand
    /// beyond its recorded arity.
    #[serde(default)]
    pub piped_calls: Vec<usize>,

    /// Version of the compiler that generated this
    pub compiler_version: String,
}

impl Pipeline {
    /// Create a new pipeline
    pub fn new(ops: Vec<Op>) -> Self {
        Self {
            ops,
            metadata: PipelineMetadata::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Whether the op at `index` is a call desugared from a `>>` stage
    pub fn is_piped_call(&self, index: usize) -> bool {
        self.metadata.piped_calls.binary_search(&index).is_ok()
    }

    /// One op per line, prefixed with its index
    pub fn disassemble(&self) -> String {
        let mut out = String::new();
        for (index, op) in self.ops.iter().enumerate() {
            let marker = if self.is_piped_call(index) { " (piped)" } else { "" };
            out.push_str(&format!("{:>4}  {}{}\n", index, op, marker));
        }
        out
    }
}

impl Default for PipelineMetadata {
    fn default() -> Self {
        Self {
            piped_calls: Vec::new(),
            compiler_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
