//! Parser options

use serde::{Deserialize, Serialize};

/// Default limit on nested calls, e.g. `:a(:b(:c(...)))`.
///
/// The grammar itself has no depth bound; deeper input that is otherwise
/// well formed is rejected with `NestingTooDeep`.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// Parser options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Deepest call nesting accepted before failing with
    /// `ParseErrorKind::NestingTooDeep`. Stricter than the grammar, which
    /// allows any depth; raise it to accept deeper input.
    pub max_nesting_depth: usize,
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the call nesting limit
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}
