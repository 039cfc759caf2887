//! Pipeline sugar
//!
//! `base >> :call() >> :call()` desugars to a base selector followed by an
//! ordered sequence of calls.

mod parser;
mod splitter;

pub use parser::PipelineParser;
pub use splitter::{split_pipeline_segments, Segment};
