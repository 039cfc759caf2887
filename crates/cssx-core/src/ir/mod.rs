//! Intermediate Representation (IR) for cssx
//!
//! The IR is a flat postfix program: `Select`, `Str` and `Num` push one
//! value; `Call` of arity N pops the N most recently pushed values and
//! pushes one result.

pub mod op;
pub mod pipeline;

pub use op::{Op, OpKind};
pub use pipeline::{Pipeline, PipelineMetadata};
